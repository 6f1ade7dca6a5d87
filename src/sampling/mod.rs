pub(crate) mod oscillator;
pub(crate) mod period;
pub(crate) mod time_axis;
