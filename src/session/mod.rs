//! Entry points: stills, single-axes animations and five-panel animations.

pub mod naming;
/// Output targets and in-memory animations.
pub mod output;
/// Still and animation rendering.
pub mod render;
