use std::ops::Range;

use crate::foundation::core::{Fps, FrameIndex, Point};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::sampling::oscillator::{LissajousParams, Trajectory};
use crate::sampling::time_axis::TimeAxis;
use crate::schedule::phase::PhasePlan;

/// Map a frame to a time-axis index: `floor(frame * n / frames)`, clamped to `n - 1`.
pub fn frame_to_index(frame: u64, frames: u64, n: usize) -> LissajousResult<usize> {
    if frames == 0 {
        return Err(LissajousError::invalid("frame count must be > 0"));
    }
    if n == 0 {
        return Err(LissajousError::invalid("time axis is empty"));
    }
    if frame >= frames {
        return Err(LissajousError::invalid(format!(
            "frame {frame} is out of range for {frames} frames"
        )));
    }
    let idx = (u128::from(frame) * n as u128) / u128::from(frames);
    Ok(usize::try_from(idx).unwrap_or(usize::MAX).min(n - 1))
}

/// Portion of the trajectory exposed on a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Window {
    /// Every sample.
    Full,
    /// `[0, end]`, inclusive.
    Prefix {
        /// Last exposed index.
        end: usize,
    },
    /// `[start, n)`.
    Suffix {
        /// First exposed index.
        start: usize,
    },
}

impl Window {
    /// Draw mode traces the prefix during the first half of the frames and erases it from the
    /// front during the second half. `half = frames / 2`.
    pub fn for_frame(draw: bool, frame: u64, frames: u64, index: usize) -> Self {
        if !draw {
            return Self::Full;
        }
        if frame < frames / 2 {
            Self::Prefix { end: index }
        } else {
            Self::Suffix { start: index }
        }
    }

    /// Exposed indices on an axis of `n` samples.
    pub fn range(self, n: usize) -> Range<usize> {
        match self {
            Self::Full => 0..n,
            Self::Prefix { end } => 0..end.saturating_add(1).min(n),
            Self::Suffix { start } => start.min(n)..n,
        }
    }
}

/// Line through sample points; `None` breaks the line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Option<Point>>,
}

impl Polyline {
    /// Polyline from points and gaps.
    pub fn new(points: Vec<Option<Point>>) -> Self {
        Self { points }
    }

    /// Points in order, `None` at gaps.
    pub fn points(&self) -> &[Option<Point>] {
        &self.points
    }

    /// Points plus gaps.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when there is nothing to draw or break.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of breaks.
    pub fn gap_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_none()).count()
    }

    /// Connected runs of points.
    pub fn segments(&self) -> impl Iterator<Item = &[Option<Point>]> + '_ {
        self.points.split(Option::is_none).filter(|s| !s.is_empty())
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Some).collect())
    }
}

/// Wrap times modulo `period`, replacing every sample that jumps backwards with a gap.
///
/// Comparisons use the wrapped values, so a gap never hides the sample that follows it.
pub fn wrap_with_gaps(times: &[f64], period: f64) -> Vec<Option<f64>> {
    if !(period > 0.0 && period.is_finite()) {
        return times.iter().copied().map(Some).collect();
    }
    let wrapped: Vec<f64> = times.iter().map(|t| t.rem_euclid(period)).collect();
    wrapped
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            if i > 0 && w < wrapped[i - 1] {
                None
            } else {
                Some(w)
            }
        })
        .collect()
}

/// Animation settings consumed by the scheduler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleOpts {
    /// Number of frames, at least one.
    pub frames: u32,
    /// Playback rate; fixes the animation duration.
    pub fps: Fps,
    /// Trace then erase the curve instead of showing it whole.
    pub draw: bool,
    /// Mark the current sample with a dot.
    pub show_dot: bool,
    /// Also project the trajectory onto the wrapped time axes.
    pub waves: bool,
}

/// Everything that varies between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Frame being resolved.
    pub frame: FrameIndex,
    /// Phase of the y oscillator.
    pub phase: f64,
    /// Current time-axis sample.
    pub index: usize,
    /// Exposed part of the trajectory.
    pub window: Window,
}

/// Waveforms projected onto the wrapped time axes.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveProjections {
    /// `(x, t_wrapped)` points, for the panels above and below the figure.
    pub x_wave: Polyline,
    /// `(t_wrapped, y)` points, for the panels left and right of the figure.
    pub y_wave: Polyline,
    /// Current sample on `x_wave`, when dots are shown.
    pub x_marker: Option<Point>,
    /// Current sample on `y_wave`, when dots are shown.
    pub y_marker: Option<Point>,
    /// Wrap period of the time axes: half the animation duration.
    pub half_t: f64,
}

/// Coordinates handed to the renderer for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameGeometry {
    /// Frame this geometry belongs to.
    pub frame: FrameIndex,
    /// Phase the curve was evaluated with.
    pub phase: f64,
    /// Exposed part of the trajectory.
    pub curve: Polyline,
    /// Current sample, when dots are shown.
    pub marker: Option<Point>,
    /// Only present for five-panel figures.
    pub waves: Option<WaveProjections>,
}

impl FrameGeometry {
    /// The complete trajectory at the base phase, without markers.
    pub fn still(params: &LissajousParams) -> Self {
        let axis = TimeAxis::for_frequencies(params.x.angular_frequency, params.y.angular_frequency);
        let phase = params.phase.base();
        let traj = Trajectory::evaluate(params, &axis, phase);
        Self {
            frame: FrameIndex(0),
            phase,
            curve: (0..traj.len()).filter_map(|i| traj.point(i)).collect(),
            marker: None,
            waves: None,
        }
    }
}

/// Read-only per-animation data plus a pure per-frame update.
#[derive(Clone, Debug)]
pub struct FrameUpdater {
    params: LissajousParams,
    opts: ScheduleOpts,
    axis: TimeAxis,
    clock: Vec<f64>,
    half_t: f64,
    phases: PhasePlan,
    fixed: Option<Trajectory>,
}

impl FrameUpdater {
    /// Derive the time axis, clock and phase plan. Fails for zero frames.
    pub fn new(params: LissajousParams, opts: ScheduleOpts) -> LissajousResult<Self> {
        if opts.frames == 0 {
            return Err(LissajousError::invalid("animation needs at least one frame"));
        }
        let axis = TimeAxis::for_frequencies(params.x.angular_frequency, params.y.angular_frequency);
        let duration = opts.fps.frames_to_secs(u64::from(opts.frames));
        let clock = axis.normalized(duration);
        let half_t = duration / 2.0;
        let phases = PhasePlan::new(params.phase, opts.frames)?;
        let fixed = match &phases {
            PhasePlan::Constant(phi) => Some(Trajectory::evaluate(&params, &axis, *phi)),
            PhasePlan::Scheduled(_) => None,
        };

        tracing::debug!(
            period = axis.period(),
            samples = axis.len(),
            frames = opts.frames,
            half_t,
            varying_phase = fixed.is_none(),
            "frame schedule ready"
        );

        Ok(Self {
            params,
            opts,
            axis,
            clock,
            half_t,
            phases,
            fixed,
        })
    }

    /// Figure parameters.
    pub fn params(&self) -> &LissajousParams {
        &self.params
    }

    /// Animation settings.
    pub fn opts(&self) -> &ScheduleOpts {
        &self.opts
    }

    /// Shared sample times.
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Number of frames.
    pub fn frame_count(&self) -> u32 {
        self.opts.frames
    }

    /// Time axis rescaled to animation seconds.
    pub fn clock(&self) -> &[f64] {
        &self.clock
    }

    /// Wrap period of the waveform panels in animation seconds.
    pub fn half_t(&self) -> f64 {
        self.half_t
    }

    /// Resolve phase, time index and window for `frame`.
    pub fn state(&self, frame: FrameIndex) -> LissajousResult<FrameState> {
        let frames = u64::from(self.opts.frames);
        let index = frame_to_index(frame.0, frames, self.axis.len())?;
        Ok(FrameState {
            frame,
            phase: self.phases.phase_at(frame.0)?,
            index,
            window: Window::for_frame(self.opts.draw, frame.0, frames, index),
        })
    }

    /// Compute fresh coordinates for a frame. Nothing is cached across calls.
    pub fn update(&self, state: &FrameState) -> FrameGeometry {
        let evaluated;
        let traj = match &self.fixed {
            Some(traj) => traj,
            None => {
                evaluated = Trajectory::evaluate(&self.params, &self.axis, state.phase);
                &evaluated
            }
        };

        let range = state.window.range(traj.len());
        let curve: Polyline = range.clone().filter_map(|i| traj.point(i)).collect();
        let head = traj.point(state.index);
        let marker = if self.opts.show_dot { head } else { None };

        let waves = self.opts.waves.then(|| {
            let wrapped = wrap_with_gaps(&self.clock[range.clone()], self.half_t);
            let x_wave = Polyline::new(
                range
                    .clone()
                    .zip(wrapped.iter().copied())
                    .map(|(i, w)| w.map(|w| Point::new(traj.x[i], w)))
                    .collect(),
            );
            let y_wave = Polyline::new(
                range
                    .zip(wrapped.iter().copied())
                    .map(|(i, w)| w.map(|w| Point::new(w, traj.y[i])))
                    .collect(),
            );
            let t_head = self.clock[state.index].rem_euclid(self.half_t);
            WaveProjections {
                x_wave,
                y_wave,
                x_marker: marker.map(|p| Point::new(p.x, t_head)),
                y_marker: marker.map(|p| Point::new(t_head, p.y)),
                half_t: self.half_t,
            }
        });

        FrameGeometry {
            frame: state.frame,
            phase: state.phase,
            curve,
            marker,
            waves,
        }
    }

    /// [`state`](Self::state) followed by [`update`](Self::update).
    pub fn geometry(&self, frame: FrameIndex) -> LissajousResult<FrameGeometry> {
        let state = self.state(frame)?;
        Ok(self.update(&state))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/frame.rs"]
mod tests;
