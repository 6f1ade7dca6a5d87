//! Output file names.
//!
//! `<PREFIX>-<amp_x>-<freq_x>-<amp_y>-<freq_y>-<phase>` for stills, followed by
//! `-<draw>-<vary>-<dot>-<frames>-<fps>` for animations.

use crate::config::AnimationOpts;
use crate::plot::figure::FigureKind;
use crate::plot::label::format_number;
use crate::sampling::oscillator::{LissajousParams, PhaseSpec};

fn phase_token(phase: PhaseSpec) -> String {
    match phase {
        PhaseSpec::Fixed(phi) => format_number(phi),
        PhaseSpec::Varying => "vary".to_owned(),
    }
}

/// File stem without extension. `anim` is `None` for stills.
pub fn file_stem(kind: FigureKind, params: &LissajousParams, anim: Option<&AnimationOpts>) -> String {
    let mut parts = vec![
        kind.file_prefix().to_owned(),
        format_number(params.x.amplitude),
        format_number(params.x.angular_frequency),
        format_number(params.y.amplitude),
        format_number(params.y.angular_frequency),
        phase_token(params.phase),
    ];
    if let Some(a) = anim {
        parts.extend([
            a.draw.to_string(),
            params.phase.is_varying().to_string(),
            a.show_dot.to_string(),
            a.frames.to_string(),
            a.fps.to_string(),
        ]);
    }
    parts.join("-")
}

/// [`file_stem`] plus `.ext`.
pub fn file_name(
    kind: FigureKind,
    params: &LissajousParams,
    anim: Option<&AnimationOpts>,
    ext: &str,
) -> String {
    format!("{}.{ext}", file_stem(kind, params, anim))
}

#[cfg(test)]
#[path = "../../tests/unit/session/naming.rs"]
mod tests;
