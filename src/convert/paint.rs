// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use xamltree::{DiagnosticKind, DiagnosticSink, Fill};

use super::State;
use crate::{Opacity, Paint};

pub(crate) fn convert(fill: &Fill, state: &State, sink: &mut dyn DiagnosticSink) -> Paint {
    match fill {
        // No brush means no fill in WPF.
        Fill::Absent => Paint::none(),
        Fill::Inline(ref color) => split_argb(color, state, sink),
        Fill::Empty => {
            state.report(sink, DiagnosticKind::EmptyBrush);
            Paint::none()
        }
        Fill::Solid {
            ref color,
            ref opacity,
        } => convert_solid(color.as_deref(), opacity.as_deref(), state, sink),
        Fill::Unsupported(ref kind) => {
            state.report(
                sink,
                DiagnosticKind::UnsupportedBrush {
                    kind: kind.clone(),
                    fallback: state.opt.fallback_color.clone(),
                },
            );
            Paint::new(&state.opt.fallback_color)
        }
    }
}

/// Converts a WPF color into an SVG color and an opacity.
///
/// `#AARRGGBB` is split into `#rrggbb` and a `0..1` opacity.
/// Named colors and `#RRGGBB` are lowercased and kept with a full opacity.
fn split_argb(color: &str, state: &State, sink: &mut dyn DiagnosticSink) -> Paint {
    let color = color.trim();

    if !color.starts_with('#') || color.len() == 7 {
        if color.eq_ignore_ascii_case("transparent") {
            return Paint::none();
        }

        return Paint::new(&color.to_ascii_lowercase());
    }

    let digits = &color[1..];
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        state.report(sink, DiagnosticKind::InvalidColor { value: color.to_string() });
        return Paint::new(&color.to_ascii_lowercase());
    }

    match digits.len() {
        // #AARRGGBB
        8 => {
            let alpha = hex_byte(&digits[0..2]);
            Paint {
                color: format!("#{}", digits[2..].to_ascii_lowercase()),
                opacity: Opacity::from_alpha(alpha),
            }
        }
        // #ARGB
        4 => {
            let alpha = hex_byte(&digits[0..1]) * 17;
            Paint {
                color: format!("#{}", digits[1..].to_ascii_lowercase()),
                opacity: Opacity::from_alpha(alpha),
            }
        }
        // #RGB
        3 => Paint::new(&color.to_ascii_lowercase()),
        _ => {
            state.report(sink, DiagnosticKind::InvalidColor { value: color.to_string() });
            Paint::new(&color.to_ascii_lowercase())
        }
    }
}

// The caller guarantees that the string contains only hex digits.
fn hex_byte(s: &str) -> u8 {
    u8::from_str_radix(s, 16).unwrap_or(0)
}

fn convert_solid(
    color: Option<&str>,
    opacity: Option<&str>,
    state: &State,
    sink: &mut dyn DiagnosticSink,
) -> Paint {
    let color = match color {
        Some(c) if c.starts_with('#') && !c.eq_ignore_ascii_case("transparent") => c,
        _ => return Paint::none(),
    };

    let opacity = match opacity {
        Some(value) => match value.trim().parse::<f64>() {
            Ok(n) => Opacity::new(n),
            Err(_) => {
                state.report(sink, DiagnosticKind::InvalidOpacity { value: value.to_string() });
                Opacity::Full
            }
        },
        None => Opacity::Full,
    };

    Paint {
        color: color.to_string(),
        opacity,
    }
}
