// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use xamltree::{DiagnosticKind, DiagnosticSink, Transform};

use super::State;

/// Converts a `DrawingGroup.Transform` into an SVG `transform` attribute value.
///
/// The translation is always written before the rotation.
/// Returns `None` when there is nothing to write.
pub(crate) fn convert(
    ts: Option<&Transform>,
    state: &State,
    sink: &mut dyn DiagnosticSink,
) -> Option<String> {
    let ts = ts?;

    for kind in &ts.unsupported {
        state.report(sink, DiagnosticKind::UnsupportedTransform { kind: kind.clone() });
    }

    if ts.rotate_first {
        state.report(sink, DiagnosticKind::RotationBeforeTranslation);
    }

    let mut list = Vec::with_capacity(2);

    if let Some(ref translate) = ts.translate {
        list.push(format!("translate({},{})", translate.x, translate.y));
    }

    if let Some(ref rotate) = ts.rotate {
        match rotate.center {
            Some((ref cx, ref cy)) => list.push(format!("rotate({},{},{})", rotate.angle, cx, cy)),
            None => list.push(format!("rotate({})", rotate.angle)),
        }
    }

    if list.is_empty() {
        None
    } else {
        Some(list.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::test_state;
    use crate::Options;
    use xamltree::{Rotate, Translate};

    fn translate(x: &str, y: &str) -> Option<Translate> {
        Some(Translate {
            x: x.to_string(),
            y: y.to_string(),
        })
    }

    fn rotate(angle: &str) -> Option<Rotate> {
        Some(Rotate {
            angle: angle.to_string(),
            center: None,
        })
    }

    fn run(ts: Option<&Transform>) -> (Option<String>, Vec<xamltree::Diagnostic>) {
        let opt = Options::default();
        let mut sink = Vec::new();
        let s = convert(ts, &test_state(&opt), &mut sink);
        (s, sink)
    }

    #[test]
    fn no_transform() {
        assert_eq!(run(None).0, None);
    }

    #[test]
    fn empty_transform() {
        assert_eq!(run(Some(&Transform::default())).0, None);
    }

    #[test]
    fn translate_only() {
        let ts = Transform {
            translate: translate("10", "-5.5"),
            ..Transform::default()
        };
        assert_eq!(run(Some(&ts)).0.as_deref(), Some("translate(10,-5.5)"));
    }

    #[test]
    fn rotate_only() {
        let ts = Transform {
            rotate: rotate("45"),
            ..Transform::default()
        };
        assert_eq!(run(Some(&ts)).0.as_deref(), Some("rotate(45)"));
    }

    #[test]
    fn rotate_with_center() {
        let ts = Transform {
            rotate: Some(Rotate {
                angle: "90".to_string(),
                center: Some(("8".to_string(), "8".to_string())),
            }),
            ..Transform::default()
        };
        assert_eq!(run(Some(&ts)).0.as_deref(), Some("rotate(90,8,8)"));
    }

    #[test]
    fn translate_then_rotate() {
        let ts = Transform {
            translate: translate("1", "2"),
            rotate: rotate("30"),
            ..Transform::default()
        };
        let (s, sink) = run(Some(&ts));
        assert_eq!(s.as_deref(), Some("translate(1,2) rotate(30)"));
        assert!(sink.is_empty());
    }

    #[test]
    fn unsupported_transforms_are_reported() {
        let ts = Transform {
            translate: translate("1", "2"),
            unsupported: vec!["ScaleTransform".to_string(), "MatrixTransform".to_string()],
            ..Transform::default()
        };
        let (s, sink) = run(Some(&ts));
        assert_eq!(s.as_deref(), Some("translate(1,2)"));
        assert_eq!(
            sink.iter().map(|d| d.kind.clone()).collect::<Vec<_>>(),
            [
                DiagnosticKind::UnsupportedTransform {
                    kind: "ScaleTransform".to_string()
                },
                DiagnosticKind::UnsupportedTransform {
                    kind: "MatrixTransform".to_string()
                },
            ]
        );
    }

    #[test]
    fn only_unsupported_transforms() {
        let ts = Transform {
            unsupported: vec!["SkewTransform".to_string()],
            ..Transform::default()
        };
        let (s, sink) = run(Some(&ts));
        assert_eq!(s, None);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn rotation_declared_first_is_reported() {
        let ts = Transform {
            translate: translate("1", "2"),
            rotate: rotate("30"),
            rotate_first: true,
            ..Transform::default()
        };
        let (s, sink) = run(Some(&ts));
        assert_eq!(s.as_deref(), Some("translate(1,2) rotate(30)"));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].kind, DiagnosticKind::RotationBeforeTranslation);
    }
}
