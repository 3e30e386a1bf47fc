// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use xamltree::{DiagnosticKind, DiagnosticSink, Geometry};

use super::State;
use crate::{Ellipse, Node, Paint, Path, Rect};

/// A fill rule token that WPF puts in front of the path data.
const FILL_RULE_PREFIX: &str = "F1 ";

pub(crate) fn convert(
    geometry: &Geometry,
    paint: Paint,
    state: &State,
    sink: &mut dyn DiagnosticSink,
) -> Option<Node> {
    // A `GeometryGroup` with a single child is the same as the child itself.
    // Only one level is flattened.
    let geometry = match geometry {
        Geometry::Group(ref children) if children.len() == 1 => &children[0],
        _ => geometry,
    };

    match geometry {
        Geometry::Path(ref data) => Some(convert_path(data, paint)),
        Geometry::Ellipse {
            ref center,
            ref radius_x,
            ref radius_y,
        } => convert_ellipse(
            center.as_deref(),
            radius_x.as_deref(),
            radius_y.as_deref(),
            paint,
            state,
            sink,
        ),
        Geometry::Rectangle { ref rect } => convert_rect(rect.as_deref(), paint, state, sink),
        Geometry::Absent => {
            state.report(sink, DiagnosticKind::MissingGeometry);
            None
        }
        Geometry::Empty => {
            unsupported("an empty GeometryDrawing.Geometry".to_string(), state, sink)
        }
        Geometry::Group(ref children) => {
            let kind = format!("GeometryGroup with {} children", children.len());
            unsupported(kind, state, sink)
        }
        Geometry::Unsupported(ref kind) => unsupported(kind.clone(), state, sink),
    }
}

fn unsupported(kind: String, state: &State, sink: &mut dyn DiagnosticSink) -> Option<Node> {
    state.report(sink, DiagnosticKind::UnsupportedGeometry { kind });
    None
}

fn convert_path(data: &str, paint: Paint) -> Node {
    let data = data.strip_prefix(FILL_RULE_PREFIX).unwrap_or(data);
    Node::Path(Path {
        data: data.to_string(),
        paint,
    })
}

fn convert_ellipse(
    center: Option<&str>,
    radius_x: Option<&str>,
    radius_y: Option<&str>,
    paint: Paint,
    state: &State,
    sink: &mut dyn DiagnosticSink,
) -> Option<Node> {
    let center = center.unwrap_or("0,0");
    let (cx, cy) = match split_list(center).as_slice() {
        [cx, cy] => (cx.to_string(), cy.to_string()),
        _ => {
            state.report(
                sink,
                DiagnosticKind::InvalidTuple {
                    attribute: "Center",
                    value: center.to_string(),
                },
            );
            return None;
        }
    };

    Some(Node::Ellipse(Ellipse {
        cx,
        cy,
        rx: radius_x.unwrap_or("1").trim().to_string(),
        ry: radius_y.unwrap_or("1").trim().to_string(),
        paint,
    }))
}

fn convert_rect(
    rect: Option<&str>,
    paint: Paint,
    state: &State,
    sink: &mut dyn DiagnosticSink,
) -> Option<Node> {
    let rect = rect.unwrap_or("0,0,1,1");
    let list = split_list(rect);
    let numbers: Option<Vec<f64>> = list.iter().map(|s| s.parse().ok()).collect();

    let (x, y, width, height) = match (list.as_slice(), numbers.as_deref()) {
        ([x, y, w, h], Some(&[nx, ny, _, _])) => {
            // Default coordinates are not written.
            let x = if nx > 0.0 { Some(x.to_string()) } else { None };
            let y = if ny > 0.0 { Some(y.to_string()) } else { None };
            (x, y, w.to_string(), h.to_string())
        }
        _ => {
            state.report(
                sink,
                DiagnosticKind::InvalidTuple {
                    attribute: "Rect",
                    value: rect.to_string(),
                },
            );
            return None;
        }
    };

    Some(Node::Rect(Rect {
        x,
        y,
        width,
        height,
        paint,
    }))
}

/// Splits a XAML list. Items can be separated by commas and/or spaces.
fn split_list(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::test_state;
    use crate::Options;
    use xamltree::Diagnostic;

    fn run(geometry: Geometry) -> (Option<Node>, Vec<Diagnostic>) {
        let opt = Options::default();
        let mut sink = Vec::new();
        let node = convert(&geometry, Paint::new("red"), &test_state(&opt), &mut sink);
        (node, sink)
    }

    fn rect(value: Option<&str>) -> Geometry {
        Geometry::Rectangle {
            rect: value.map(str::to_string),
        }
    }

    fn ellipse(center: Option<&str>, rx: Option<&str>, ry: Option<&str>) -> Geometry {
        Geometry::Ellipse {
            center: center.map(str::to_string),
            radius_x: rx.map(str::to_string),
            radius_y: ry.map(str::to_string),
        }
    }

    #[test]
    fn path_with_fill_rule() {
        let (node, _) = run(Geometry::Path("F1 M0,0 L10,10".to_string()));
        assert_eq!(
            node,
            Some(Node::Path(Path {
                data: "M0,0 L10,10".to_string(),
                paint: Paint::new("red"),
            }))
        );
    }

    #[test]
    fn path_without_fill_rule() {
        let (node, _) = run(Geometry::Path("M0,0 L10,10 Z".to_string()));
        match node {
            Some(Node::Path(ref p)) => assert_eq!(p.data, "M0,0 L10,10 Z"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn rect_at_origin() {
        let (node, sink) = run(rect(Some("0,0,10,20")));
        assert_eq!(
            node,
            Some(Node::Rect(Rect {
                x: None,
                y: None,
                width: "10".to_string(),
                height: "20".to_string(),
                paint: Paint::new("red"),
            }))
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn rect_with_offset() {
        let (node, _) = run(rect(Some("5,5,10,20")));
        match node {
            Some(Node::Rect(ref r)) => {
                assert_eq!(r.x.as_deref(), Some("5"));
                assert_eq!(r.y.as_deref(), Some("5"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn rect_with_negative_x() {
        let (node, _) = run(rect(Some("-2 3 4 5")));
        match node {
            Some(Node::Rect(ref r)) => {
                assert_eq!(r.x, None);
                assert_eq!(r.y.as_deref(), Some("3"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn rect_default() {
        let (node, _) = run(rect(None));
        match node {
            Some(Node::Rect(ref r)) => {
                assert_eq!(r.x, None);
                assert_eq!(r.width, "1");
                assert_eq!(r.height, "1");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn rect_invalid() {
        for value in ["1,2,3", "a,b,c,d", "Empty"] {
            let (node, sink) = run(rect(Some(value)));
            assert_eq!(node, None);
            assert!(matches!(sink[0].kind, DiagnosticKind::InvalidTuple { attribute: "Rect", .. }));
        }
    }

    #[test]
    fn ellipse_with_attributes() {
        let (node, _) = run(ellipse(Some("8,8.5"), Some("4"), Some("3")));
        assert_eq!(
            node,
            Some(Node::Ellipse(Ellipse {
                cx: "8".to_string(),
                cy: "8.5".to_string(),
                rx: "4".to_string(),
                ry: "3".to_string(),
                paint: Paint::new("red"),
            }))
        );
    }

    #[test]
    fn ellipse_defaults() {
        let (node, _) = run(ellipse(None, None, None));
        match node {
            Some(Node::Ellipse(ref e)) => {
                assert_eq!((e.cx.as_str(), e.cy.as_str()), ("0", "0"));
                assert_eq!((e.rx.as_str(), e.ry.as_str()), ("1", "1"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn single_child_group_is_flattened() {
        let direct = run(rect(Some("1,1,2,2"))).0;
        let grouped = run(Geometry::Group(vec![rect(Some("1,1,2,2"))])).0;
        assert!(direct.is_some());
        assert_eq!(direct, grouped);
    }

    #[test]
    fn flattening_is_not_recursive() {
        let nested = Geometry::Group(vec![Geometry::Group(vec![rect(None)])]);
        let (node, sink) = run(nested);
        assert_eq!(node, None);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn multi_child_group_is_unsupported() {
        let (node, sink) = run(Geometry::Group(vec![rect(None), rect(None)]));
        assert_eq!(node, None);
        assert_eq!(
            sink[0].kind,
            DiagnosticKind::UnsupportedGeometry {
                kind: "GeometryGroup with 2 children".to_string()
            }
        );
    }

    #[test]
    fn empty_group_is_unsupported() {
        let (node, sink) = run(Geometry::Group(Vec::new()));
        assert_eq!(node, None);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn unknown_geometry() {
        let (node, sink) = run(Geometry::Unsupported("PathGeometry".to_string()));
        assert_eq!(node, None);
        assert_eq!(
            sink[0].kind,
            DiagnosticKind::UnsupportedGeometry {
                kind: "PathGeometry".to_string()
            }
        );
    }

    #[test]
    fn missing_geometry() {
        let (node, sink) = run(Geometry::Absent);
        assert_eq!(node, None);
        assert_eq!(sink[0].kind, DiagnosticKind::MissingGeometry);
    }
}
