// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use roxmltree::Node;

use crate::ext::XamlNodeExt;
use crate::{
    AId, DiagnosticKind, DiagnosticSink, Diagnostic, Dictionary, Drawing, DrawingGroup, EId, Fill,
    Geometry, GeometryDrawing, Options, ResourceEntry, Rotate, Transform, Translate, KEYS_NS,
};

pub(crate) fn parse_dictionary(
    xml: &roxmltree::Document,
    opt: &Options,
    sink: &mut dyn DiagnosticSink,
) -> Dictionary {
    let mut entries = Vec::new();
    for node in xml.root_element().children() {
        if node.tag_id() != Some(EId::DrawingImage) {
            continue;
        }

        if let Some(entry) = parse_entry(xml, node, opt, sink) {
            log::debug!("Found '{}' ({}px).", entry.key, entry.size);
            entries.push(entry);
        }
    }

    Dictionary { entries }
}

fn parse_entry(
    xml: &roxmltree::Document,
    node: Node,
    opt: &Options,
    sink: &mut dyn DiagnosticSink,
) -> Option<ResourceEntry> {
    let key = match node.attribute((KEYS_NS, "Key")) {
        Some(key) if !key.is_empty() => key,
        _ => {
            let pos = xml.text_pos_at(node.range().start);
            sink.report(Diagnostic::new(None, DiagnosticKind::MissingKey { pos }));
            return None;
        }
    };

    if !is_valid_key(key) {
        sink.report(Diagnostic::new(Some(key), DiagnosticKind::InvalidKey));
        return None;
    }

    let size = match image_size(key, &opt.sizes) {
        Some(v) => v,
        None => {
            sink.report(Diagnostic::new(Some(key), DiagnosticKind::UnknownSize));
            return None;
        }
    };

    let drawing = match node.child_by_tag(EId::DrawingImageDrawing) {
        Some(v) => v,
        None => {
            sink.report(Diagnostic::new(Some(key), DiagnosticKind::MissingDrawing));
            return None;
        }
    };

    Some(ResourceEntry {
        key: key.to_string(),
        size,
        drawing: parse_drawings(drawing),
    })
}

/// Extracts the pixel size from an entry key.
///
/// The trailing digits of the key must be equal to one of the `sizes`.
/// So `Close16` is 16, `Close96` is 96 and not 6,
/// while `Close016` and `Close7` have no size.
pub fn image_size(key: &str, sizes: &[u32]) -> Option<u32> {
    let stem_len = key.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let suffix = &key[stem_len..];
    if suffix.is_empty() {
        return None;
    }

    sizes.iter().copied().find(|size| size.to_string() == suffix)
}

/// Checks that a key can be used as an output file name.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key != "." && key != ".." && !key.contains(|c: char| c == '/' || c == '\\')
}

fn parse_drawings(parent: Node) -> Vec<Drawing> {
    parent.content_children().into_iter().map(parse_drawing).collect()
}

fn parse_drawing(node: Node) -> Drawing {
    match node.tag_id() {
        Some(EId::DrawingGroup) => Drawing::Group(DrawingGroup {
            transform: node.child_by_tag(EId::DrawingGroupTransform).map(parse_transform),
            children: parse_drawings(node),
        }),
        Some(EId::GeometryDrawing) => Drawing::Geometry(GeometryDrawing {
            brush: parse_fill(node),
            geometry: parse_geometry(node),
        }),
        _ => Drawing::Unknown(node.kind_name()),
    }
}

fn parse_transform(node: Node) -> Transform {
    // The actual transforms can be wrapped into a `TransformGroup`.
    let container = node.child_by_tag(EId::TransformGroup).unwrap_or(node);

    let mut translate = None;
    let mut rotate = None;
    let mut unsupported = Vec::new();
    for (idx, child) in container.content_children().into_iter().enumerate() {
        match child.tag_id() {
            Some(EId::TranslateTransform) if translate.is_none() => {
                let ts = Translate {
                    x: child.attr(AId::X).unwrap_or("0").to_string(),
                    y: child.attr(AId::Y).unwrap_or("0").to_string(),
                };
                translate = Some((idx, ts));
            }
            Some(EId::RotateTransform) if rotate.is_none() => {
                let cx = child.attr(AId::CenterX);
                let cy = child.attr(AId::CenterY);
                let center = if cx.is_some() || cy.is_some() {
                    Some((
                        cx.unwrap_or("0").to_string(),
                        cy.unwrap_or("0").to_string(),
                    ))
                } else {
                    None
                };

                let ts = Rotate {
                    angle: child.attr(AId::Angle).unwrap_or("0").to_string(),
                    center,
                };
                rotate = Some((idx, ts));
            }
            // Only the first one of each kind is used.
            Some(EId::TranslateTransform) | Some(EId::RotateTransform) => {}
            _ => unsupported.push(child.kind_name()),
        }
    }

    let rotate_first = match (&translate, &rotate) {
        (Some((t_idx, _)), Some((r_idx, _))) => r_idx < t_idx,
        _ => false,
    };

    Transform {
        translate: translate.map(|(_, ts)| ts),
        rotate: rotate.map(|(_, ts)| ts),
        rotate_first,
        unsupported,
    }
}

fn parse_fill(node: Node) -> Fill {
    if let Some(value) = node.attr(AId::Brush) {
        return Fill::Inline(value.to_string());
    }

    let wrapper = match node.child_by_tag(EId::GeometryDrawingBrush) {
        Some(v) => v,
        None => return Fill::Absent,
    };

    // The actual brush is the first child.
    let brush = match wrapper.first_element() {
        Some(v) => v,
        None => return Fill::Empty,
    };

    match brush.tag_id() {
        Some(EId::SolidColorBrush) => Fill::Solid {
            color: brush.attr(AId::Color).map(str::to_string),
            opacity: brush.attr(AId::Opacity).map(str::to_string),
        },
        _ => Fill::Unsupported(brush.kind_name()),
    }
}

fn parse_geometry(node: Node) -> Geometry {
    if let Some(value) = node.attr(AId::Geometry) {
        return Geometry::Path(value.to_string());
    }

    let wrapper = match node.child_by_tag(EId::GeometryDrawingGeometry) {
        Some(v) => v,
        None => return Geometry::Absent,
    };

    match wrapper.first_element() {
        Some(v) => parse_geometry_object(v),
        None => Geometry::Empty,
    }
}

fn parse_geometry_object(node: Node) -> Geometry {
    match node.tag_id() {
        Some(EId::EllipseGeometry) => Geometry::Ellipse {
            center: node.attr(AId::Center).map(str::to_string),
            radius_x: node.attr(AId::RadiusX).map(str::to_string),
            radius_y: node.attr(AId::RadiusY).map(str::to_string),
        },
        Some(EId::RectangleGeometry) => Geometry::Rectangle {
            rect: node.attr(AId::Rect).map(str::to_string),
        },
        Some(EId::GeometryGroup) => Geometry::Group(
            node.content_children()
                .into_iter()
                .map(parse_geometry_object)
                .collect(),
        ),
        _ => Geometry::Unsupported(node.kind_name()),
    }
}
