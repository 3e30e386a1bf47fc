// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use xamltree::{Diagnostic, DiagnosticKind, DiagnosticSink, Drawing, ResourceEntry};

use crate::{Document, Group, Node, Options};

mod paint;
mod shapes;
mod transform;

pub(crate) struct State<'a> {
    /// The key of the entry being converted.
    pub(crate) key: &'a str,
    pub(crate) opt: &'a Options,
}

impl State<'_> {
    pub(crate) fn report(&self, sink: &mut dyn DiagnosticSink, kind: DiagnosticKind) {
        sink.report(Diagnostic::new(Some(self.key), kind));
    }
}

/// Converts a single dictionary entry into an SVG document.
///
/// Unsupported constructs are reported to `sink` and either degraded or skipped.
/// The conversion itself never fails.
pub fn convert_entry(
    entry: &ResourceEntry,
    opt: &Options,
    sink: &mut dyn DiagnosticSink,
) -> Document {
    let state = State {
        key: &entry.key,
        opt,
    };

    let mut root = Group::default();
    convert_children(&entry.drawing, &state, sink, &mut root);

    Document {
        id: entry.key.clone(),
        size: entry.size,
        root,
    }
}

fn convert_children(
    drawings: &[Drawing],
    state: &State,
    sink: &mut dyn DiagnosticSink,
    parent: &mut Group,
) {
    for drawing in drawings {
        convert_drawing(drawing, state, sink, parent);
    }
}

fn convert_drawing(
    drawing: &Drawing,
    state: &State,
    sink: &mut dyn DiagnosticSink,
    parent: &mut Group,
) {
    match drawing {
        Drawing::Group(ref group) => {
            let mut g = Group {
                transform: transform::convert(group.transform.as_ref(), state, sink),
                children: Vec::with_capacity(group.children.len()),
            };

            convert_children(&group.children, state, sink, &mut g);
            parent.children.push(Node::Group(g));
        }
        Drawing::Geometry(ref drawing) => {
            // Brush goes first, so its diagnostics are reported even for skipped shapes.
            let paint = paint::convert(&drawing.brush, state, sink);
            if let Some(node) = shapes::convert(&drawing.geometry, paint, state, sink) {
                parent.children.push(node);
            }
        }
        Drawing::Unknown(ref name) => {
            log::debug!("'{}': {} is not supported. Skipped.", state.key, name);
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state(opt: &Options) -> State {
    State { key: "Test16", opt }
}
