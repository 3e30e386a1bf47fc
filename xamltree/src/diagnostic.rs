// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::path::PathBuf;

use roxmltree::TextPos;

/// A non-fatal problem found while reading or converting an icon.
///
/// Diagnostics never stop a conversion. They either mean that an entry
/// was skipped or that a part of it was degraded.
#[derive(Clone, PartialEq, Debug)]
pub struct Diagnostic {
    /// The key of the affected entry, when known.
    pub key: Option<String>,

    /// What happened.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(key: Option<&str>, kind: DiagnosticKind) -> Self {
        Diagnostic {
            key: key.map(str::to_string),
            kind,
        }
    }

    /// Checks that the whole entry was skipped because of this diagnostic.
    pub fn is_entry_skip(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticKind::MissingKey { .. }
                | DiagnosticKind::InvalidKey
                | DiagnosticKind::UnknownSize
                | DiagnosticKind::MissingDrawing
                | DiagnosticKind::WriteFailed { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.key {
            Some(ref key) => write!(f, "{}: {}", key, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// A list of all diagnostics.
#[derive(Clone, PartialEq, Debug)]
pub enum DiagnosticKind {
    /// A `DrawingImage` without `x:Key`. The entry is skipped.
    MissingKey {
        /// Element position in the input.
        pos: TextPos,
    },

    /// A key that cannot be used as a file name. The entry is skipped.
    InvalidKey,

    /// A key without an allowed size suffix. The entry is skipped.
    UnknownSize,

    /// A `DrawingImage` without `DrawingImage.Drawing`. The entry is skipped.
    MissingDrawing,

    /// A `GeometryDrawing.Brush` element without a brush. `none` is used instead.
    EmptyBrush,

    /// A gradient or an unknown brush. The fallback color is used instead.
    UnsupportedBrush {
        /// Brush element name.
        kind: String,
        /// The color used instead.
        fallback: String,
    },

    /// A `#` color that is not a valid hex color. Passed through as is.
    InvalidColor {
        /// The original value.
        value: String,
    },

    /// A `SolidColorBrush` opacity that is not a number. Full opacity is used instead.
    InvalidOpacity {
        /// The original value.
        value: String,
    },

    /// A `GeometryDrawing` without a geometry. The shape is skipped.
    MissingGeometry,

    /// An empty, multi-child or unknown geometry. The shape is skipped.
    UnsupportedGeometry {
        /// Geometry description.
        kind: String,
    },

    /// A coordinates tuple with a wrong number of items. The shape is skipped.
    InvalidTuple {
        /// Attribute name.
        attribute: &'static str,
        /// The original value.
        value: String,
    },

    /// A transform other than translation and rotation. It is not applied.
    UnsupportedTransform {
        /// Transform element name.
        kind: String,
    },

    /// A `TransformGroup` with a rotation declared before a translation.
    ///
    /// The group is still written as `translate() rotate()`.
    RotationBeforeTranslation,

    /// An output file that cannot be written. The entry is skipped.
    WriteFailed {
        /// Output file path.
        path: PathBuf,
        /// I/O error message.
        reason: String,
    },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DiagnosticKind::MissingKey { pos } => {
                write!(f, "skipped a DrawingImage without a key at {}", pos)
            }
            DiagnosticKind::InvalidKey => {
                write!(f, "skipped, the key cannot be used as a file name")
            }
            DiagnosticKind::UnknownSize => {
                write!(f, "skipped, the key has no valid size suffix")
            }
            DiagnosticKind::MissingDrawing => {
                write!(f, "skipped, no drawing content")
            }
            DiagnosticKind::EmptyBrush => {
                write!(f, "an empty GeometryDrawing.Brush element, using 'none'")
            }
            DiagnosticKind::UnsupportedBrush { ref kind, ref fallback } => {
                write!(f, "{} is not supported, using '{}'", kind, fallback)
            }
            DiagnosticKind::InvalidColor { ref value } => {
                write!(f, "'{}' is not a valid hex color", value)
            }
            DiagnosticKind::InvalidOpacity { ref value } => {
                write!(f, "'{}' is not a valid opacity, using 1", value)
            }
            DiagnosticKind::MissingGeometry => {
                write!(f, "a GeometryDrawing without a geometry, skipped")
            }
            DiagnosticKind::UnsupportedGeometry { ref kind } => {
                write!(f, "an unsupported geometry of type {}, skipped", kind)
            }
            DiagnosticKind::InvalidTuple { attribute, ref value } => {
                write!(f, "an invalid {} value '{}', skipped", attribute, value)
            }
            DiagnosticKind::UnsupportedTransform { ref kind } => {
                write!(f, "{} is not supported, ignored", kind)
            }
            DiagnosticKind::WriteFailed { ref path, ref reason } => {
                write!(f, "failed to write '{}' cause {}, skipped", path.display(), reason)
            }
            DiagnosticKind::RotationBeforeTranslation => {
                write!(
                    f,
                    "RotateTransform is declared before TranslateTransform, \
                     the translation will be applied first"
                )
            }
        }
    }
}

/// A receiver of diagnostics.
pub trait DiagnosticSink {
    /// Receives a single diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    #[inline]
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// A sink that forwards diagnostics to `log::warn!`.
#[derive(Clone, Copy, Default, Debug)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}
