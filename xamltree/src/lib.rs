// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Represents a WPF XAML `ResourceDictionary` of `DrawingImage` icons as a read-only typed tree.

`xamltree` uses [`roxmltree`](https://github.com/RazrFalcon/roxmltree) for parsing,
but instead of producing an XML tree, it produces a list of icon entries
where every drawing, brush and geometry is already resolved into a sum type.
Brushes and geometries can be declared either as an attribute string
or as a property element. Both forms are unified during parsing,
so a caller doesn't have to check both of them.

Entries that cannot be converted (no key, no size suffix, no drawing)
are skipped and reported to a [`DiagnosticSink`].
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod diagnostic;
mod ext;
#[rustfmt::skip] mod names;
mod parse;

pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, LogSink};
use names::{AId, EId};
pub use parse::{image_size, is_valid_key};

pub use roxmltree;

/// The WPF presentation namespace. All supported elements must use it.
pub const PRESENTATION_NS: &str = "http://schemas.microsoft.com/winfx/2006/xaml/presentation";

/// The XAML language namespace. Contains the `Key` attribute.
pub const KEYS_NS: &str = "http://schemas.microsoft.com/winfx/2006/xaml";

/// Icon sizes that can be encoded in an entry key.
pub const DEFAULT_SIZES: &[u32] = &[8, 12, 16, 24, 32, 48, 64, 96, 128];

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Failed to parse an XML data.
    ParsingFailed(roxmltree::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "XAML data parsing failed cause {}", e)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Parsing options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Sizes allowed as a key suffix.
    ///
    /// An entry key must end with one of them, otherwise the entry is skipped.
    ///
    /// Default: [`DEFAULT_SIZES`]
    pub sizes: Vec<u32>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

/// A parsed resource dictionary.
#[derive(Clone, PartialEq, Debug)]
pub struct Dictionary {
    /// Entries that passed the key, size and drawing checks, in document order.
    pub entries: Vec<ResourceEntry>,
}

impl Dictionary {
    /// Parses a `Dictionary` from raw XAML data.
    ///
    /// A leading UTF-8 byte order mark is allowed.
    pub fn from_data(
        data: &[u8],
        opt: &Options,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, Error> {
        let text = std::str::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?;
        Self::from_str(text, opt, sink)
    }

    /// Parses a `Dictionary` from a XAML string.
    pub fn from_str(
        text: &str,
        opt: &Options,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, Error> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let doc = roxmltree::Document::parse(text)?;
        Ok(Self::from_xmltree(&doc, opt, sink))
    }

    /// Collects entries from an already parsed `roxmltree::Document`.
    pub fn from_xmltree(
        doc: &roxmltree::Document,
        opt: &Options,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        parse::parse_dictionary(doc, opt, sink)
    }
}

/// A named `DrawingImage`.
#[derive(Clone, PartialEq, Debug)]
pub struct ResourceEntry {
    /// The `x:Key` value. Unique inside a dictionary.
    pub key: String,

    /// The icon size in pixels, taken from the key suffix.
    pub size: u32,

    /// Content of the `DrawingImage.Drawing` element.
    pub drawing: Vec<Drawing>,
}

/// A drawing node.
#[derive(Clone, PartialEq, Debug)]
pub enum Drawing {
    /// A `DrawingGroup`.
    Group(DrawingGroup),

    /// A `GeometryDrawing`.
    Geometry(GeometryDrawing),

    /// Any other drawing kind, like `ImageDrawing` or `GlyphRunDrawing`.
    ///
    /// Contains the element name.
    Unknown(String),
}

/// A `DrawingGroup` element.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct DrawingGroup {
    /// Content of the `DrawingGroup.Transform` element.
    pub transform: Option<Transform>,

    /// Child drawings in document order.
    pub children: Vec<Drawing>,
}

/// A `GeometryDrawing` element.
#[derive(Clone, PartialEq, Debug)]
pub struct GeometryDrawing {
    /// A fill description.
    pub brush: Fill,

    /// A shape description.
    pub geometry: Geometry,
}

/// A group transform.
///
/// Only translation and rotation are supported.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Transform {
    /// The first `TranslateTransform`.
    pub translate: Option<Translate>,

    /// The first `RotateTransform`.
    pub rotate: Option<Rotate>,

    /// Set when both are present and the rotation was declared first.
    pub rotate_first: bool,

    /// Names of other transforms, like `ScaleTransform`, in document order.
    ///
    /// They are not applied.
    pub unsupported: Vec<String>,
}

/// A `TranslateTransform` element.
#[derive(Clone, PartialEq, Debug)]
pub struct Translate {
    /// `X` attribute, `0` when not set.
    pub x: String,
    /// `Y` attribute, `0` when not set.
    pub y: String,
}

/// A `RotateTransform` element.
#[derive(Clone, PartialEq, Debug)]
pub struct Rotate {
    /// `Angle` attribute in degrees, `0` when not set.
    pub angle: String,

    /// `CenterX` and `CenterY` attributes.
    ///
    /// `None` when neither is set. A missing half defaults to `0`.
    pub center: Option<(String, String)>,
}

/// A fill description of a `GeometryDrawing`.
#[derive(Clone, PartialEq, Debug)]
pub enum Fill {
    /// No `Brush` attribute and no `GeometryDrawing.Brush` element.
    Absent,

    /// A `Brush` attribute value.
    Inline(String),

    /// A `GeometryDrawing.Brush` element without children.
    Empty,

    /// A `SolidColorBrush` element.
    Solid {
        /// `Color` attribute.
        color: Option<String>,
        /// `Opacity` attribute.
        opacity: Option<String>,
    },

    /// Any other brush, like `LinearGradientBrush`.
    ///
    /// Contains the element name.
    Unsupported(String),
}

/// A shape description of a `GeometryDrawing`.
#[derive(Clone, PartialEq, Debug)]
pub enum Geometry {
    /// No `Geometry` attribute and no `GeometryDrawing.Geometry` element.
    Absent,

    /// A `Geometry` attribute value. Path data in the XAML mini-language.
    Path(String),

    /// A `GeometryDrawing.Geometry` element without children.
    Empty,

    /// An `EllipseGeometry` element.
    Ellipse {
        /// `Center` attribute, a `x,y` pair.
        center: Option<String>,
        /// `RadiusX` attribute.
        radius_x: Option<String>,
        /// `RadiusY` attribute.
        radius_y: Option<String>,
    },

    /// A `RectangleGeometry` element.
    Rectangle {
        /// `Rect` attribute, a `x,y,width,height` tuple.
        rect: Option<String>,
    },

    /// A `GeometryGroup` element.
    Group(Vec<Geometry>),

    /// Any other geometry, like `PathGeometry`.
    ///
    /// Contains the element name.
    Unsupported(String),
}
