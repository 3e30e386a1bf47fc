// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// An SVG document produced from a single `DrawingImage`.
///
/// `svg` element in SVG.
#[derive(Clone, PartialEq, Debug)]
pub struct Document {
    /// Element's ID. The original entry key.
    ///
    /// Also used as the output file stem.
    pub id: String,

    /// Viewport size. The viewBox is always `0 0 size size`.
    pub size: u32,

    /// Top-level content.
    ///
    /// Its transform is never written, only children.
    pub root: Group,
}

/// A document node.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    Group(Group),
    Path(Path),
    Ellipse(Ellipse),
    Rect(Rect),
}

/// `g` element in SVG.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Group {
    /// Element transform, ready to be written.
    ///
    /// `None` means no `transform` attribute at all.
    pub transform: Option<String>,

    /// Children in paint order.
    pub children: Vec<Node>,
}

/// `path` element in SVG.
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
    /// `d` attribute. Not validated.
    pub data: String,

    /// Shape fill.
    pub paint: Paint,
}

/// `ellipse` element in SVG.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub struct Ellipse {
    pub cx: String,
    pub cy: String,
    pub rx: String,
    pub ry: String,
    pub paint: Paint,
}

/// `rect` element in SVG.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub struct Rect {
    /// `None` when the value is not positive.
    pub x: Option<String>,
    /// `None` when the value is not positive.
    pub y: Option<String>,
    pub width: String,
    pub height: String,
    pub paint: Paint,
}

/// A resolved fill.
#[derive(Clone, PartialEq, Debug)]
pub struct Paint {
    /// `fill` attribute. A hex color, a named color or `none`.
    pub color: String,

    /// `fill-opacity` attribute.
    pub opacity: Opacity,
}

impl Paint {
    /// Creates a fully opaque paint.
    pub fn new(color: &str) -> Self {
        Paint {
            color: color.to_string(),
            opacity: Opacity::Full,
        }
    }

    /// Creates the `none` paint.
    pub fn none() -> Self {
        Paint::new("none")
    }
}

/// A fill opacity.
///
/// Unlike a plain number, keeps "not set" and "explicitly zero" apart.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Opacity {
    /// Not set or `1`. Not written.
    Full,

    /// A value in a `0..1` range, exclusive.
    Partial(f64),
}

impl Opacity {
    /// Creates a new opacity clamped to a `0..=1` range.
    ///
    /// Non-finite values are treated as full opacity.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() || value >= 1.0 {
            Opacity::Full
        } else if value <= 0.0 {
            Opacity::Partial(0.0)
        } else {
            Opacity::Partial(value)
        }
    }

    /// Creates an opacity from an alpha channel.
    ///
    /// Scaled linearly and rounded to two decimals, so `0x80` becomes `0.5`.
    pub fn from_alpha(alpha: u8) -> Self {
        let value = (alpha as f64 / 255.0 * 100.0).round() / 100.0;
        Opacity::new(value)
    }

    /// Returns the opacity as a number.
    pub fn get(&self) -> f64 {
        match *self {
            Opacity::Full => 1.0,
            Opacity::Partial(v) => v,
        }
    }

    /// Checks that opacity is `1`.
    #[inline]
    pub fn is_full(&self) -> bool {
        *self == Opacity::Full
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Opacity::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_to_opacity() {
        assert_eq!(Opacity::from_alpha(0xFF), Opacity::Full);
        assert_eq!(Opacity::from_alpha(0x80), Opacity::Partial(0.5));
        assert_eq!(Opacity::from_alpha(0x40), Opacity::Partial(0.25));
        assert_eq!(Opacity::from_alpha(0x01), Opacity::Partial(0.0));
    }

    #[test]
    fn every_alpha_byte() {
        for a in 0..=255u8 {
            let expected = ((a as f64 / 255.0 * 100.0).round() / 100.0).clamp(0.0, 1.0);
            assert_eq!(Opacity::from_alpha(a).get(), expected, "alpha {}", a);
        }
    }

    #[test]
    fn explicit_zero_is_not_full() {
        assert_eq!(Opacity::from_alpha(0x00), Opacity::Partial(0.0));
        assert!(!Opacity::new(0.0).is_full());
    }

    #[test]
    fn clamping() {
        assert_eq!(Opacity::new(1.5), Opacity::Full);
        assert_eq!(Opacity::new(-0.5), Opacity::Partial(0.0));
        assert_eq!(Opacity::new(f64::NAN), Opacity::Full);
    }
}
