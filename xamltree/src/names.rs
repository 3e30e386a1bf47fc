// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Element names from the WPF presentation namespace.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) enum EId {
    DrawingGroup,
    DrawingGroupTransform,
    DrawingImage,
    DrawingImageDrawing,
    EllipseGeometry,
    GeometryDrawing,
    GeometryDrawingBrush,
    GeometryDrawingGeometry,
    GeometryGroup,
    RectangleGeometry,
    RotateTransform,
    SolidColorBrush,
    TransformGroup,
    TranslateTransform,
}

impl EId {
    /// Parses an element name.
    pub(crate) fn from_str(text: &str) -> Option<EId> {
        match text {
            "DrawingGroup"              => Some(EId::DrawingGroup),
            "DrawingGroup.Transform"    => Some(EId::DrawingGroupTransform),
            "DrawingImage"              => Some(EId::DrawingImage),
            "DrawingImage.Drawing"      => Some(EId::DrawingImageDrawing),
            "EllipseGeometry"           => Some(EId::EllipseGeometry),
            "GeometryDrawing"           => Some(EId::GeometryDrawing),
            "GeometryDrawing.Brush"     => Some(EId::GeometryDrawingBrush),
            "GeometryDrawing.Geometry"  => Some(EId::GeometryDrawingGeometry),
            "GeometryGroup"             => Some(EId::GeometryGroup),
            "RectangleGeometry"         => Some(EId::RectangleGeometry),
            "RotateTransform"           => Some(EId::RotateTransform),
            "SolidColorBrush"           => Some(EId::SolidColorBrush),
            "TransformGroup"            => Some(EId::TransformGroup),
            "TranslateTransform"        => Some(EId::TranslateTransform),
            _ => None,
        }
    }
}

/// Attribute names used by the supported elements.
///
/// All of them are unqualified, except `x:Key` which is handled separately.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) enum AId {
    Angle,
    Brush,
    Center,
    CenterX,
    CenterY,
    Color,
    Geometry,
    Opacity,
    RadiusX,
    RadiusY,
    Rect,
    X,
    Y,
}

impl AId {
    /// Returns the original attribute name.
    pub(crate) fn to_str(&self) -> &'static str {
        match self {
            AId::Angle      => "Angle",
            AId::Brush      => "Brush",
            AId::Center     => "Center",
            AId::CenterX    => "CenterX",
            AId::CenterY    => "CenterY",
            AId::Color      => "Color",
            AId::Geometry   => "Geometry",
            AId::Opacity    => "Opacity",
            AId::RadiusX    => "RadiusX",
            AId::RadiusY    => "RadiusY",
            AId::Rect       => "Rect",
            AId::X          => "X",
            AId::Y          => "Y",
        }
    }
}
