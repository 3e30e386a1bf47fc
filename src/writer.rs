// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::Display;

use xmlwriter::XmlWriter;

use crate::{Document, Group, Node, Paint};

pub use xmlwriter::Indent;

impl Document {
    /// Writes a document to SVG.
    pub fn to_string(&self, opt: &WriteOptions) -> String {
        convert(self, opt)
    }
}

/// XML writing options.
#[derive(Clone, Debug)]
pub struct WriteOptions {
    /// Use single quote marks instead of double quote.
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Set XML nodes indention.
    ///
    /// # Examples
    ///
    /// `Indent::None`
    /// Before:
    ///
    /// ```text
    /// <svg>
    ///   <path fill="red"/>
    /// </svg>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <svg><path fill="red"/></svg>
    /// ```
    ///
    /// Default: 2 spaces
    pub indent: Indent,

    /// Set XML attributes indention.
    ///
    /// Default: `None`
    pub attributes_indent: Indent,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            use_single_quote: false,
            indent: Indent::Spaces(2),
            attributes_indent: Indent::None,
        }
    }
}

#[derive(Clone, Copy)]
enum EId {
    Ellipse,
    G,
    Path,
    Rect,
    Svg,
}

impl EId {
    fn to_str(self) -> &'static str {
        match self {
            EId::Ellipse => "ellipse",
            EId::G => "g",
            EId::Path => "path",
            EId::Rect => "rect",
            EId::Svg => "svg",
        }
    }
}

#[derive(Clone, Copy)]
enum AId {
    Cx,
    Cy,
    D,
    Fill,
    FillOpacity,
    Height,
    Id,
    Rx,
    Ry,
    Transform,
    ViewBox,
    Width,
    X,
    Y,
}

impl AId {
    fn to_str(self) -> &'static str {
        match self {
            AId::Cx => "cx",
            AId::Cy => "cy",
            AId::D => "d",
            AId::Fill => "fill",
            AId::FillOpacity => "fill-opacity",
            AId::Height => "height",
            AId::Id => "id",
            AId::Rx => "rx",
            AId::Ry => "ry",
            AId::Transform => "transform",
            AId::ViewBox => "viewBox",
            AId::Width => "width",
            AId::X => "x",
            AId::Y => "y",
        }
    }
}

fn convert(doc: &Document, opt: &WriteOptions) -> String {
    let mut xml = XmlWriter::new(xmlwriter::Options {
        use_single_quote: opt.use_single_quote,
        indent: opt.indent,
        attributes_indent: opt.attributes_indent,
    });

    xml.start_svg_element(EId::Svg);
    xml.write_attribute_fmt(
        AId::ViewBox.to_str(),
        format_args!("0 0 {} {}", doc.size, doc.size),
    );
    xml.write_attribute("xmlns", "http://www.w3.org/2000/svg");
    xml.write_svg_attribute(AId::Id, &doc.id);

    write_elements(&doc.root, &mut xml);

    xml.end_document()
}

fn write_elements(parent: &Group, xml: &mut XmlWriter) {
    for node in &parent.children {
        write_element(node, xml);
    }
}

fn write_element(node: &Node, xml: &mut XmlWriter) {
    match node {
        Node::Group(ref g) => {
            xml.start_svg_element(EId::G);
            if let Some(ref ts) = g.transform {
                xml.write_svg_attribute(AId::Transform, ts);
            }
            write_elements(g, xml);
            xml.end_element();
        }
        Node::Path(ref path) => {
            xml.start_svg_element(EId::Path);
            xml.write_svg_attribute(AId::D, &path.data);
            xml.write_paint(&path.paint);
            xml.end_element();
        }
        Node::Ellipse(ref ellipse) => {
            xml.start_svg_element(EId::Ellipse);
            xml.write_svg_attribute(AId::Cx, &ellipse.cx);
            xml.write_svg_attribute(AId::Cy, &ellipse.cy);
            xml.write_svg_attribute(AId::Rx, &ellipse.rx);
            xml.write_svg_attribute(AId::Ry, &ellipse.ry);
            xml.write_paint(&ellipse.paint);
            xml.end_element();
        }
        Node::Rect(ref rect) => {
            xml.start_svg_element(EId::Rect);
            if let Some(ref x) = rect.x {
                xml.write_svg_attribute(AId::X, x);
            }
            if let Some(ref y) = rect.y {
                xml.write_svg_attribute(AId::Y, y);
            }
            xml.write_svg_attribute(AId::Width, &rect.width);
            xml.write_svg_attribute(AId::Height, &rect.height);
            xml.write_paint(&rect.paint);
            xml.end_element();
        }
    }
}

trait XmlWriterExt {
    fn start_svg_element(&mut self, id: EId);
    fn write_svg_attribute<V: Display + ?Sized>(&mut self, id: AId, value: &V);
    fn write_paint(&mut self, paint: &Paint);
}

impl XmlWriterExt for XmlWriter {
    #[inline(never)]
    fn start_svg_element(&mut self, id: EId) {
        self.start_element(id.to_str());
    }

    #[inline(never)]
    fn write_svg_attribute<V: Display + ?Sized>(&mut self, id: AId, value: &V) {
        self.write_attribute(id.to_str(), value)
    }

    fn write_paint(&mut self, paint: &Paint) {
        self.write_svg_attribute(AId::Fill, &paint.color);
        if !paint.opacity.is_full() {
            self.write_svg_attribute(AId::FillOpacity, &paint.opacity.get());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ellipse, Opacity, Path, Rect};
    use pretty_assertions::assert_eq;

    fn doc(children: Vec<Node>) -> Document {
        Document {
            id: "Test16".to_string(),
            size: 16,
            root: Group {
                transform: None,
                children,
            },
        }
    }

    fn compact() -> WriteOptions {
        WriteOptions {
            indent: Indent::None,
            ..WriteOptions::default()
        }
    }

    #[test]
    fn empty_document() {
        assert_eq!(
            doc(Vec::new()).to_string(&compact()),
            "<svg viewBox=\"0 0 16 16\" xmlns=\"http://www.w3.org/2000/svg\" id=\"Test16\"/>"
        );
    }

    #[test]
    fn fill_opacity() {
        let path = Node::Path(Path {
            data: "M0,0".to_string(),
            paint: Paint {
                color: "#112233".to_string(),
                opacity: Opacity::Partial(0.5),
            },
        });
        let zero = Node::Path(Path {
            data: "M1,1".to_string(),
            paint: Paint {
                color: "#112233".to_string(),
                opacity: Opacity::Partial(0.0),
            },
        });

        assert_eq!(
            doc(vec![path, zero]).to_string(&compact()),
            "<svg viewBox=\"0 0 16 16\" xmlns=\"http://www.w3.org/2000/svg\" id=\"Test16\">\
             <path d=\"M0,0\" fill=\"#112233\" fill-opacity=\"0.5\"/>\
             <path d=\"M1,1\" fill=\"#112233\" fill-opacity=\"0\"/>\
             </svg>"
        );
    }

    #[test]
    fn shapes() {
        let ellipse = Node::Ellipse(Ellipse {
            cx: "8".to_string(),
            cy: "8".to_string(),
            rx: "4".to_string(),
            ry: "2".to_string(),
            paint: Paint::new("red"),
        });
        let rect = Node::Rect(Rect {
            x: Some("5".to_string()),
            y: None,
            width: "10".to_string(),
            height: "20".to_string(),
            paint: Paint::none(),
        });
        let group = Node::Group(Group {
            transform: Some("rotate(45)".to_string()),
            children: vec![ellipse, rect],
        });

        assert_eq!(
            doc(vec![group]).to_string(&WriteOptions::default()).trim_end(),
            "<svg viewBox=\"0 0 16 16\" xmlns=\"http://www.w3.org/2000/svg\" id=\"Test16\">
  <g transform=\"rotate(45)\">
    <ellipse cx=\"8\" cy=\"8\" rx=\"4\" ry=\"2\" fill=\"red\"/>
    <rect x=\"5\" width=\"10\" height=\"20\" fill=\"none\"/>
  </g>
</svg>"
        );
    }

    #[test]
    fn single_quote() {
        let opt = WriteOptions {
            use_single_quote: true,
            ..compact()
        };
        assert_eq!(
            doc(Vec::new()).to_string(&opt),
            "<svg viewBox='0 0 16 16' xmlns='http://www.w3.org/2000/svg' id='Test16'/>"
        );
    }
}
