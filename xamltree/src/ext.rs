// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use roxmltree::Node;

use crate::{AId, EId, PRESENTATION_NS};

pub(crate) trait XamlNodeExt<'a, 'input: 'a>: Sized {
    /// Returns a known element name. Elements from other namespaces are ignored.
    fn tag_id(&self) -> Option<EId>;

    /// Returns an element name without a namespace, for diagnostics.
    fn kind_name(&self) -> String;

    /// Checks that an element is a `Type.Property` element.
    fn is_property_element(&self) -> bool;

    fn attr(&self, aid: AId) -> Option<&'a str>;

    /// Returns the first child element with the specified name.
    fn child_by_tag(&self, eid: EId) -> Option<Self>;

    fn first_element(&self) -> Option<Self>;

    /// Returns object children.
    ///
    /// Property elements are skipped, except `*.Children`, which content is inlined.
    fn content_children(&self) -> Vec<Self>;
}

impl<'a, 'input: 'a> XamlNodeExt<'a, 'input> for Node<'a, 'input> {
    fn tag_id(&self) -> Option<EId> {
        if !self.is_element() {
            return None;
        }

        if self.tag_name().namespace() != Some(PRESENTATION_NS) {
            return None;
        }

        EId::from_str(self.tag_name().name())
    }

    fn kind_name(&self) -> String {
        self.tag_name().name().to_string()
    }

    fn is_property_element(&self) -> bool {
        self.is_element() && self.tag_name().name().contains('.')
    }

    #[inline]
    fn attr(&self, aid: AId) -> Option<&'a str> {
        self.attribute(aid.to_str())
    }

    fn child_by_tag(&self, eid: EId) -> Option<Self> {
        self.children().find(|n| n.tag_id() == Some(eid))
    }

    fn first_element(&self) -> Option<Self> {
        self.children().find(|n| n.is_element())
    }

    fn content_children(&self) -> Vec<Self> {
        let mut list = Vec::new();
        for child in self.children().filter(|n| n.is_element()) {
            if child.is_property_element() {
                if child.tag_name().name().ends_with(".Children") {
                    list.extend(child.children().filter(|n| n.is_element()));
                }
            } else {
                list.push(child);
            }
        }

        list
    }
}
