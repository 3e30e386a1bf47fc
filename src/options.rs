// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Conversion options.
#[derive(Clone, Debug)]
pub struct Options {
    /// `xamltree` parsing options.
    pub xaml: xamltree::Options,

    /// A color used instead of gradients and unknown brushes.
    ///
    /// Written as is, so any SVG color is allowed.
    ///
    /// Default: red
    pub fallback_color: String,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            xaml: xamltree::Options::default(),
            fallback_color: "red".to_string(),
        }
    }
}
