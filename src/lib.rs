// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`xaml2svg` converts WPF `DrawingImage` icons into standalone SVG files.

The input is a XAML `ResourceDictionary` where every `DrawingImage` has an `x:Key`
that ends with the icon size, like `Close16` or `Save24`.
Each such entry becomes a `<key>.svg` file with a `0 0 size size` viewBox.

Only a small subset of WPF drawings is supported:
groups with translate/rotate transforms, path, ellipse and rectangle geometries,
solid fills. Anything else is reported as a [`Diagnostic`] and either skipped
or replaced with a fallback. A single broken icon never stops the conversion.

Parsing is done by the [`xamltree`] crate.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::derivable_impls)]

use std::path::{Path as FsPath, PathBuf};

mod convert;
mod error;
mod options;
mod tree;
mod writer;

pub use crate::convert::convert_entry;
pub use crate::error::Error;
pub use crate::options::Options;
pub use crate::tree::*;
pub use crate::writer::{Indent, WriteOptions};

pub use xamltree;
pub use xamltree::{Diagnostic, DiagnosticKind, DiagnosticSink, Dictionary, LogSink, ResourceEntry};

/// Converts a XAML string into a list of SVG documents.
///
/// Documents are returned in the dictionary order.
pub fn convert_str(
    text: &str,
    opt: &Options,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<Document>, Error> {
    let dict = Dictionary::from_str(text, &opt.xaml, sink)?;
    let docs = dict
        .entries
        .iter()
        .map(|entry| convert_entry(entry, opt, sink))
        .collect();
    Ok(docs)
}

/// Writes a document to `<dir>/<id>.svg`.
///
/// An existing file is overwritten.
/// Returns the path to the written file.
pub fn save(doc: &Document, dir: &FsPath, opt: &WriteOptions) -> Result<PathBuf, Error> {
    // The id is appended, not set as an extension, so `Icon.Dark16` stays intact.
    let path = dir.join(format!("{}.svg", doc.id));
    std::fs::write(&path, doc.to_string(opt)).map_err(|e| Error::WriteFailed(path.clone(), e))?;
    log::info!("Saved '{}'.", path.display());
    Ok(path)
}

/// Converts a XAML file into SVG files inside `out_dir`.
///
/// The output directory is created when missing.
/// A file that cannot be written is reported to `sink` and skipped.
/// Returns paths to all written files.
pub fn convert_file(
    input: &FsPath,
    out_dir: &FsPath,
    opt: &Options,
    wopt: &WriteOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<PathBuf>, Error> {
    let data = std::fs::read(input).map_err(|e| Error::ReadFailed(input.to_path_buf(), e))?;
    let dict = Dictionary::from_data(&data, &opt.xaml, sink)?;

    if out_dir.is_file() {
        return Err(Error::OutputIsFile(out_dir.to_path_buf()));
    }

    std::fs::create_dir_all(out_dir)
        .map_err(|e| Error::CreateDirFailed(out_dir.to_path_buf(), e))?;

    let mut paths = Vec::with_capacity(dict.entries.len());
    for entry in &dict.entries {
        let doc = convert_entry(entry, opt, sink);
        match save(&doc, out_dir, wopt) {
            Ok(path) => paths.push(path),
            Err(Error::WriteFailed(path, e)) => {
                let kind = DiagnosticKind::WriteFailed {
                    path,
                    reason: e.to_string(),
                };
                sink.report(Diagnostic::new(Some(&doc.id), kind));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(paths)
}
