// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// List of all fatal errors.
///
/// Problems with a single entry or a single shape are not errors.
/// They are reported as [`Diagnostic`](crate::Diagnostic)s instead.
#[derive(Debug)]
pub enum Error {
    /// Failed to read the input file.
    ReadFailed(PathBuf, std::io::Error),

    /// Failed to parse the input XAML.
    InvalidXaml(xamltree::Error),

    /// The output directory path points to a file.
    OutputIsFile(PathBuf),

    /// Failed to create the output directory.
    CreateDirFailed(PathBuf, std::io::Error),

    /// Failed to write an output file.
    WriteFailed(PathBuf, std::io::Error),
}

impl From<xamltree::Error> for Error {
    fn from(e: xamltree::Error) -> Self {
        Error::InvalidXaml(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::ReadFailed(ref path, ref e) => {
                write!(f, "failed to read '{}' cause {}", path.display(), e)
            }
            Error::InvalidXaml(ref e) => {
                write!(f, "{}", e)
            }
            Error::OutputIsFile(ref path) => {
                write!(f, "output directory '{}' is a file", path.display())
            }
            Error::CreateDirFailed(ref path, ref e) => {
                write!(f, "failed to create '{}' cause {}", path.display(), e)
            }
            Error::WriteFailed(ref path, ref e) => {
                write!(f, "failed to write '{}' cause {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for Error {}
