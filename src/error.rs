// This file is part of Postit.
//
// Copyright (c) 2025  René Coignard <contact@renecoignard.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Group counts must be strictly positive integers.
    #[error("invalid strict positive int value: '{0}'")]
    InvalidCount(String),

    #[error("unknown charset: '{0}'")]
    UnknownCharset(String),

    /// Nothing to draw from: empty charset or wordlist.
    #[error("cannot draw from an empty selection space")]
    EmptySelection,

    #[error("selection space too large ({0} entries)")]
    SelectionTooLarge(usize),
}

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("failed to read wordlist {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every word that occurs more than once, in first-occurrence order.
    #[error("duped word detected: {}", .0.join(", "))]
    Duplicates(Vec<String>),
}
