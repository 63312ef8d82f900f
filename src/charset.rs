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

//! Named symbol alphabets for group-based passwords.
//!
//! The `default` alphabet follows the password screen of the NES game
//! Snake's Revenge (1990), reworked to 32 symbols that survive being copied
//! by hand: `!!`, `!`, `'`, `B` and `G` are gone, `*`, `C` and `F` are in.
//! Sixteen of its symbols give 80 bits, i.e. four groups of four on a
//! post-it note.
//!
//! Encoding alphabets are derived from a base alphabet minus a fixed set of
//! characters, see [`Charset::excluded`].

use crate::error::GenerateError;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const SNAKE: &str = "?.*#%0123456789CDFHJKLMNPQRTVWXY";
const SYMLOW: &str = "./-+=0123456789abcdefgikrsuvwxyz";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Charset {
    Default,
    SymLow,
    Lower,
    Upper,
    Digit,
    LowerNum,
    HexDigit,
    Letters,
    LettersNum,
    Base32,
    Base58,
    ZBase32,
    Bech32,
}

static REGISTRY: OnceLock<[String; Charset::ALL.len()]> = OnceLock::new();

impl Charset {
    /// Every registered charset, in discriminant order.
    pub const ALL: [Charset; 13] = [
        Self::Default,
        Self::SymLow,
        Self::Lower,
        Self::Upper,
        Self::Digit,
        Self::LowerNum,
        Self::HexDigit,
        Self::Letters,
        Self::LettersNum,
        Self::Base32,
        Self::Base58,
        Self::ZBase32,
        Self::Bech32,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::SymLow => "symlow",
            Self::Lower => "alpha",
            Self::Upper => "ALPHA",
            Self::Digit => "digit",
            Self::LowerNum => "alphanum",
            Self::HexDigit => "xdigit",
            Self::Letters => "Alpha",
            Self::LettersNum => "AlphaNum",
            Self::Base32 => "base32",
            Self::Base58 => "base58",
            Self::ZBase32 => "zbase32",
            Self::Bech32 => "bech32",
        }
    }

    /// Characters stripped from the base alphabet of an encoding charset.
    ///
    /// - base58: `0 O I l` (Bitcoin Base58)
    /// - zbase32: `0 l v 2` (human-oriented base-32)
    /// - bech32: `0 1 b i`
    pub const fn excluded(self) -> &'static str {
        match self {
            Self::Base58 => "0OIl",
            Self::ZBase32 => "0lv2",
            Self::Bech32 => "01bi",
            _ => "",
        }
    }

    /// The ordered symbols of this charset.
    pub fn symbols(self) -> &'static str {
        &REGISTRY.get_or_init(|| Self::ALL.map(Self::build))[self as usize]
    }

    /// Number of symbols, i.e. the size of the selection space.
    pub fn len(self) -> usize {
        self.symbols().chars().count()
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    fn build(self) -> String {
        let base = match self {
            Self::Default => SNAKE.to_owned(),
            Self::SymLow => SYMLOW.to_owned(),
            Self::Lower => LOWER.to_owned(),
            Self::Upper => UPPER.to_owned(),
            Self::Digit => DIGITS.to_owned(),
            Self::LowerNum | Self::ZBase32 | Self::Bech32 => [LOWER, DIGITS].concat(),
            Self::HexDigit => [DIGITS, "abcdef"].concat(),
            Self::Letters => [UPPER, LOWER].concat(),
            Self::LettersNum | Self::Base58 => [UPPER, LOWER, DIGITS].concat(),
            Self::Base32 => [LOWER, "234567"].concat(),
        };

        let excluded = self.excluded();
        base.chars().filter(|c| !excluded.contains(*c)).collect()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks a charset up by its registered name (case-sensitive).
impl FromStr for Charset {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|charset| charset.name() == s)
            .ok_or_else(|| GenerateError::UnknownCharset(s.to_string()))
    }
}
