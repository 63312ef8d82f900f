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

use crate::charset::Charset;
use crate::error::GenerateError;
use crate::wordlist::Wordlist;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::str::FromStr;
use zeroize::Zeroizing;

pub const SYMBOLS_PER_GROUP: usize = 4;
pub const WORDS_PER_GROUP: usize = 1;

const BUFFER_SIZE: usize = 512;

/// Number of groups in a password; always strictly positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupCount(usize);

impl GroupCount {
    pub const DEFAULT: Self = Self(4);

    pub fn new(count: usize) -> Result<Self, GenerateError> {
        if count == 0 {
            return Err(GenerateError::InvalidCount(count.to_string()));
        }
        Ok(Self(count))
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for GroupCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for GroupCount {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GenerateError::InvalidCount(s.to_string());

        let value: i128 = s.trim().parse().map_err(|_| invalid())?;
        if value <= 0 {
            return Err(invalid());
        }

        usize::try_from(value).map(Self).map_err(|_| invalid())
    }
}

/// Uniform index source over an OS-grade CSPRNG.
///
/// Raw 32-bit draws are pulled from a zeroized buffer; draws at or above the
/// largest multiple of the selection size are rejected so that every index
/// is equally likely.
pub struct Sampler<R> {
    rng: R,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl Sampler<OsRng> {
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl<R: RngCore + CryptoRng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            buffer: Zeroizing::new(vec![0u8; BUFFER_SIZE]),
            pos: BUFFER_SIZE,
        }
    }

    fn next_u32(&mut self) -> u32 {
        if self.pos + 4 > self.buffer.len() {
            self.rng.fill_bytes(&mut self.buffer);
            self.pos = 0;
        }

        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.buffer[self.pos..self.pos + 4]);
        self.pos += 4;

        u32::from_le_bytes(bytes)
    }

    /// Draws an index uniformly distributed over `0..len`.
    pub fn index(&mut self, len: usize) -> Result<usize, GenerateError> {
        if len == 0 {
            return Err(GenerateError::EmptySelection);
        }

        let len = u32::try_from(len).map_err(|_| GenerateError::SelectionTooLarge(len))?;
        let range = u64::from(u32::MAX) + 1;
        let rejection_threshold = range - (range % u64::from(len));

        loop {
            let random_u32 = u64::from(self.next_u32());
            if random_u32 < rejection_threshold {
                return Ok((random_u32 % u64::from(len)) as usize);
            }
        }
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, GenerateError> {
        let index = self.index(items.len())?;
        Ok(&items[index])
    }
}

/// Draws one group of [`SYMBOLS_PER_GROUP`] independent symbols.
pub fn generate_group<R: RngCore + CryptoRng>(
    sampler: &mut Sampler<R>,
    symbols: &[char],
) -> Result<Zeroizing<String>, GenerateError> {
    let mut group = Zeroizing::new(String::with_capacity(SYMBOLS_PER_GROUP));
    for _ in 0..SYMBOLS_PER_GROUP {
        group.push(*sampler.choose(symbols)?);
    }
    Ok(group)
}

/// Joins `count` groups from `next_group` with single spaces, in draw order.
pub fn assemble<F, G>(
    count: GroupCount,
    mut next_group: F,
) -> Result<Zeroizing<String>, GenerateError>
where
    F: FnMut() -> Result<G, GenerateError>,
    G: AsRef<str>,
{
    let mut password = Zeroizing::new(String::new());

    for i in 0..count.get() {
        if i > 0 {
            password.push(' ');
        }
        password.push_str(next_group()?.as_ref());
    }

    Ok(password)
}

pub fn generate_charset_password(
    charset: Charset,
    count: GroupCount,
) -> Result<Zeroizing<String>, GenerateError> {
    let symbols: Vec<char> = charset.symbols().chars().collect();
    let mut sampler = Sampler::os();

    assemble(count, || generate_group(&mut sampler, &symbols))
}

pub fn generate_passphrase(
    wordlist: &Wordlist,
    count: GroupCount,
) -> Result<Zeroizing<String>, GenerateError> {
    let words = wordlist.words();
    let mut sampler = Sampler::os();

    assemble(count, || sampler.choose(words).map(String::as_str))
}
