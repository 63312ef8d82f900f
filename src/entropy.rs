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

/// Shannon entropy of a password built from independent uniform draws.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entropy {
    /// Bits per symbol or word.
    pub per_unit: f64,
    pub per_group: f64,
    pub total: f64,
}

impl Entropy {
    pub fn new(space: usize, units_per_group: usize, groups: usize) -> Self {
        let per_unit = bits_per_unit(space);
        let per_group = per_unit * units_per_group as f64;

        Self {
            per_unit,
            per_group,
            total: per_group * groups as f64,
        }
    }
}

/// `log2` of the selection space size.
pub fn bits_per_unit(space: usize) -> f64 {
    (space as f64).log2()
}
