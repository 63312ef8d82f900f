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

use crate::entropy::Entropy;
use console::{Style, Term};
use std::fmt::{self, Display, Write as _};
use zeroize::Zeroizing;

pub struct DisplayOptions {
    pub color_support: bool,
    pub brief: bool,
}

impl DisplayOptions {
    pub fn detect(brief: bool) -> Self {
        Self {
            color_support: detect_color_support(),
            brief,
        }
    }
}

/// Where the password's units were drawn from.
pub enum Source<'a> {
    Charset { symbols: &'a str, size: usize },
    Wordlist { name: &'a str, size: usize },
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

/// Renders the metrics report. Labels and widths are stable so that the
/// output can be scraped.
pub fn render_report(
    source: &Source<'_>,
    password: &str,
    groups: usize,
    entropy: &Entropy,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out)?;

    match source {
        Source::Charset { symbols, size } => {
            writeln!(out, "Charset     : {}", symbols)?;
            writeln!(out, "            : {:>10} (char)", size)?;
            writeln!(out, "Entropy     : {:>10.2} (bit/char)", entropy.per_unit)?;
            writeln!(out, "            : {:>10.2} (bit/word)", entropy.per_group)?;
        }
        Source::Wordlist { name, size } => {
            writeln!(out, "Dictionary  : {}", name)?;
            writeln!(out, "Dict Len    : {:>10} (word)", size)?;
            writeln!(out, "Entropy     : {:>10.2} (bit/word)", entropy.per_unit)?;
        }
    }

    writeln!(out, "Pw Len      : {:>10} (word)", groups)?;
    writeln!(out, "            : {:>10} (char)", password.chars().count())?;
    writeln!(out, "Pw Entropy  : {:>10.2} (bit)", entropy.total)?;
    writeln!(out, "Password    : {}", password)?;

    Ok(out)
}

pub fn display_output(
    password: &Zeroizing<String>,
    source: &Source<'_>,
    groups: usize,
    entropy: &Entropy,
    options: &DisplayOptions,
) -> Result<(), fmt::Error> {
    if options.brief {
        println!("{}", &**password);
    } else {
        let report = Zeroizing::new(render_report(source, password, groups, entropy)?);
        println!("{}", &*report);
    }

    Ok(())
}

pub fn display_error(message: &dyn Display, options: &DisplayOptions) {
    let style = if options.color_support {
        Style::new().for_stderr().red()
    } else {
        Style::new().for_stderr()
    };

    let line = format!("ERROR: {}", message);
    let term = Term::stderr();
    if term.write_line(&style.apply_to(&line).to_string()).is_err() {
        eprintln!("{}", line);
    }
}
