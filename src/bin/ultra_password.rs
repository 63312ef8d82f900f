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

use anyhow::Result;
use clap::Parser;
use postit::generator::{self, GroupCount, SYMBOLS_PER_GROUP};
use postit::ui::{self, DisplayOptions, Source};
use postit::{Charset, Entropy};

#[derive(Parser)]
#[command(
    name = "ultra-password",
    version,
    author,
    about = "A password generator inspired by NES Snake's Revenge video game"
)]
struct Cli {
    /// Number of words to generate
    #[arg(value_name = "NUM_WORDS", default_value = "4", allow_negative_numbers = true)]
    num_words: GroupCount,

    /// Do not output password metric
    #[arg(short, long)]
    brief: bool,

    /// Charset to use: default, symlow, alpha, ALPHA, digit, alphanum, xdigit,
    /// Alpha, AlphaNum, base32, base58, zbase32, bech32
    #[arg(short, long, default_value = "default", value_parser = str::parse::<Charset>)]
    charset: Charset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = DisplayOptions::detect(cli.brief);

    let password = generator::generate_charset_password(cli.charset, cli.num_words)?;

    let size = cli.charset.len();
    let entropy = Entropy::new(size, SYMBOLS_PER_GROUP, cli.num_words.get());
    let source = Source::Charset {
        symbols: cli.charset.symbols(),
        size,
    };

    ui::display_output(&password, &source, cli.num_words.get(), &entropy, &options)?;

    Ok(())
}
