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

use anyhow::{Context, Result};
use clap::Parser;
use postit::generator::{self, GroupCount, WORDS_PER_GROUP};
use postit::ui::{self, DisplayOptions, Source};
use postit::{Entropy, Wordlist};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "xkcd-password",
    version,
    author,
    about = "A password generator inspired by XKCD #936 and EFF Diceware wordlist"
)]
struct Cli {
    /// Number of words to generate
    #[arg(value_name = "NUM_WORDS", default_value = "4", allow_negative_numbers = true)]
    num_words: GroupCount,

    /// Diceware or UNIX wordlist to use (default: bundled Diceware list)
    #[arg(short = 'f', long)]
    wordlist: Option<PathBuf>,

    /// Do not output password metric
    #[arg(short, long)]
    brief: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = DisplayOptions::detect(cli.brief);

    let loaded;
    let wordlist = match &cli.wordlist {
        Some(path) => {
            loaded = Wordlist::load(path).context("Failed to load wordlist")?;
            &loaded
        }
        None => Wordlist::bundled(),
    };

    if let Err(err) = wordlist.validate() {
        ui::display_error(&err, &options);
        std::process::exit(1);
    }

    let password = generator::generate_passphrase(wordlist, cli.num_words)?;

    let entropy = Entropy::new(wordlist.len(), WORDS_PER_GROUP, cli.num_words.get());
    let source = Source::Wordlist {
        name: wordlist.source(),
        size: wordlist.len(),
    };

    ui::display_output(&password, &source, cli.num_words.get(), &entropy, &options)?;

    Ok(())
}
