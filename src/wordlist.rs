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

use crate::error::WordlistError;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

const WORDLIST_DATA: &str = include_str!("../assets/eff_large_wordlist.txt");

/// Name shown in reports when no wordlist file was given: the EFF large
/// list, compiled in.
pub const BUNDLED_NAME: &str = "dict/eff_large_wordlist.txt";

/// Number of words in the EFF large wordlist.
pub const EFF_WORDLIST_SIZE: usize = 7776;

#[cfg(test)]
const EXPECTED_SHA256: &str = "addd35536511597a02fa0a9ff1e5284677b8883b83e986e43f15a3db996b903e";

static BUNDLED: OnceLock<Wordlist> = OnceLock::new();

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wordlist {
    source: String,
    words: Vec<String>,
}

impl Wordlist {
    /// Parses wordlist text, one entry per line.
    ///
    /// A line is either a bare `WORD` (UNIX words) or `ROLL WORD` (Diceware),
    /// separated by any whitespace. The roll token is not checked. Blank lines
    /// are skipped and entries are NFC-normalized. Duplicates are kept; see
    /// [`Wordlist::validate`].
    pub fn parse(source: impl Into<String>, text: &str) -> Self {
        let words = text
            .lines()
            .filter_map(parse_line)
            .map(|word| word.nfc().collect::<String>())
            .collect();

        Self {
            source: source.into(),
            words,
        }
    }

    pub fn load(path: &Path) -> Result<Self, WordlistError> {
        let text = fs::read_to_string(path).map_err(|source| WordlistError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(path.display().to_string(), &text))
    }

    /// The wordlist compiled into the binary, parsed on first use.
    pub fn bundled() -> &'static Wordlist {
        BUNDLED.get_or_init(|| Self::parse(BUNDLED_NAME, WORDLIST_DATA))
    }

    /// Where the words came from: a path, or [`BUNDLED_NAME`].
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words occurring more than once, in order of first occurrence.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for word in &self.words {
            *counts.entry(word.as_str()).or_default() += 1;
        }

        let mut reported = HashSet::new();
        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| counts[word] > 1 && reported.insert(*word))
            .collect()
    }

    /// Fails if any word repeats; a repeated word would be drawn more often
    /// than the reported entropy assumes.
    pub fn validate(&self) -> Result<(), WordlistError> {
        let duplicates = self.duplicates();
        if duplicates.is_empty() {
            return Ok(());
        }

        Err(WordlistError::Duplicates(
            duplicates.into_iter().map(str::to_string).collect(),
        ))
    }
}

/// Extracts the word from one line, or `None` for a blank line.
pub fn parse_line(line: &str) -> Option<&str> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => None,
        [_, word] => Some(*word),
        [word, ..] => Some(*word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    #[test]
    fn test_parse_diceware_format() {
        let wordlist = Wordlist::parse("test", "1 apple\n2 banana\n3 cherry\n");
        assert_eq!(wordlist.words(), ["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_parse_unix_format() {
        let wordlist = Wordlist::parse("test", "apple\nbanana\ncherry");
        assert_eq!(wordlist.words(), ["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_parse_mixed_formats_and_whitespace() {
        let text = "11111\tabacus\n  abdomen  \r\n\n11113   abide\t\n";
        let wordlist = Wordlist::parse("test", text);
        assert_eq!(wordlist.words(), ["abacus", "abdomen", "abide"]);
    }

    #[test]
    fn test_parse_line_shapes() {
        assert_eq!(parse_line("word"), Some("word"));
        assert_eq!(parse_line("6666 zone"), Some("zone"));
        assert_eq!(parse_line("x y z"), Some("x"));
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_roll_token_not_validated() {
        let wordlist = Wordlist::parse("test", "abc apple\n-- banana\n");
        assert_eq!(wordlist.words(), ["apple", "banana"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let wordlist = Wordlist::parse("test", "apple\napple\n");
        assert_eq!(wordlist.words(), ["apple", "apple"]);
        assert_eq!(wordlist.len(), 2);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let wordlist = Wordlist::parse("test", "apple\napple\n");
        let err = wordlist.validate().unwrap_err();

        assert!(matches!(err, WordlistError::Duplicates(ref words) if words == &["apple"]));
        assert_eq!(err.to_string(), "duped word detected: apple");
    }

    #[test]
    fn test_duplicates_reports_all_in_first_occurrence_order() {
        let text = "1 pear\n2 fig\n3 plum\n4 fig\n5 pear\n6 fig\n7 kiwi\n";
        let wordlist = Wordlist::parse("test", text);

        assert_eq!(wordlist.duplicates(), ["pear", "fig"]);
        assert_eq!(
            wordlist.validate().unwrap_err().to_string(),
            "duped word detected: pear, fig"
        );
    }

    #[test]
    fn test_duplicates_across_formats() {
        let wordlist = Wordlist::parse("test", "11111 apple\napple\n");
        assert_eq!(wordlist.duplicates(), ["apple"]);
    }

    #[test]
    fn test_duplicates_across_normal_forms() {
        let wordlist = Wordlist::parse("test", "café\ncafe\u{0301}\n");
        assert_eq!(wordlist.len(), 2);
        assert_eq!(wordlist.duplicates(), ["café"]);
    }

    #[test]
    fn test_validate_accepts_distinct_words() {
        let wordlist = Wordlist::parse("test", "apple\nApple\napples\n");
        assert!(wordlist.validate().is_ok());
    }

    #[test]
    fn test_bundled_wordlist_loaded() {
        let wordlist = Wordlist::bundled();
        assert_eq!(wordlist.len(), EFF_WORDLIST_SIZE);
        assert_eq!(wordlist.source(), BUNDLED_NAME);
    }

    #[test]
    fn test_bundled_wordlist_no_duplicates() {
        assert!(Wordlist::bundled().validate().is_ok());
    }

    #[test]
    fn test_bundled_wordlist_integrity() {
        let words = Wordlist::bundled().words();

        assert_eq!(words[0], "abacus", "First word should be \"abacus\"");
        assert_eq!(words[7775], "zoom", "Last word should be \"zoom\"");
        assert_eq!(words[3695], "life", "Word at line 3696 should be \"life\"");
        assert_eq!(
            words[469], "balance",
            "Word at line 470 should be \"balance\""
        );

        for (i, word) in words.iter().enumerate() {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "Word at index {} (\"{}\") contains invalid characters",
                i,
                word
            );
            assert!(
                word.len() >= 3 && word.len() <= 9,
                "Word at index {} (\"{}\") has invalid length {}",
                i,
                word,
                word.len()
            );
        }
    }

    #[test]
    fn test_bundled_wordlist_sha256() {
        let mut hasher = Sha256::new();
        hasher.update(WORDLIST_DATA.as_bytes());
        let result = format!("{:x}", hasher.finalize());

        assert_eq!(
            result, EXPECTED_SHA256,
            "Wordlist SHA-256 mismatch; file may be corrupted"
        );
    }

    #[test]
    fn test_bundled_wordlist_format() {
        let lines: Vec<&str> = WORDLIST_DATA.lines().collect();
        assert_eq!(lines.len(), EFF_WORDLIST_SIZE, "Wordlist should have 7776 lines");

        for (i, line) in lines.iter().enumerate() {
            let (roll, _) = line
                .split_once('\t')
                .unwrap_or_else(|| panic!("Line {} does not contain separator", i + 1));
            assert!(
                roll.len() == 5 && roll.chars().all(|c| ('1'..='6').contains(&c)),
                "Line {} has invalid roll \"{}\"",
                i + 1,
                roll
            );
        }
    }
}
