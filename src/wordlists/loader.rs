//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Entries that are not words of the configured length are skipped here, so nothing
//! malformed reaches the solver.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of length `word_length` from a file, one per line
///
/// Returns a vector of valid Word instances, skipping blank lines and invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_sampler::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content, word_length);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated text into words of length `word_length`
///
/// # Examples
/// ```
/// use wordle_sampler::wordlists::loader::parse_words;
///
/// let words = parse_words("CRANE\n\n slate \ntoolong\nab3de\n", 5);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
/// ```
#[must_use]
pub fn parse_words(content: &str, word_length: usize) -> Vec<Word> {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::with_length(line, word_length).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        debug!("skipped {skipped} entries that are not {word_length}-letter words");
    }

    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_sampler::wordlists::loader::words_from_slice;
/// use wordle_sampler::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "two words", "ab3", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_words_filters_length() {
        let words = parse_words("crane\ncranes\ncran\nSLATE\n", 5);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);

        let six = parse_words("crane\ncranes\n", 6);
        assert_eq!(six.len(), 1);
        assert_eq!(six[0].text(), "cranes");
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("definitely/not/here.txt", 5).is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join("wordle_sampler_loader_test.txt");
        fs::write(&path, "crane\nslate\n\nnope\n").unwrap();

        let words = load_from_file(&path, 5).unwrap();
        assert_eq!(words.len(), 2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
