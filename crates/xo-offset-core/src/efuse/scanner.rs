//! Efuse dump scanning
//!
//! The programmer tool prints one line per efuse bank, containing the bank
//! words as `0x`-prefixed hex tokens. When two words are printed without a
//! separator the second `0x` sticks to the end of the first token, so the
//! word pattern tolerates a trailing `0x` marker before the whitespace.

use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::Bank;
use crate::error::Result;

/// Marker identifying bank lines in the programmer output
pub const EFUSE_MARKER: &str = "efuse bank";

/// Hex word token: digit group, optional glued `0x`, then whitespace
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"0x([0-9a-fA-F]+)(?:0x)?\s").expect("word pattern is a valid regex")
});

/// Number of hex digits in a 32-bit word
const WORD_DIGITS: usize = 8;

/// Iterator over the efuse bank lines of a dump.
///
/// Lines are yielded with their terminator so that a token at the end of a
/// line still ends in whitespace. Invalid UTF-8 is replaced, not rejected.
pub struct EfuseLines<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> Iterator for EfuseLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    let line = String::from_utf8_lossy(&self.buf);
                    if line.contains(EFUSE_MARKER) {
                        return Some(Ok(line.into_owned()));
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Select the efuse bank lines from a reader
pub fn efuse_lines<R: BufRead>(reader: R) -> EfuseLines<R> {
    EfuseLines {
        reader,
        buf: Vec::new(),
        done: false,
    }
}

/// Extract the hex words of one line, left to right.
///
/// Digit groups longer than a word keep their low 32 bits.
pub fn parse_bank_words(line: &str) -> Bank {
    WORD_PATTERN
        .captures_iter(line)
        .filter_map(|caps| {
            let digits = caps.get(1)?.as_str();
            let low = &digits[digits.len().saturating_sub(WORD_DIGITS)..];
            u32::from_str_radix(low, 16).ok()
        })
        .collect::<Vec<_>>()
        .into()
}

/// Read the whole dump and collect one bank per efuse bank line
pub fn collect_banks<R: BufRead>(reader: R) -> Result<Vec<Bank>> {
    let mut banks = Vec::new();

    for line in efuse_lines(reader) {
        let bank = parse_bank_words(&line?);
        debug!("BANK {}: {}", banks.len(), bank);
        banks.push(bank);
    }

    debug!("Collected {} efuse banks", banks.len());
    Ok(banks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::{self, BufReader, Cursor, Read};

    fn words(line: &str) -> Vec<u32> {
        parse_bank_words(line).words().to_vec()
    }

    #[test]
    fn test_parse_bank_words_basic() {
        assert_eq!(
            words("efuse bank: 0x80000000 0x00000000 0x80120000 0x00000000\n"),
            vec![0x8000_0000, 0, 0x8012_0000, 0]
        );
    }

    #[test]
    fn test_parse_bank_words_mixed_case() {
        assert_eq!(words("efuse bank 0: 0xABCDef01 0xff\n"), vec![0xABCD_EF01, 0xFF]);
    }

    #[test]
    fn test_parse_bank_words_needs_trailing_whitespace() {
        assert_eq!(words("efuse bank: 0x1 0x2"), vec![0x1]);
        assert_eq!(words("efuse bank: 0x1 0x2\r\n"), vec![0x1, 0x2]);
    }

    #[test]
    fn test_parse_bank_words_glued_marker_dropped() {
        assert_eq!(words("efuse bank: 0x1234abcd0x 0x5 \n"), vec![0x1234_ABCD, 0x5]);
    }

    #[test]
    fn test_parse_bank_words_glued_pair() {
        // "0x10x2" cannot end in whitespace at any split, so the scan resumes at "0x2"
        assert_eq!(words("efuse bank: 0x10x2 0xabcd "), vec![0x2, 0xABCD]);
    }

    #[test]
    fn test_parse_bank_words_no_tokens() {
        assert!(parse_bank_words("efuse bank: not programmed\n").is_empty());
        assert!(parse_bank_words("efuse bank: 0x \n").is_empty());
    }

    #[test]
    fn test_parse_bank_words_long_digit_group_keeps_low_word() {
        assert_eq!(words("efuse bank: 0x000080120000 \n"), vec![0x8012_0000]);
        assert_eq!(words("efuse bank: 0x1180000000 \n"), vec![0x8000_0000]);
    }

    #[test]
    fn test_efuse_lines_filters_marker() {
        let input = "winc_programmer v1.0\n\
                     efuse bank 0: 0x1 \n\
                     EFUSE BANK 1: 0x2 \n\
                     read efuse bank done\n";
        let lines: Vec<String> = efuse_lines(Cursor::new(input))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["efuse bank 0: 0x1 \n", "read efuse bank done\n"]);
    }

    #[test]
    fn test_efuse_lines_empty_input() {
        assert_eq!(efuse_lines(Cursor::new("")).count(), 0);
    }

    #[test]
    fn test_efuse_lines_invalid_utf8() {
        let input: &[u8] = b"\xffefuse bank: 0x80000000 \n";
        let lines: Vec<String> = efuse_lines(input).collect::<Result<_>>().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(parse_bank_words(&lines[0]).words(), &[0x8000_0000]);
    }

    #[test]
    fn test_collect_banks_preserves_order() {
        let input = "efuse bank 0: 0xc0000000 0x0 0x80010000 \n\
                     other line 0x1 \n\
                     efuse bank 1: \n\
                     efuse bank 2: 0x80000000 0x0 0x80120000 \n";
        let banks = collect_banks(Cursor::new(input)).unwrap();
        assert_eq!(banks.len(), 3);
        assert_eq!(banks[0].word(2), Some(0x8001_0000));
        assert!(banks[1].is_empty());
        assert_eq!(banks[2].word(2), Some(0x8012_0000));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stream corrupted"))
        }
    }

    #[test]
    fn test_collect_banks_io_error() {
        let err = collect_banks(BufReader::new(FailingReader)).unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
        }
    }
}
