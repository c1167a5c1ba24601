//! # xo-offset-core
//!
//! Core library for extracting the crystal oscillator (XO) trim offset from
//! the efuse dump printed by the WINC1500/WINC3400 programmer tool.
//!
//! This crate provides:
//! - Line scanning and hex word extraction for "efuse bank" lines
//! - Active bank selection from the bank status bits
//! - XO offset decoding and result formatting
//!
//! Nothing here writes to stdout; printing is left to the caller.

pub mod efuse;
pub mod error;
pub mod extraction;
pub mod prelude;

pub use efuse::{
    Bank, EfuseLines, XoOffset, collect_banks, efuse_lines, find_active_bank, parse_bank_words,
};
pub use error::{Error, Result};
pub use extraction::{Extraction, extract, extract_from_banks};
