//! XO offset extraction pipeline
//!
//! Collects the banks of a dump, selects the active one and decodes its
//! offset. The result renders as the single line the CLI prints.

use std::fmt;
use std::io::BufRead;

use tracing::{debug, warn};

use crate::efuse::{Bank, XoOffset, collect_banks, find_active_bank};
use crate::error::Result;

/// Outcome of one extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// No efuse bank lines in the input
    NoBanks,
    /// Banks were found but none is programmed and current
    NoActiveBank,
    /// The active bank is too short to hold the offset word
    TruncatedBank,
    /// Offset decoded from the active bank (zero if not marked valid)
    Offset(XoOffset),
}

impl Extraction {
    /// The decoded offset, or zero for every fallback outcome
    pub fn offset(&self) -> XoOffset {
        match self {
            Extraction::Offset(offset) => *offset,
            _ => XoOffset::default(),
        }
    }
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extraction::Offset(offset) => write!(f, "{}", offset),
            Extraction::NoBanks | Extraction::NoActiveBank | Extraction::TruncatedBank => {
                f.write_str("0x0")
            }
        }
    }
}

/// Select the active bank and decode its offset
pub fn extract_from_banks(banks: &[Bank]) -> Extraction {
    if banks.is_empty() {
        debug!("No efuse banks in input");
        return Extraction::NoBanks;
    }

    let Some(active) = find_active_bank(banks) else {
        warn!("None of {} efuse banks is active", banks.len());
        return Extraction::NoActiveBank;
    };
    debug!("Active bank: {}", active);

    match XoOffset::decode(active) {
        Some(offset) => {
            debug!("XO offset: {}", offset);
            Extraction::Offset(offset)
        }
        None => {
            warn!(
                "Active bank has {} words, offset word {} is missing",
                active.len(),
                XoOffset::WORD_INDEX
            );
            Extraction::TruncatedBank
        }
    }
}

/// Run the full pipeline over a dump
pub fn extract<R: BufRead>(reader: R) -> Result<Extraction> {
    let banks = collect_banks(reader)?;
    Ok(extract_from_banks(&banks))
}
