use std::fmt;

/// One efuse bank snapshot, as printed on a single "efuse bank" line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bank {
    words: Vec<u32>,
}

impl Bank {
    /// Status word layout (word 0)
    /// bit 31: bank programmed/valid
    /// bit 30: bank superseded by a later one
    pub const STATUS_WORD: usize = 0;
    pub const STATUS_VALID: u32 = 0x8000_0000;
    pub const STATUS_SUPERSEDED: u32 = 0x4000_0000;

    pub fn new(words: Vec<u32>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Word at `index`, or `None` past the end of the bank
    pub fn word(&self, index: usize) -> Option<u32> {
        self.words.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if this bank is programmed and not superseded.
    ///
    /// A bank with no words has no status word and is never active.
    pub fn is_active(&self) -> bool {
        match self.word(Self::STATUS_WORD) {
            Some(status) => {
                status & Self::STATUS_VALID != 0 && status & Self::STATUS_SUPERSEDED == 0
            }
            None => false,
        }
    }
}

impl From<Vec<u32>> for Bank {
    fn from(words: Vec<u32>) -> Self {
        Self::new(words)
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "0x{:08x}", word)?;
        }
        Ok(())
    }
}

/// Find the first active bank, in input order
pub fn find_active_bank(banks: &[Bank]) -> Option<&Bank> {
    banks.iter().find(|bank| bank.is_active())
}
