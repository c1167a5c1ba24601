//! Crystal oscillator trim offset field

use std::fmt;

use super::Bank;

/// 15-bit XO trim offset (0..=0x7FFF)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct XoOffset(u16);

impl XoOffset {
    /// Offset word layout (word 2)
    /// bit 31: offset valid
    /// bits 16-30: offset value
    pub const WORD_INDEX: usize = 2;
    pub const VALID: u32 = 0x8000_0000;
    pub const MASK: u32 = 0x7FFF_0000;
    pub const SHIFT: u32 = 16;
    pub const MAX: u16 = 0x7FFF;

    /// Decode the offset word. An unset valid bit yields zero.
    pub fn from_word(word: u32) -> Self {
        if word & Self::VALID == 0 {
            return Self(0);
        }
        let value = ((word & Self::MASK) >> Self::SHIFT) as u16;
        debug_assert!(value <= Self::MAX);
        Self(value)
    }

    /// Decode the offset from a bank, or `None` if the bank has no offset word
    pub fn decode(bank: &Bank) -> Option<Self> {
        bank.word(Self::WORD_INDEX).map(Self::from_word)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for XoOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}
