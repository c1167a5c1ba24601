//! Prelude module for convenient imports
//!
//! ```ignore
//! use xo_offset_core::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Pipeline entry points: `extract`, `extract_from_banks`, `Extraction`
//! - Efuse types: `Bank`, `XoOffset`
//! - Error handling: `Error`, `Result`

// Pipeline
pub use crate::extraction::{Extraction, extract, extract_from_banks};

// Efuse data
pub use crate::efuse::{Bank, XoOffset, collect_banks, find_active_bank};

// Error handling
pub use crate::error::{Error, Result};
