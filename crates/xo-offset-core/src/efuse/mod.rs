mod bank;
mod offset;
mod scanner;

pub use bank::*;
pub use offset::*;
pub use scanner::*;
