// Utils compartidos

pub mod constants;
pub mod formatters;
pub mod storage;

pub use constants::*;
pub use formatters::*;
pub use storage::*;
