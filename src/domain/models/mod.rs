mod field;
mod report;

pub use field::*;
pub use report::*;
