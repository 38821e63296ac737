mod clock;
mod drafts;
mod tracker;

pub use clock::*;
pub use drafts::*;
pub use tracker::*;
