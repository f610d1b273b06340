pub mod card;
pub mod diff;
pub mod list;

pub use card::*;
pub use diff::*;
pub use list::*;
