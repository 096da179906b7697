mod day_record;
mod punch;
mod summary;
mod token;

pub use day_record::*;
pub use punch::*;
pub use summary::*;
pub use token::*;
