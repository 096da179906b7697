mod attendance;

pub use attendance::*;
