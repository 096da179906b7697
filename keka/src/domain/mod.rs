mod attendance_day;

pub use attendance_day::*;
