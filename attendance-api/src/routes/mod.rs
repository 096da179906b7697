pub(crate) mod attendance;
pub(crate) mod error;

pub(crate) use error::ApiError;
