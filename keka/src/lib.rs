mod client;
pub mod domain;
mod keka_url;

pub use client::*;
pub use domain::*;
pub use keka_url::*;
