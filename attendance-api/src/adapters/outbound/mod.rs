pub mod keka;
#[cfg(test)]
pub mod mock;
