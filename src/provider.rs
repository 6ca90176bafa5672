mod types;
pub use types::*;

pub mod cloudflare;

#[cfg(test)]
pub(crate) mod mock;
