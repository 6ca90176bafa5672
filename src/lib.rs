pub mod error;
pub use error::*;

pub mod fetcher;
pub mod provider;
pub mod reconciler;
pub mod record;
pub mod syncer;

mod wrapper;
