mod types;
pub use types::Fetcher;

mod ipinfo;
pub use ipinfo::IpInfoFetcher;

#[cfg(test)]
pub(crate) mod mock;
