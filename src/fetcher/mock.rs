use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::record::PublicIp;

use super::Fetcher;

/// Fetcher double returning a fixed address, or failing when built with `None`.
#[derive(Clone)]
pub struct MockFetcher {
    ip: Option<PublicIp>,
    calls: Arc<AtomicUsize>,
}

impl MockFetcher {
    pub fn new(ip: Option<&str>) -> Self {
        Self {
            ip: ip.map(PublicIp::new),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self) -> Result<PublicIp> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.ip
            .clone()
            .ok_or_else(|| Error::IpLookup("mock lookup failure".to_string()))
    }
}
