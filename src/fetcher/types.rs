use crate::error::Result;
use crate::record::PublicIp;

use async_trait::async_trait;

#[async_trait]
pub trait Fetcher {
    async fn fetch(&self) -> Result<PublicIp>;
}
