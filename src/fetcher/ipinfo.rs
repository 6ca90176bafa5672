use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::record::PublicIp;
use crate::wrapper::http::Client;

use super::Fetcher;

const IPINFO_ENDPOINT: &str = "https://ipinfo.io";

#[derive(Debug, Clone, Deserialize)]
struct IpInfoResponse {
    ip: String,
}

/// Asks ipinfo.io for the caller's public address.
pub struct IpInfoFetcher {
    token: String,
    endpoint: String,
    cli: Client,
}

impl IpInfoFetcher {
    pub fn new(token: String) -> Self {
        Self {
            token,
            endpoint: IPINFO_ENDPOINT.to_string(),
            cli: Client::new(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub async fn fetch(&self) -> Result<PublicIp> {
        let url = format!("{}/", self.endpoint);
        let response = self
            .cli
            .get(&url, &[("token", self.token.as_str())])
            .await
            .map_err(|e| Error::IpLookup(e.to_string()))?;
        let body = response
            .into_body()
            .map_err(|e| Error::IpLookup(e.to_string()))?;

        Self::parse_content(&body)
    }

    fn parse_content(content: &str) -> Result<PublicIp> {
        let resp: IpInfoResponse = serde_json::from_str(content)
            .map_err(|e| Error::IpLookup(format!("cannot parse ipinfo response: {}", e)))?;
        Ok(PublicIp::new(resp.ip))
    }
}

#[async_trait]
impl Fetcher for IpInfoFetcher {
    async fn fetch(&self) -> Result<PublicIp> {
        self.fetch().await
    }
}
