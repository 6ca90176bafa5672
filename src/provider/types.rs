use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{PublicIp, RecordDescriptor};

/// Name-based access to a DNS provider. Every call goes to the provider;
/// nothing is cached between calls.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn zones_by_name(&self, name: &str) -> Result<Vec<Zone>>;

    /// A-records named exactly `name` (fully qualified) inside `zone_id`.
    async fn records_by_name(&self, zone_id: &str, name: &str) -> Result<Vec<DnsRecord>>;

    async fn record_create(&self, zone_id: &str, payload: &RecordPayload) -> Result<WriteStatus>;

    async fn record_update(
        &self,
        zone_id: &str,
        record_id: &str,
        payload: &RecordPayload,
    ) -> Result<WriteStatus>;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Zone {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub r#type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub proxied: bool,
}

/// Body of a create or update request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordPayload {
    #[serde(rename = "type")]
    pub r#type: String,
    pub content: String,
    pub name: String,
    pub proxied: bool,
}

impl RecordPayload {
    pub fn a(ip: &PublicIp, record: &RecordDescriptor) -> Self {
        Self {
            r#type: "A".to_string(),
            content: ip.to_string(),
            name: record.sub_domain.clone(),
            proxied: record.use_cloudflare_cdn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

pub fn format_messages(messages: &[ApiMessage]) -> String {
    let joined = messages
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Provider verdict on a write.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteStatus {
    pub success: bool,
    pub errors: Vec<ApiMessage>,
}
