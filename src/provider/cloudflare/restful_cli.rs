use async_trait::async_trait;
use log::debug;

use crate::error::Result;
use crate::provider::{DnsRecord, Provider, RecordPayload, WriteStatus, Zone};
use crate::wrapper::http::{Client, Header, HeaderKey};

use super::cloudflare::CfResponse;

const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

pub struct CfClient {
    base: String,
    cli: Client,
}

impl CfClient {
    pub fn new(api_token: &str) -> Self {
        let mut cli = Client::new();
        cli.set_default_headers(vec![
            Header::new(HeaderKey::Authorization, format!("Bearer {}", api_token)),
            Header::new(HeaderKey::ContentType, "application/json".to_string()),
        ]);

        Self {
            base: CLOUDFLARE_API_BASE.to_string(),
            cli,
        }
    }

    pub fn with_base_url(mut self, base: &str) -> Self {
        self.base = base.trim_end_matches('/').to_string();
        self
    }
}

impl CfClient {
    pub async fn zone_list(&self, name: &str) -> Result<Vec<Zone>> {
        let url = format!("{}/zones", self.base);
        debug!("GET {} name={}", url, name);
        let resp: CfResponse<Vec<Zone>> = self.cli.get(&url, &[("name", name)]).await?.json()?;
        resp.into_result()
    }

    pub async fn records_list_by_name(&self, zoneid: &str, name: &str) -> Result<Vec<DnsRecord>> {
        let url = format!("{}/zones/{}/dns_records", self.base, zoneid);
        debug!("GET {} name={}", url, name);
        let resp: CfResponse<Vec<DnsRecord>> = self
            .cli
            .get(&url, &[("type", "A"), ("name", name)])
            .await?
            .json()?;
        resp.into_result()
    }

    pub async fn record_op_create(&self, zoneid: &str, record: &RecordPayload) -> Result<WriteStatus> {
        let url = format!("{}/zones/{}/dns_records", self.base, zoneid);
        let body = serde_json::to_string(record)?;
        debug!("POST {} {}", url, body);
        let resp: CfResponse<serde_json::Value> = self.cli.post(&url, body).await?.json()?;
        Ok(resp.into_status())
    }

    pub async fn record_op_update(
        &self,
        zoneid: &str,
        recordid: &str,
        record: &RecordPayload,
    ) -> Result<WriteStatus> {
        let url = format!("{}/zones/{}/dns_records/{}", self.base, zoneid, recordid);
        let body = serde_json::to_string(record)?;
        debug!("PUT {} {}", url, body);
        let resp: CfResponse<serde_json::Value> = self.cli.put(&url, body).await?.json()?;
        Ok(resp.into_status())
    }
}

#[async_trait]
impl Provider for CfClient {
    async fn zones_by_name(&self, name: &str) -> Result<Vec<Zone>> {
        self.zone_list(name).await
    }

    async fn records_by_name(&self, zone_id: &str, name: &str) -> Result<Vec<DnsRecord>> {
        self.records_list_by_name(zone_id, name).await
    }

    async fn record_create(&self, zone_id: &str, payload: &RecordPayload) -> Result<WriteStatus> {
        self.record_op_create(zone_id, payload).await
    }

    async fn record_update(
        &self,
        zone_id: &str,
        record_id: &str,
        payload: &RecordPayload,
    ) -> Result<WriteStatus> {
        self.record_op_update(zone_id, record_id, payload).await
    }
}
