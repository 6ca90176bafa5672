use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::{ApiMessage, DnsRecord, Provider, RecordPayload, WriteStatus, Zone};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Zones(String),
    Records(String, String),
    Create(String, RecordPayload),
    Update(String, String, RecordPayload),
}

/// In-memory provider recording every call made against it.
#[derive(Clone, Default)]
pub struct MockProvider {
    zones: HashMap<String, Vec<Zone>>,
    records: HashMap<String, Vec<DnsRecord>>,
    write_errors: Vec<ApiMessage>,
    unreachable: HashSet<String>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zone(mut self, domain: &str, id: &str) -> Self {
        self.zones.entry(domain.to_string()).or_default().push(Zone {
            id: id.to_string(),
            name: domain.to_string(),
        });
        self
    }

    pub fn with_record(mut self, fqdn: &str, id: &str) -> Self {
        self.records
            .entry(fqdn.to_string())
            .or_default()
            .push(DnsRecord {
                id: id.to_string(),
                name: fqdn.to_string(),
                r#type: "A".to_string(),
                content: "192.0.2.1".to_string(),
                proxied: false,
            });
        self
    }

    pub fn rejecting_writes(mut self, code: i64, message: &str) -> Self {
        self.write_errors.push(ApiMessage {
            code,
            message: message.to_string(),
        });
        self
    }

    /// Zone lookups for `domain` fail as if the network was down.
    pub fn unreachable(mut self, domain: &str) -> Self {
        self.unreachable.insert(domain.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Create(..) | Call::Update(..)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_status(&self) -> WriteStatus {
        WriteStatus {
            success: self.write_errors.is_empty(),
            errors: self.write_errors.clone(),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn zones_by_name(&self, name: &str) -> Result<Vec<Zone>> {
        self.record(Call::Zones(name.to_string()));
        if self.unreachable.contains(name) {
            return Err(Error::HttpError("connection refused".to_string()));
        }
        Ok(self.zones.get(name).cloned().unwrap_or_default())
    }

    async fn records_by_name(&self, zone_id: &str, name: &str) -> Result<Vec<DnsRecord>> {
        self.record(Call::Records(zone_id.to_string(), name.to_string()));
        Ok(self.records.get(name).cloned().unwrap_or_default())
    }

    async fn record_create(&self, zone_id: &str, payload: &RecordPayload) -> Result<WriteStatus> {
        self.record(Call::Create(zone_id.to_string(), payload.clone()));
        Ok(self.write_status())
    }

    async fn record_update(
        &self,
        zone_id: &str,
        record_id: &str,
        payload: &RecordPayload,
    ) -> Result<WriteStatus> {
        self.record(Call::Update(
            zone_id.to_string(),
            record_id.to_string(),
            payload.clone(),
        ));
        Ok(self.write_status())
    }
}
