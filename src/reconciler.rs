use log::{error, info};

use crate::error::{Error, Result};
use crate::provider::{Provider, RecordPayload, format_messages};
use crate::record::{PublicIp, RecordDescriptor};

#[derive(Debug)]
pub enum Outcome {
    Created(String),
    Updated(String),
    Failed(Error),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Create,
    Update,
}

impl Action {
    fn as_str(&self) -> &str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
        }
    }

    fn past(&self) -> &str {
        match self {
            Action::Create => "created",
            Action::Update => "updated",
        }
    }
}

/// Points one record at an address: looks the zone and the record up by
/// name, then creates or updates the A-record.
pub struct Reconciler {
    provider: Box<dyn Provider>,
}

impl Reconciler {
    pub fn new(provider: Box<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Never fails: errors are logged and folded into `Outcome::Failed` so
    /// the caller can go on with the next record.
    pub async fn reconcile(&self, ip: &PublicIp, record: &RecordDescriptor) -> Outcome {
        match self.try_reconcile(ip, record).await {
            Ok(outcome) => outcome,
            Err(Error::ZoneNotFound(domain)) => {
                error!("Config: {:?}", record);
                error!("No zone named {} found, skipping {}", domain, record.fqdn());
                Outcome::Failed(Error::ZoneNotFound(domain))
            }
            Err(e) => {
                error!("Unexpected error when creating/updating record: {:?}", record);
                error!("{}", e);
                Outcome::Failed(e)
            }
        }
    }

    async fn try_reconcile(&self, ip: &PublicIp, record: &RecordDescriptor) -> Result<Outcome> {
        let fqdn = record.fqdn();

        let zone = self
            .provider
            .zones_by_name(&record.domain)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::ZoneNotFound(record.domain.clone()))?;

        let existing = self
            .provider
            .records_by_name(&zone.id, &fqdn)
            .await?
            .into_iter()
            .next();

        let payload = RecordPayload::a(ip, record);
        let (action, status) = match existing {
            None => (
                Action::Create,
                self.provider.record_create(&zone.id, &payload).await?,
            ),
            Some(found) => (
                Action::Update,
                self.provider
                    .record_update(&zone.id, &found.id, &payload)
                    .await?,
            ),
        };

        if status.success {
            info!("Successfully {} {}", action.past(), fqdn);
            return Ok(match action {
                Action::Create => Outcome::Created(fqdn),
                Action::Update => Outcome::Updated(fqdn),
            });
        }

        let errors = format_messages(&status.errors);
        error!("Config: {:?}", record);
        error!("Could not {} {}: {}", action.as_str(), fqdn, errors);
        Ok(Outcome::Failed(Error::ProviderApi(errors)))
    }
}
