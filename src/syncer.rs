use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::time::{self, Instant};

use crate::fetcher::Fetcher;
use crate::provider::Provider;
use crate::reconciler::{Outcome, Reconciler};
use crate::record::RecordDescriptor;

/// Drives the passes: look the address up once, then reconcile every record
/// in configuration order.
pub struct Syncer {
    fetcher: Box<dyn Fetcher + Send + Sync>,
    reconciler: Reconciler,
    records: Vec<RecordDescriptor>,
    interval: Duration,
}

impl Syncer {
    pub fn new(
        fetcher: Box<dyn Fetcher + Send + Sync>,
        provider: Box<dyn Provider>,
        records: Vec<RecordDescriptor>,
        interval: Duration,
    ) -> Self {
        Self {
            fetcher,
            reconciler: Reconciler::new(provider),
            records,
            interval,
        }
    }

    /// One pass. `None` when the address could not be resolved, in which
    /// case no record is touched.
    pub async fn tick(&self) -> Option<Vec<Outcome>> {
        let ip = match self.fetcher.fetch().await {
            Ok(ip) => ip,
            Err(e) => {
                error!("Failed to fetch info from IP Info: {}", e);
                info!("Skipping this run. Waiting {}min for next run.", self.minutes());
                return None;
            }
        };
        info!("Current public IP: {}", ip);

        let mut outcomes = Vec::with_capacity(self.records.len());
        for record in &self.records {
            outcomes.push(self.reconciler.reconcile(&ip, record).await);
        }

        let failed = outcomes.iter().filter(|o| o.is_failed()).count();
        if failed > 0 {
            warn!("{} of {} record(s) failed this run", failed, outcomes.len());
        }

        info!("Finished updating. Waiting {}min for next run.", self.minutes());
        Some(outcomes)
    }

    /// Runs a first pass right away, then one pass per interval. Periodic
    /// passes are spawned and not awaited, so a slow pass may overlap the next.
    /// Never returns.
    pub async fn run(self: Arc<Self>) -> Infallible {
        self.tick().await;

        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        loop {
            ticker.tick().await;
            let syncer = Arc::clone(&self);
            tokio::spawn(async move {
                syncer.tick().await;
            });
        }
    }

    fn minutes(&self) -> u64 {
        self.interval.as_secs() / 60
    }
}
