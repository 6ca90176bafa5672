use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{LevelFilter, error, info, warn};

use cf_auto_dns::error::Error;
use cf_auto_dns::fetcher::IpInfoFetcher;
use cf_auto_dns::provider::cloudflare::CfClient;
use cf_auto_dns::syncer::Syncer;

mod config;

/// Keeps Cloudflare A-records pointed at this host's public IP.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Directory holding config.yaml
    #[arg(long, env = "CF_AUTO_DNS_CONFIG_DIR")]
    config_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_logger();

    let args = Args::parse();
    let path = config::Parser::config_path(&args.config_dir);

    let settings = match config::Parser::load(&path).and_then(|cfg| cfg.validate(&path)) {
        Ok(settings) => settings,
        Err(Error::ConfigMissing(path)) => {
            warn!(
                "Config not found. Please configure it at: {}",
                path.display()
            );
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Managing {} record(s), updating every {}min",
        settings.records.len(),
        settings.interval.as_secs() / 60
    );

    let syncer = Syncer::new(
        Box::new(IpInfoFetcher::new(settings.ip_info_api_key)),
        Box::new(CfClient::new(&settings.cloudflare_api_key)),
        settings.records,
        settings.interval,
    );
    match Arc::new(syncer).run().await {}
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                record.level(),
                buf.timestamp(),
                record.args()
            )
        })
        .init();
}
