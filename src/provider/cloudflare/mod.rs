mod cloudflare;

mod restful_cli;
pub use restful_cli::CfClient;
