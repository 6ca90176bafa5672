use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use cf_auto_dns::error::Error;
use cf_auto_dns::error::Result;
use cf_auto_dns::record::RecordDescriptor;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// One year. Longer periods overflow timer deadlines.
pub const MAX_INTERVAL_MINUTES: i64 = 366 * 24 * 60;

////////////////////////////////////////////////////////////
// Yaml document
////////////////////////////////////////////////////////////
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cfg {
    #[serde(default)]
    pub ip_info_api_key: Option<String>,

    #[serde(default)]
    pub cloudflare_api_key: Option<String>,

    #[serde(default)]
    pub update_interval_in_minutes: Option<i64>,

    #[serde(default)]
    pub records: Vec<RecordDescriptor>,
}

impl Default for Cfg {
    /// The template handed to the operator when no config exists yet.
    fn default() -> Self {
        Self {
            ip_info_api_key: None,
            cloudflare_api_key: None,
            update_interval_in_minutes: Some(5),
            records: vec![RecordDescriptor::default()],
        }
    }
}

/// Configuration that passed the startup checks.
#[derive(Debug, Clone)]
pub struct Settings {
    pub ip_info_api_key: String,
    pub cloudflare_api_key: String,
    pub interval: Duration,
    pub records: Vec<RecordDescriptor>,
}

impl Cfg {
    pub fn validate(self, path: &Path) -> Result<Settings> {
        let ip_info_api_key = non_empty(self.ip_info_api_key).ok_or_else(|| {
            Error::ConfigInvalid(format!(
                "Missing root 'ipInfoApiKey' value in {}",
                path.display()
            ))
        })?;

        let cloudflare_api_key = non_empty(self.cloudflare_api_key).ok_or_else(|| {
            Error::ConfigInvalid(format!(
                "Missing root 'cloudflareApiKey' value in {}",
                path.display()
            ))
        })?;

        let minutes = match self.update_interval_in_minutes {
            Some(m) if (1..=MAX_INTERVAL_MINUTES).contains(&m) => m as u64,
            Some(m) if m > MAX_INTERVAL_MINUTES => {
                return Err(Error::ConfigInvalid(format!(
                    "'updateIntervalInMinutes' must be at most {} in {}",
                    MAX_INTERVAL_MINUTES,
                    path.display()
                )));
            }
            _ => {
                return Err(Error::ConfigInvalid(format!(
                    "Please verify that the value of 'updateIntervalInMinutes' is at least 1 in {}",
                    path.display()
                )));
            }
        };

        Ok(Settings {
            ip_info_api_key,
            cloudflare_api_key,
            interval: Duration::from_secs(minutes * 60),
            records: self.records,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

////////////////////////////////////////////////////////////
// Yaml parser
////////////////////////////////////////////////////////////
pub struct Parser;

impl Parser {
    pub fn config_path<P: AsRef<Path>>(dir: P) -> PathBuf {
        dir.as_ref().join(CONFIG_FILE_NAME)
    }

    /// Reads the config, or writes the template and returns
    /// `Error::ConfigMissing` when there is none.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Cfg> {
        let path = path.as_ref();
        match Self::parse_yaml(path) {
            Err(Error::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                Self::write_template(path)?;
                Err(Error::ConfigMissing(path.to_path_buf()))
            }
            Err(Error::ParseError(e)) => Err(Error::ConfigInvalid(format!(
                "{}: {}",
                path.display(),
                e
            ))),
            other => other,
        }
    }

    pub fn parse_yaml<P: AsRef<Path>>(path: P) -> Result<Cfg> {
        let reader = Self::file_reader(path)?;
        let config: Cfg = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    pub fn write_template<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let yaml = serde_yaml::to_string(&Cfg::default())?;
        let mut f = options.open(path)?;
        f.write_all(yaml.as_bytes())?;
        Ok(())
    }

    fn file_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
        let f = File::open(path)?;
        Ok(BufReader::new(f))
    }
}

////////////////////////////////////////////////////////////
// Unit test
////////////////////////////////////////////////////////////
#[cfg(test)]
#[path = "config_test.rs"]
mod test;
