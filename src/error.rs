use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    HttpError(String),
    ParseError(String),
    IoError(std::io::Error),
    ConfigMissing(PathBuf),
    ConfigInvalid(String),
    IpLookup(String),
    ZoneNotFound(String),
    ProviderApi(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::HttpError(e) => write!(f, "HTTP error: {}", e),
            Error::ParseError(e) => write!(f, "Parse error: {}", e),
            Error::IoError(e) => write!(f, "IO error: {}", e),
            Error::ConfigMissing(p) => write!(f, "Config not found: {}", p.display()),
            Error::ConfigInvalid(e) => write!(f, "Invalid config: {}", e),
            Error::IpLookup(e) => write!(f, "IP lookup failed: {}", e),
            Error::ZoneNotFound(e) => write!(f, "Zone not found: {}", e),
            Error::ProviderApi(e) => write!(f, "Provider API error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        // urls carry credentials in their query
        Error::HttpError(err.without_url().to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::ParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Error {
        Error::ParseError(err.to_string())
    }
}
