use serde::Deserialize;

use crate::error::{Error, Result};
use crate::provider::{ApiMessage, WriteStatus, format_messages};

/// Envelope every Cloudflare v4 endpoint answers with.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct CfResponse<T> {
    pub success: bool,

    #[serde(default)]
    pub errors: Vec<ApiMessage>,

    #[serde(default)]
    pub result: Option<T>,
}

impl<T> CfResponse<T> {
    pub fn into_result(self) -> Result<T> {
        if !self.success {
            return Err(Error::ProviderApi(format_messages(&self.errors)));
        }

        self.result
            .ok_or_else(|| Error::ParseError("cloudflare response has no result".to_string()))
    }

    pub fn into_status(self) -> WriteStatus {
        WriteStatus {
            success: self.success,
            errors: self.errors,
        }
    }
}
