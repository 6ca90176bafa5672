use std::fmt;

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////
// Public IP
////////////////////////////////////////////////////////////

/// Address reported by the lookup service. Kept as the service returned it;
/// the provider is the one deciding whether it is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicIp(String);

impl PublicIp {
    pub fn new(ip: impl Into<String>) -> Self {
        Self(ip.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicIp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

////////////////////////////////////////////////////////////
// Record descriptor
////////////////////////////////////////////////////////////
pub type ZoneName = String;

/// One managed host: `sub_domain.domain` pointing at the public IP.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDescriptor {
    #[serde(default)]
    pub domain: ZoneName,

    #[serde(default)]
    pub sub_domain: String,

    #[serde(default, rename = "useCloudflareCDN")]
    pub use_cloudflare_cdn: bool,
}

impl RecordDescriptor {
    pub fn new(domain: &str, sub_domain: &str, use_cloudflare_cdn: bool) -> Self {
        Self {
            domain: domain.to_string(),
            sub_domain: sub_domain.to_string(),
            use_cloudflare_cdn,
        }
    }

    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.sub_domain, self.domain)
    }
}
