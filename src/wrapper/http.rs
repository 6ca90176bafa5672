use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub enum HeaderKey {
    Authorization,
    ContentType,
}

impl HeaderKey {
    fn as_str(&self) -> &str {
        match self {
            HeaderKey::Authorization => "Authorization",
            HeaderKey::ContentType => "Content-Type",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn into_body(self) -> Result<String> {
        if self.status == 200 {
            Ok(self.body)
        } else {
            Err(Error::HttpError(format!("status: {}", self.status)))
        }
    }

    /// Parses the body whatever the status is. APIs that report failures in
    /// the body (with a 4xx status) need this to surface their error list.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            Error::ParseError(format!("status {}, unparsable body: {}", self.status, e))
        })
    }
}

#[derive(Debug, Clone)]
pub struct Header {
    key: HeaderKey,
    value: String,
}

impl Header {
    pub fn new(key: HeaderKey, value: String) -> Self {
        Self { key, value }
    }
}

pub struct Client {
    cli: reqwest::Client,
    dft_headers: Vec<Header>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self {
            cli: reqwest::Client::new(),
            dft_headers: vec![],
        }
    }

    pub fn set_default_headers(&mut self, headers: Vec<Header>) {
        self.dft_headers = headers;
    }

    /// `query` pairs are percent-encoded and appended to `url`.
    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        let builder = self.add_headers(self.cli.get(url)).query(query);
        Self::send(builder).await
    }

    pub async fn post(&self, url: &str, body: String) -> Result<Response> {
        let builder = self.add_headers(self.cli.post(url)).body(body);
        Self::send(builder).await
    }

    pub async fn put(&self, url: &str, body: String) -> Result<Response> {
        let builder = self.add_headers(self.cli.put(url)).body(body);
        Self::send(builder).await
    }

    async fn send(builder: reqwest::RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        Ok(Response {
            status: response.status().into(),
            body: response.text().await?,
        })
    }

    fn add_headers(&self, mut builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        for header in &self.dft_headers {
            builder = builder.header(header.key.as_str(), header.value.as_str());
        }

        builder
    }
}
