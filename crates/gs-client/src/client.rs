//! Blocking HTTP transport.

use crate::reply::{self, AttributesReply, DataReply, LoadReply};
use crate::ClientResult;

/// Client for the explorer backend contract.
///
/// Calls block, so they belong on the fetch worker thread or in the CLI,
/// never on the UI thread. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ExplorerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `/load_network` with the form-encoded network name.
    pub fn load_network(&self, network: &str) -> ClientResult<LoadReply> {
        let reply = self
            .http
            .post(self.url("/load_network"))
            .form(&[("network", network)])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(reply)
    }

    /// GET `/get_components` for the loaded network.
    pub fn components(&self) -> ClientResult<Vec<String>> {
        let value = self
            .http
            .get(self.url("/get_components"))
            .send()?
            .error_for_status()?
            .json()?;
        reply::decode_components(&value)
    }

    /// GET the full static snapshot of one component table.
    pub fn static_data(&self, component: &str) -> ClientResult<DataReply> {
        let value = self
            .http
            .get(self.url(&format!("/get_data/{component}/all/static")))
            .send()?
            .error_for_status()?
            .json()?;
        reply::decode_data(value)
    }

    /// GET the attribute listing for one component.
    pub fn attributes(&self, component: &str) -> ClientResult<AttributesReply> {
        let value = self
            .http
            .get(self.url(&format!("/get_attributes/{component}")))
            .send()?
            .error_for_status()?
            .json()?;
        reply::decode_attributes(value)
    }

    /// GET the time series of one component attribute.
    pub fn varying_data(&self, component: &str, attribute: &str) -> ClientResult<DataReply> {
        let value = self
            .http
            .get(self.url(&format!("/get_data/{component}/{attribute}/varying")))
            .send()?
            .error_for_status()?
            .json()?;
        reply::decode_data(value)
    }
}
