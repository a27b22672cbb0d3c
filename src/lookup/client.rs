//! HTTP lookup backend
//!
//! The backend seam is a trait so tests can substitute canned or delayed
//! responders for the reqwest client.

use std::time::Duration;

use async_trait::async_trait;

use super::types::{EndpointKind, LookupError, LookupPage, parse_lookup_value};
use crate::config::ServerConfig;
use crate::error::QpickError;

/// Source of suggestion pages
#[async_trait]
pub trait LookupBackend: Send + Sync {
    async fn fetch(
        &self,
        kind: EndpointKind,
        query: &str,
        page: u32,
    ) -> Result<LookupPage, LookupError>;
}

/// reqwest-backed lookup against the configured server
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    primary_path: String,
    component_path: String,
}

impl HttpBackend {
    pub fn new(server: &ServerConfig) -> Result<Self, QpickError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(server.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: server.base_url.trim_end_matches('/').to_string(),
            primary_path: server.primary_path.clone(),
            component_path: server.component_path.clone(),
        })
    }

    fn path_for(&self, kind: EndpointKind) -> &str {
        match kind {
            EndpointKind::Primary => &self.primary_path,
            EndpointKind::Component => &self.component_path,
        }
    }

    fn url_for(&self, kind: EndpointKind) -> String {
        let path = self.path_for(kind);
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl LookupBackend for HttpBackend {
    async fn fetch(
        &self,
        kind: EndpointKind,
        query: &str,
        page: u32,
    ) -> Result<LookupPage, LookupError> {
        let page = page.to_string();
        let value: serde_json::Value = self
            .client
            .get(self.url_for(kind))
            .query(&[("q", query), ("page", page.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(parse_lookup_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_with(base_url: &str, primary: &str, component: &str) -> HttpBackend {
        let server = ServerConfig {
            base_url: base_url.to_string(),
            primary_path: primary.to_string(),
            component_path: component.to_string(),
            timeout_ms: 1000,
        };
        HttpBackend::new(&server).unwrap()
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let backend = backend_with("http://localhost:8000", "/lookup/items/", "/lookup/parts/");
        assert_eq!(
            backend.url_for(EndpointKind::Primary),
            "http://localhost:8000/lookup/items/"
        );
    }

    #[test]
    fn test_url_handles_trailing_slash_on_base() {
        let backend = backend_with("http://localhost:8000/", "/lookup/items/", "/lookup/parts/");
        assert_eq!(
            backend.url_for(EndpointKind::Primary),
            "http://localhost:8000/lookup/items/"
        );
    }

    #[test]
    fn test_url_inserts_missing_slash() {
        let backend = backend_with("http://localhost:8000", "lookup/items/", "lookup/parts/");
        assert_eq!(
            backend.url_for(EndpointKind::Primary),
            "http://localhost:8000/lookup/items/"
        );
    }

    #[test]
    fn test_each_kind_uses_its_own_path() {
        let backend = backend_with("http://localhost:8000", "/a/", "/b/");
        assert_eq!(backend.url_for(EndpointKind::Primary), "http://localhost:8000/a/");
        assert_eq!(backend.url_for(EndpointKind::Component), "http://localhost:8000/b/");
    }

    #[test]
    fn test_builds_from_default_server_config() {
        assert!(HttpBackend::new(&ServerConfig::default()).is_ok());
    }
}
