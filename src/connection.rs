use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Method,
};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    config::Api,
    error::{Error, Result},
};

/// The interface for issuing requests against the DNS service
#[async_trait]
pub trait Connection: Send + Sync {
    /// Send a structured request to the API
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value>;
}

/// An authenticated connection to the DNS service
#[derive(Debug)]
pub struct ApiConnection {
    client: Client,
    base: Url,
}

impl ApiConnection {
    /// Create a new connection from the API configuration
    pub fn new(config: &Api) -> Result<ApiConnection> {
        let headers = {
            let mut map = HeaderMap::new();
            map.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", config.token))?,
            );
            map
        };
        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(ApiConnection {
            client,
            base: config.endpoint.clone(),
        })
    }

    /// Resolve a resource path against the API root
    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| Error::Config)?;
            segments.pop_if_empty();
            for segment in path.split('/') {
                segments.push(segment);
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl Connection for ApiConnection {
    #[instrument(skip(self, body), fields(base = %self.base))]
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = self.endpoint(path)?;

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?.error_for_status()?;
        debug!(status = response.status().as_u16(), "request completed");

        // Some calls respond with an empty body
        let content = response.bytes().await?;
        if content.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::ApiConnection;
    use crate::config::Api;
    use url::Url;

    fn connection(base: &str) -> ApiConnection {
        ApiConnection::new(&Api {
            endpoint: Url::parse(base).unwrap(),
            token: "test-token".into(),
        })
        .expect("failed to build connection")
    }

    #[test]
    fn endpoint_appends_path_segments() {
        let connection = connection("https://dns.example.com/dns/v1");
        let url = connection
            .endpoint("projects/p/managedZones/z/rrsets/www/A")
            .unwrap();

        assert_eq!(
            "https://dns.example.com/dns/v1/projects/p/managedZones/z/rrsets/www/A",
            url.as_str()
        );
    }

    #[test]
    fn endpoint_handles_trailing_slash() {
        let connection = connection("https://dns.example.com/dns/v1/");
        let url = connection.endpoint("projects/p/managedZones/z").unwrap();

        assert_eq!(
            "https://dns.example.com/dns/v1/projects/p/managedZones/z",
            url.as_str()
        );
    }
}
