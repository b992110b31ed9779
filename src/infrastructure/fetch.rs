use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} did not finish loading within {budget:?}")]
    Timeout { url: String, budget: Duration },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Anything that can turn a listing URL into page markup within a load
/// budget.
pub trait PageFetcher {
    fn fetch_rendered_html(
        &self,
        url: &str,
        load_budget: Duration,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Plain HTTP page load. Gets the server-rendered markup only; nothing on the
/// page is executed.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(client: Client) -> Self {
        info!("Created new HTTP page fetcher");
        Self { client }
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch_rendered_html(
        &self,
        url: &str,
        load_budget: Duration,
    ) -> Result<String, FetchError> {
        let map_err = |source: reqwest::Error| {
            if source.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    budget: load_budget,
                }
            } else {
                FetchError::Request {
                    url: url.to_string(),
                    source,
                }
            }
        };

        let response = self
            .client
            .get(url)
            .timeout(load_budget)
            .send()
            .await
            .map_err(map_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(map_err)?;
        debug!("Loaded {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
