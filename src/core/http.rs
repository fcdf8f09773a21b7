use std::{
    future::Future,
    time::Duration,
};

use reqwest::{
    header::USER_AGENT,
    Client,
    Response,
};

use crate::core::WordHistError;

const USER_AGENT_VALUE: &str = concat!("wordhist/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

/// Source of document text for a load.
pub trait DocumentFetcher: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, WordHistError>> + Send;
}

pub fn http_client(timeout: Duration) -> Result<Client, WordHistError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| WordHistError::Custom(format!("HTTP client build failed: {e}")))
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, WordHistError> {
        Ok(Self { client: http_client(timeout)? })
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, WordHistError> {
        let resp = self.client.get(url).header(USER_AGENT, USER_AGENT_VALUE).send().await?;

        ensure_success(&resp)?;

        Ok(resp.text().await?)
    }
}

fn ensure_success(resp: &Response) -> Result<(), WordHistError> {
    if !resp.status().is_success() {
        return Err(WordHistError::HttpStatus {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}
