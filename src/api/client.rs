use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .build()?;
        Ok(Self { client })
    }
}
