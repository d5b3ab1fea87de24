// src/core/net.rs
//
// Page transport: HTTPS GET with a browser user agent.

use std::{error::Error, time::Duration};

use reqwest::blocking::Client;
use crate::config::consts::{ REQUEST_TIMEOUT_SECS, USER_AGENT };

/// Anything that can turn a profile URL into page text.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// Blocking reqwest client. One request at a time, no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();

        // Non-200 bodies are parsed anyway; they just won't carry the meta tag.
        if !status.is_success() {
            loge!("Net: {} → HTTP {}", url, status);
        }
        let body = resp.text()?;
        logd!("Net: {} → HTTP {} ({} bytes)", url, status.as_u16(), body.len());
        Ok(body)
    }
}
