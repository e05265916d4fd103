//! Azure Translator adapter.
//!
//! Implements the `hb-core` Translator port over the Translator Text v3 REST API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use hb_core::{
    config::Config,
    errors::Error,
    ports::{SourceText, TranslatedSegment, Translator},
    Result,
};

const API_VERSION: &str = "3.0";

#[derive(Clone, Debug)]
pub struct AzureOptions {
    /// Full translate URL (endpoint + path), without query string.
    pub url: String,
    pub sub_key: String,
    pub region: Option<String>,
    pub timeout: Option<Duration>,
}

impl From<&Config> for AzureOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            url: cfg.translate_url(),
            sub_key: cfg.azure_sub_key.clone(),
            region: cfg.azure_region.clone(),
            timeout: cfg.azure_timeout,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AzureTranslator {
    opts: AzureOptions,
    http: reqwest::Client,
}

impl AzureTranslator {
    pub fn new(opts: AzureOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = opts.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::External(format!("azure http client build failed: {e}")))?;
        Ok(Self { opts, http })
    }
}

#[async_trait]
impl Translator for AzureTranslator {
    async fn translate(
        &self,
        segments: &[SourceText],
        from: &str,
        to: &[&str],
    ) -> Result<Vec<TranslatedSegment>> {
        let mut query: Vec<(&str, &str)> = vec![("api-version", API_VERSION), ("from", from)];
        query.extend(to.iter().map(|lang| ("to", *lang)));

        let mut req = self
            .http
            .post(&self.opts.url)
            .query(&query)
            .header("Ocp-Apim-Subscription-Key", &self.opts.sub_key)
            .json(segments);
        if let Some(region) = &self.opts.region {
            req = req.header("Ocp-Apim-Subscription-Region", region);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| Error::Translate(format!("azure request error: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::Translate(format!("azure response read error: {e}")))?;

        if !status.is_success() {
            return Err(Error::Translate(format!(
                "azure translation failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let segments = parse_response(&body)?;
        debug!(segments = segments.len(), "azure translation ok");
        Ok(segments)
    }
}

/// Parse a translate response body. `null` (or an empty body) means no result.
fn parse_response(body: &str) -> Result<Vec<TranslatedSegment>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: Option<Vec<TranslatedSegment>> = serde_json::from_str(body)
        .map_err(|e| Error::Translate(format!("azure json error: {e}")))?;
    Ok(parsed.unwrap_or_default())
}
