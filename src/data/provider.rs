use {
    anyhow::{Context, Result},
    async_trait::async_trait,
    reqwest::Client,
    serde::Deserialize,
    serde_json::Value,
    std::collections::HashMap,
};

use crate::{config::RATE_API, data::RateError, domain::Currency};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Abstract interface for fetching a live fiat rate.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FiatRateProvider: Send + Sync {
    /// One request, no retry. `1 from = rate to`.
    async fn latest_rate(&self, from: Currency, to: Currency) -> Result<f64, RateError>;
}

/// Body of `GET /v4/latest/{code}`. Anything besides `rates` is ignored.
#[derive(Debug, Deserialize)]
pub struct LatestRatesResponse {
    #[serde(default)]
    pub rates: HashMap<String, Value>,
}

impl LatestRatesResponse {
    /// Rate for `to`, rejecting missing, non-numeric, zero, negative or non-finite values.
    pub fn rate_for(&self, to: Currency) -> Result<f64, RateError> {
        self.rates
            .get(to.code())
            .and_then(Value::as_f64)
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or(RateError::RateUnavailable { code: to })
    }
}

pub struct ExchangeRateApi {
    client: Client,
    base_url: String,
}

impl ExchangeRateApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // No explicit timeout: platform default applies.
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client for rate API")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn latest_url(&self, from: Currency) -> String {
        format!("{}{}{}", self.base_url, RATE_API.latest_path, from.code())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FiatRateProvider for ExchangeRateApi {
    async fn latest_rate(&self, from: Currency, to: Currency) -> Result<f64, RateError> {
        let url = self.latest_url(from);

        #[cfg(debug_assertions)]
        if DF.log_rate_api {
            log::info!("GET {}", url);
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RateError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Fetch {
                status: status.as_u16(),
            });
        }

        let body: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| RateError::Decode(e.to_string()))?;

        body.rate_for(to)
    }
}
