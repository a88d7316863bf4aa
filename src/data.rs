//! HTTP client for the aggregation backend. The core never performs I/O; every fetch goes
//! through here.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use serde::Serialize;
use tracing::{debug, warn};

use crate::favorites::ClubMeta;
use crate::grid::TeeTimeRecord;

/// Query accepted by the tee-time service: a closed date range, an optional hour-of-day
/// whitelist and an optional favorite-club whitelist (empty means unrestricted).
#[derive(Debug, Clone, Serialize)]
pub struct TeeTimeQuery {
    pub start_date: String,
    pub end_date: String,
    pub hour_range: Option<Vec<u32>>,
    pub favorite_clubs: Vec<String>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service responded with status {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetches the unordered raw listings matching the query.
    pub async fn tee_times(&self, query: &TeeTimeQuery) -> Result<Vec<TeeTimeRecord>, FetchError> {
        let response = self
            .http
            .post(format!("{}/get_ttime_grouped", self.base_url))
            .json(query)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        let records: Vec<TeeTimeRecord> = response.json().await?;
        debug!(
            "sourced {} listings for {}..{}",
            records.len(),
            query.start_date,
            query.end_date
        );
        Ok(records)
    }

    /// Fetches the full set of known club names.
    pub async fn club_names(&self) -> Result<Vec<String>, FetchError> {
        self.get_json(&format!("{}/get_all_golfclubs", self.base_url))
            .await
    }

    /// Fetches the static club → address metadata used for region bucketing.
    pub async fn club_meta(&self) -> Result<Vec<ClubMeta>, FetchError> {
        self.get_json(&format!("{}/static/golf_clubs.json", self.base_url))
            .await
    }

    /// Pokes the server-side cache refresh. Fire-and-forget: the response body is discarded
    /// and failures are logged and swallowed — no retry, no effect on the query pipeline.
    pub async fn trigger_refresh(&self) {
        let result = self
            .http
            .post(format!("{}/admin/refresh", self.base_url))
            .send()
            .await;
        match result {
            Ok(response) => debug!("refresh trigger acknowledged: {}", response.status()),
            Err(err) => warn!("refresh trigger failed: {err}"),
        }
    }

    async fn get_json<D: serde::de::DeserializeOwned>(&self, url: &str) -> Result<D, FetchError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}
