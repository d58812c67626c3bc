use reqwest;
use serde;
use serde_json;
use std::sync::Arc;
use thiserror;

use crate::models::{Episode, Show, sort_shows_by_name};

const BASE_URL: &str = "https://api.tvmaze.com";

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failure: {}", .0)]
    RequestFailure(reqwest::Error),
    #[error("unexpected response: code={} body={}", .0, .1)]
    UnexpectedResponse(reqwest::StatusCode, String),
    #[error("json decode error: {}", .0)]
    JsonDecode(serde_json::Error),
}

pub struct Client {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl Client {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self::with_base_url(client, BASE_URL.to_string())
    }

    pub fn with_base_url(client: Arc<reqwest::Client>, base_url: String) -> Self {
        Self {
            client,
            base_url,
        }
    }

    pub async fn get_shows(&self) -> Result<Vec<Show>, ApiError> {
        let res = self.client
            .get(format!("{}/shows", self.base_url))
            .send()
            .await
            .map_err(ApiError::RequestFailure)?;

        let status = res.status();
        let body = res.text().await.map_err(ApiError::RequestFailure)?;
        if !status.is_success() {
            let message: Result<ErrorBody, serde_json::Error> = serde_json::from_str(body.as_str());
            let error = match message {
                Ok(value) => value.message,
                Err(_) => body,
            };
            return Err(ApiError::UnexpectedResponse(status, error));
        };

        let mut shows: Vec<Show> = serde_json::from_str(body.as_str()).map_err(ApiError::JsonDecode)?;
        sort_shows_by_name(shows.as_mut_slice());
        Ok(shows)
    }

    pub async fn get_episodes(&self, show_id: u32) -> Result<Vec<Episode>, ApiError> {
        let res = self.client
            .get(format!("{}/shows/{}/episodes", self.base_url, show_id))
            .send()
            .await
            .map_err(ApiError::RequestFailure)?;

        let status = res.status();
        let body = res.text().await.map_err(ApiError::RequestFailure)?;
        if !status.is_success() {
            let message: Result<ErrorBody, serde_json::Error> = serde_json::from_str(body.as_str());
            let error = match message {
                Ok(value) => value.message,
                Err(_) => body,
            };
            return Err(ApiError::UnexpectedResponse(status, error));
        };

        let episodes: Vec<Episode> = serde_json::from_str(body.as_str()).map_err(ApiError::JsonDecode)?;
        Ok(episodes)
    }
}
