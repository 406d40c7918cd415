//! Data sources for the work view.
//!
//! [`WorkSource`] is the seam between [`super::WorkState`] and the
//! transport. [`HttpWorkSource`] talks to the real endpoint; tests plug in
//! in-memory sources.

use std::future::Future;

use reqwest::Url;

use super::model::{WorkQuery, WorkResponse};
use crate::error::QplanError;

/// Path of the work endpoint relative to the base URL.
pub const WORK_PATH: &str = "/app/web/work";

/// Produces a work snapshot for a query.
pub trait WorkSource {
    /// Fetches the snapshot matching `query`.
    ///
    /// # Errors
    ///
    /// Returns the transport or decoding failure that prevented a snapshot
    /// from being produced.
    fn fetch(
        &self,
        query: &WorkQuery,
    ) -> impl Future<Output = Result<WorkResponse, QplanError>> + Send;
}

/// [`WorkSource`] backed by `GET <base>/app/web/work`.
#[derive(Debug, Clone)]
pub struct HttpWorkSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWorkSource {
    /// Creates a source for the server at `base_url` (e.g.
    /// `http://localhost:8888`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a source reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds the request URL for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`QplanError::InvalidUrl`] if the base URL does not parse.
    pub fn url_for(&self, query: &WorkQuery) -> Result<Url, QplanError> {
        let endpoint = format!("{}{WORK_PATH}", self.base_url.trim_end_matches('/'));
        Url::parse_with_params(
            &endpoint,
            &[
                ("triage", query.triage.to_string()),
                ("track", query.track.clone()),
            ],
        )
        .map_err(|e| QplanError::InvalidUrl(format!("{endpoint}: {e}")))
    }
}

impl WorkSource for HttpWorkSource {
    async fn fetch(&self, query: &WorkQuery) -> Result<WorkResponse, QplanError> {
        let url = self.url_for(query)?;
        tracing::debug!(%url, "fetching work snapshot");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QplanError::HttpStatus(status.as_u16()));
        }

        Ok(response.json::<WorkResponse>().await?)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::work::ALL_TRACKS;

    #[test]
    fn url_carries_both_query_parameters() {
        let source = HttpWorkSource::new("http://localhost:8888/");
        let query = WorkQuery {
            triage: 1.5,
            track: ALL_TRACKS.to_string(),
        };
        let Ok(url) = source.url_for(&query) else {
            panic!("url should build");
        };
        assert_eq!(
            url.as_str(),
            "http://localhost:8888/app/web/work?triage=1.5&track=All"
        );
    }

    #[test]
    fn url_encodes_track_names() {
        let source = HttpWorkSource::new("http://localhost:8888");
        let query = WorkQuery {
            triage: 2.0,
            track: "Mobile & Web".to_string(),
        };
        let Ok(url) = source.url_for(&query) else {
            panic!("url should build");
        };
        assert_eq!(url.query(), Some("triage=2&track=Mobile+%26+Web"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let source = HttpWorkSource::new("not a url");
        let query = WorkQuery {
            triage: 1.0,
            track: ALL_TRACKS.to_string(),
        };
        assert!(matches!(
            source.url_for(&query),
            Err(QplanError::InvalidUrl(_))
        ));
    }
}
