//! HTTP client for the cross-encoder scoring service.
//!
//! The service accepts `{query, documents: [{text, ...}]}` on `POST /rerank`
//! and answers with `ranked_documents` in descending relevance, echoing any
//! extra fields. Each document carries its input position so the returned
//! order can be turned back into per-input scores. Scores are rank-derived
//! (`n - position`) and only comparable within one batch.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use sift_core::config::RerankConfig;
use sift_core::errors::{SiftError, SiftResult};
use sift_core::models::Deadline;
use sift_core::traits::ICrossEncoder;

#[derive(Debug, Serialize)]
struct RerankRequest<'a> {
    query: &'a str,
    documents: Vec<RequestDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestDocument<'a> {
    text: &'a str,
    index: usize,
}

#[derive(Debug, Deserialize)]
struct RerankResponse {
    ranked_documents: Vec<ResponseDocument>,
}

#[derive(Debug, Deserialize)]
struct ResponseDocument {
    index: usize,
}

pub struct RemoteCrossEncoder {
    client: reqwest::blocking::Client,
    url: String,
    timeout: Duration,
}

impl RemoteCrossEncoder {
    pub fn new(config: &RerankConfig) -> SiftResult<Self> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SiftError::ScoringService {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            url: format!("{}/rerank", config.endpoint.trim_end_matches('/')),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request(&self, query: &str, texts: &[&str], timeout: Duration) -> SiftResult<Vec<f64>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let body = RerankRequest {
            query,
            documents: texts
                .iter()
                .enumerate()
                .map(|(index, text)| RequestDocument { text, index })
                .collect(),
        };

        debug!(url = %self.url, documents = texts.len(), "posting rerank request");
        let response = self
            .client
            .post(&self.url)
            .timeout(timeout)
            .json(&body)
            .send()
            .map_err(|e| SiftError::ScoringService {
                reason: format!("request to {} failed: {e}", self.url),
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            warn!(%status, "scoring service rejected rerank request");
            return Err(SiftError::ScoringService {
                reason: format!("HTTP {status}: {text}"),
            });
        }

        let parsed: RerankResponse = response.json().map_err(|e| SiftError::ScoringService {
            reason: format!("malformed rerank response: {e}"),
        })?;

        scores_from_ranking(&parsed.ranked_documents, texts.len())
    }
}

/// Turn a returned ranking into per-input scores. Every input position
/// must appear exactly once.
fn scores_from_ranking(ranked: &[ResponseDocument], n: usize) -> SiftResult<Vec<f64>> {
    if ranked.len() != n {
        return Err(SiftError::ScoringService {
            reason: format!("expected {n} ranked documents, got {}", ranked.len()),
        });
    }
    let mut scores: Vec<Option<f64>> = vec![None; n];
    for (position, doc) in ranked.iter().enumerate() {
        match scores.get_mut(doc.index) {
            Some(slot) if slot.is_none() => *slot = Some((n - position) as f64),
            _ => {
                return Err(SiftError::ScoringService {
                    reason: format!("invalid or repeated document index {}", doc.index),
                })
            }
        }
    }
    Ok(scores.into_iter().flatten().collect())
}

impl ICrossEncoder for RemoteCrossEncoder {
    fn score(&self, query: &str, text: &str) -> SiftResult<f64> {
        let scores = self.request(query, &[text], self.timeout)?;
        Ok(scores.first().copied().unwrap_or_default())
    }

    fn score_batch(&self, query: &str, texts: &[&str]) -> SiftResult<Vec<f64>> {
        self.request(query, texts, self.timeout)
    }

    fn score_batch_until(
        &self,
        query: &str,
        texts: &[&str],
        deadline: &Deadline,
    ) -> SiftResult<Vec<f64>> {
        deadline.check("rerank")?;
        let timeout = deadline
            .remaining()
            .map_or(self.timeout, |left| left.min(self.timeout));
        self.request(query, texts, timeout)
    }
}
