use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use http_body_util::{BodyExt, Full};
use hyper::{Method, Request, Uri};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::annotated_csv::decode_samples;
use super::flux::build_query;
use crate::engine::errors::FetchError;
use crate::engine::source::SampleSource;
use crate::engine::types::RawSample;
use crate::shared::config::{InfluxCredentials, OrgRef};

/// `SampleSource` backed by the InfluxDB v2 `/api/v2/query` endpoint.
pub struct InfluxClient {
    credentials: InfluxCredentials,
    timeout_secs: u64,
    http_client: Client<HttpConnector, Full<Bytes>>,
}

impl InfluxClient {
    pub fn new(credentials: InfluxCredentials, timeout_secs: u64) -> Self {
        let http_client: Client<HttpConnector, Full<Bytes>> =
            Client::builder(TokioExecutor::new()).build_http();

        Self {
            credentials,
            timeout_secs,
            http_client,
        }
    }

    pub fn query_uri(&self) -> Result<Uri, FetchError> {
        let (param, org) = match &self.credentials.org {
            OrgRef::Id(id) => ("orgID", id),
            OrgRef::Name(name) => ("org", name),
        };
        let raw = format!(
            "{}/api/v2/query?{}={}",
            self.credentials.host,
            param,
            urlencoding::encode(org)
        );
        raw.parse::<Uri>()
            .map_err(|e| FetchError::InvalidUri(format!("{raw}: {e}")))
    }

    async fn post_query(&self, query: &str) -> Result<Bytes, FetchError> {
        let body = json!({
            "query": query,
            "type": "flux",
            "dialect": {
                "annotations": ["datatype"],
                "header": true,
                "delimiter": ","
            }
        });

        let req = Request::builder()
            .method(Method::POST)
            .uri(self.query_uri()?)
            .header("Authorization", format!("Token {}", self.credentials.token))
            .header("Content-Type", "application/json")
            .header("Accept", "application/csv")
            .body(Full::new(Bytes::from(serde_json::to_vec(&body)?)))?;

        let exchange = async {
            let res = self.http_client.request(req).await?;
            let status = res.status();
            let body_bytes = res.collect().await?.to_bytes();

            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body_bytes).trim().to_string(),
                });
            }
            Ok::<Bytes, FetchError>(body_bytes)
        };

        tokio::time::timeout(Duration::from_secs(self.timeout_secs), exchange)
            .await
            .map_err(|_| FetchError::Timeout(self.timeout_secs))?
    }
}

#[async_trait]
impl SampleSource for InfluxClient {
    async fn samples(
        &self,
        bucket: &str,
        measurements: &[String],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RawSample>, FetchError> {
        let query = build_query(bucket, measurements, start, end);
        debug!(target: "mp_influx::influx", %query, "Sending Flux query");

        let started = Instant::now();
        let body = self.post_query(&query).await?;
        let samples = decode_samples(body.as_ref())?;

        info!(
            target: "mp_influx::influx",
            measurements = measurements.len(),
            samples = samples.len(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched batch"
        );
        Ok(samples)
    }
}
