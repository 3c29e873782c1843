//! HTTP delivery for robot messages
//!
//! Wraps reqwest::Client; one POST per send, no retries, no timeout beyond
//! the reqwest defaults.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Message;

const BASE_SEND_URL: &str = "https://oapi.dingtalk.com/robot/send?access_token={ACCESS_TOKEN}";
const JSON_TYPE: &str = "application/json";

/// Response envelope returned by the webhook endpoint.
#[derive(Debug, Deserialize)]
struct SendResponse {
    errcode: i64,
    errmsg: String,
}

/// Client for a single robot webhook, keyed by its access token.
///
/// Immutable after construction and holds no per-call state, so one
/// instance can serve concurrent sends.
pub struct RobotClient {
    access_token: String,
    send_url: String,
    http: reqwest::Client,
}

impl RobotClient {
    /// Build a client for `access_token`. The send URL is derived once
    /// here; no network activity happens until [`send`](Self::send).
    pub fn new(access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        let send_url = BASE_SEND_URL.replace("{ACCESS_TOKEN}", &access_token);
        Self {
            access_token,
            send_url,
            http: reqwest::Client::new(),
        }
    }

    /// The token this client was constructed with.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The fully derived webhook URL.
    pub fn send_url(&self) -> &str {
        &self.send_url
    }

    /// Deliver one message: serialize, POST, classify the response.
    ///
    /// Fails with [`Error::Remote`] when the server answers a nonzero
    /// `errcode`; transport and JSON failures map to their own variants.
    pub async fn send(&self, message: &Message) -> Result<()> {
        let body = serde_json::to_vec(message)?;
        tracing::debug!("robot POST {}", self.send_url);

        let resp = self
            .http
            .post(&self.send_url)
            .header(reqwest::header::CONTENT_TYPE, JSON_TYPE)
            .body(body)
            .send()
            .await?;

        let text = resp.text().await?;
        let ret: SendResponse = serde_json::from_str(&text)?;
        if ret.errcode != 0 {
            tracing::debug!(
                "robot send rejected: errcode={} errmsg={}",
                ret.errcode,
                ret.errmsg
            );
            return Err(Error::Remote {
                code: ret.errcode,
                message: ret.errmsg,
            });
        }
        Ok(())
    }
}
