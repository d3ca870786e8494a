// SPDX-License-Identifier: MIT

//! Outbound contact-form relay client.
//!
//! Packages a validated message into a multipart form and POSTs it once to a
//! Web3Forms-compatible endpoint. Single best-effort attempt: no retry, no
//! idempotency key. The caller decides how to present the typed outcome.

use serde::Deserialize;
use thiserror::Error;

use crate::models::contact::ContactMessage;

/// Hosted form-relay endpoint that forwards submissions via email.
const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";
/// Public access credential identifying this form at the relay.
const ACCESS_KEY: &str = "2abc227c-88da-447c-93ae-1b36d7fb7781";
/// Fixed sender/subject labels attached to every submission.
const FROM_NAME: &str = "Portfolio Contact Form";
const SUBJECT: &str = "New Contact Form Submission";

/// Submission failure, split by who rejected it.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("relay rejected submission: {0}")]
    Rejected(String),
    #[error("malformed relay response: {0}")]
    MalformedResponse(String),
}

/// Acknowledgement returned for an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayReceipt {
    pub message: Option<String>,
}

/// Wire shape of the relay's JSON reply.
#[derive(Debug, Deserialize)]
struct RelayAck {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Blocking HTTP client for the relay, run on a command worker thread so the
/// UI thread never waits on the network.
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    access_key: String,
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::with_endpoint(RELAY_ENDPOINT)
    }
}

impl RelayClient {
    /// Client against a custom endpoint (tests point this at a local server).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
            access_key: ACCESS_KEY.to_string(),
        }
    }

    /// Send one submission. Exactly one outbound request per call.
    pub fn send(&self, msg: &ContactMessage) -> Result<RelayReceipt, RelayError> {
        let form = reqwest::blocking::multipart::Form::new()
            .text("access_key", self.access_key.clone())
            .text("name", msg.name.clone())
            .text("email", msg.email.clone())
            .text("message", msg.message.clone())
            .text("from_name", FROM_NAME)
            .text("subject", SUBJECT);

        let body = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()?
            .text()?;

        decode_ack(&body)
    }
}

/// Decode `{ "success": bool, "message": string? }` into a typed outcome.
fn decode_ack(body: &str) -> Result<RelayReceipt, RelayError> {
    let ack: RelayAck =
        serde_json::from_str(body).map_err(|err| RelayError::MalformedResponse(err.to_string()))?;

    if ack.success {
        Ok(RelayReceipt {
            message: ack.message,
        })
    } else {
        Err(RelayError::Rejected(
            ack.message
                .unwrap_or_else(|| "Failed to send message".to_string()),
        ))
    }
}
