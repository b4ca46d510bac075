use std::time::Duration;
use reqwest::blocking::Client as BlockingClient;
use serde_json::Value;
use tracing::debug;
use crate::error::Error;
use crate::request::client::Client;

pub struct ReqwestClient {
    client: BlockingClient,
}

impl ReqwestClient {

    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = BlockingClient::builder()
            .timeout(timeout)
            .build()?;

        Ok(ReqwestClient {
            client,
        })
    }
}

impl Client for ReqwestClient {

    fn make_json_request(&self, url: &str, payload: Value, headers: &[(&str, &str)]) -> Result<Value, Error> {

        // Body set as raw bytes so the caller's headers are the only Content-Type.
        let mut request = self.client
            .post(url)
            .body(serde_json::to_vec(&payload)?);

        for (k, v) in headers {
            request = request.header(*k, *v);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        debug!(status = status.as_u16(), bytes = body.len(), "model response received");

        if !status.is_success() {
            return Err(Error::Status { status: status.as_u16(), body });
        }

        let ret = serde_json::from_str(&body)?;
        Ok(ret)
    }
}
