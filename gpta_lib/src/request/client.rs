use std::time::Duration;
use serde_json::Value;
use crate::error::Error;
use super::reqwest::ReqwestClient;

/// Request client.
pub trait Client {
    /// Post JSON payload and receive JSON response.
    /// Non-success statuses are reported as [`Error::Status`] with the raw body.
    fn make_json_request(&self, url: &str, payload: Value, headers: &[(&str, &str)]) -> Result<Value, Error>;
}

/// Create reqwest client with the given request timeout.
pub fn get_reqwest_client(timeout: Duration) -> Result<Box<dyn Client>, Error> {
    Ok(Box::new(ReqwestClient::new(timeout)?))
}
