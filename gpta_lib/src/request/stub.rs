//! Only for tests.

use serde_json::Value;
use crate::error::Error;
use crate::request::client::Client;

/// Canned reply of the stub.
pub enum StubResponse {
    /// Successful JSON body.
    Body(Value),
    /// Non-success status with raw body.
    Status(u16, String),
}

/// Client for tests.
pub struct StubClient {
    expected_headers: Vec<(String, String)>,
    expected_payload: Value,
    response: StubResponse,
}

impl StubClient {

    /// Create client.
    pub fn new(expected_headers: Vec<(String, String)>,
        expected_payload: Value,
        response: StubResponse) -> Self
    {
        StubClient {
            expected_headers,
            expected_payload,
            response,
        }
    }
}

impl Client for StubClient {

    fn make_json_request(&self, _url: &str, payload: Value, headers: &[(&str, &str)]) -> Result<Value, Error> {
        assert_eq!(headers.len(), self.expected_headers.len(), "headers count");
        for (expected, actual) in headers.iter().zip(self.expected_headers.iter()) {
            assert_eq!(expected.0, actual.0, "headers keys");
            assert_eq!(expected.1, actual.1, "headers values");
        }

        assert_eq!(payload, self.expected_payload);

        match &self.response {
            StubResponse::Body(body) => Ok(body.clone()),
            StubResponse::Status(status, body) => Err(Error::Status { status: *status, body: body.clone() }),
        }
    }
}
