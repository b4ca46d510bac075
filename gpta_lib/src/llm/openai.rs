use crate::llm::ChatModel;
use crate::config::Config;
use crate::error::Error;
use crate::val_as_str;
use serde_json::{json, Value};
use tracing::debug;
use crate::request::Client;
use super::{Message, Role};

pub struct OpenAIChat {
    config: Config,
    client: Box<dyn Client>,
}

impl OpenAIChat {
    pub(super) fn new(config: Config, client: Box<dyn Client>) -> Self {
        OpenAIChat {
            config,
            client,
        }
    }

    fn prep_payload(&self, transcript: &[Message]) -> Result<Value, Error> {
        Ok(json!({
            "model": self.config.name,
            "messages": serde_json::to_value(transcript)?,
        }))
    }

    fn check_for_error(&self, response: &Value) -> Result<(), Error> {
        if let Some(error) = response.get("error") {
            let errmes = val_as_str!(error["message"], "error message").to_owned();
            return Err(Error::LLMErrorMessage(errmes));
        }
        Ok(())
    }

    fn process_response(&self, response: Value) -> Result<Message, Error> {

        self.check_for_error(&response)?;

        let choices = &response["choices"];
        if choices.is_null() {
            return Err(Error::NoChoices);
        }

        let choice = choices.as_array()
            .ok_or(Error::LLMResponseError("unexpected answer format, can't enumerate response messages."))?
            .first()
            .ok_or(Error::NoChoices)?;

        let content = &choice["message"]["content"];
        if content.is_null() {
            return Err(Error::EmptyResponse);
        }

        let content = val_as_str!(content, "message content");
        if content.is_empty() {
            return Err(Error::EmptyResponse);
        }

        Ok(Message::new(Role::Assistant, content.to_owned()))
    }
}

impl ChatModel for OpenAIChat {

    fn send(&self, transcript: &[Message]) -> Result<Message, Error> {
        let payload = self.prep_payload(transcript)?;

        let token = format!("Bearer {}", self.config.api_key);
        let headers = &[
            ("Authorization", token.as_ref()),
            ("Content-Type", "application/json"),
        ];

        debug!(model = %self.config.name, messages = transcript.len(), "sending transcript");

        let response = self.client.make_json_request(&self.config.api_url, payload, headers)?;

        self.process_response(response)
    }
}
