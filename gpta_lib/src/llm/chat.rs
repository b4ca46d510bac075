use crate::llm::openai::OpenAIChat;
use crate::config::Config;
use crate::error::Error;
use crate::request::Client;
use super::Message;

/// Stateless chat with an LLM.
///
/// The model keeps no history: the caller owns the transcript and passes it
/// in full on every call.
pub trait ChatModel {

    /// Send the whole transcript and return the next assistant message.
    fn send(&self, transcript: &[Message]) -> Result<Message, Error>;
}

/// Create ChatModel instance.
pub fn get_chat_model(config: Config, client: Box<dyn Client>) -> Box<dyn ChatModel> {
    Box::new(OpenAIChat::new(config, client))
}
