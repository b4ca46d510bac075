//! LLM interface
mod chat;
mod openai;
mod util;
mod messages;

pub use chat::ChatModel;
pub use chat::get_chat_model;
pub use messages::Message;
pub use messages::Role;
