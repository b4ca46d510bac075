//! Gpta-lib is the model-facing half of the gpta agent.
//! It holds the chat message model, the HTTP transport, and a stateless
//! chat-completion client that returns the next assistant message for a
//! given transcript.
//!
//! ### Examples
//!
//! ```rust no_run
//! use gpta_lib::llm::{get_chat_model, Message, Role};
//! use gpta_lib::request::get_reqwest_client;
//! use gpta_lib::Config;
//!
//! let config = Config::new("gpt-4o".into(), "<api-key>".into());
//!
//! let reqwest_client = get_reqwest_client(config.timeout).expect("transport created");
//!
//! let chat = get_chat_model(config, reqwest_client);
//!
//! let transcript = vec![
//!     Message::new(Role::System, "Reply with shell:<command> or exit:<code>.".into()),
//!     Message::new(Role::User, "list files".into()),
//! ];
//!
//! let reply = chat.send(&transcript).expect("LLM response");
//! println!("{}", reply.content);
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod error;
mod config;
pub mod llm;
pub mod request;

pub use error::Error;
pub use config::Config;
pub use config::DEFAULT_API_URL;
pub use config::REQUEST_TIMEOUT;
