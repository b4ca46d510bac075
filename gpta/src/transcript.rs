use gpta_lib::llm::{Message, Role};

/// Append-only conversation history sent in full on every model call.
///
/// Starts with one system message and one user message holding the task.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {

    /// Seed transcript with system prompt and task.
    pub fn new(system_prompt: String, task: String) -> Self {
        Transcript {
            messages: vec![
                Message::new(Role::System, system_prompt),
                Message::new(Role::User, task),
            ],
        }
    }

    /// Append assistant reply.
    pub fn push_assistant(&mut self, content: String) {
        self.messages.push(Message::new(Role::Assistant, content));
    }

    /// Append command observation.
    pub fn push_observation(&mut self, content: String) {
        self.messages.push(Message::new(Role::User, content));
    }

    /// Messages in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
