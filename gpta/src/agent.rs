use std::io::{self, Write};

use gpta_lib::llm::{get_chat_model, ChatModel};
use gpta_lib::request::get_reqwest_client;
use tracing::{debug, info};

use crate::config::Config;
use crate::directive::Directive;
use crate::error::AppError;
use crate::tools::{AutoConfirm, Confirm, Shell, TtyConfirm};
use crate::transcript::Transcript;

/// Outcome of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A command ran, ask the model again.
    Continue,
    /// The model asked to end the run with this code.
    Exit(i32),
}

/// Agent.
pub struct Agent {
    transcript: Transcript,
    chat: Box<dyn ChatModel>,
    shell: Shell,
    gate: Box<dyn Confirm>,
    out: Box<dyn Write>,
}

impl Agent {

    /// Create new agent talking to the configured endpoint.
    pub fn new(config: &Config, transcript: Transcript) -> Result<Self, AppError> {
        let reqwest_client = get_reqwest_client(config.model_params.timeout)?;
        let chat = get_chat_model(config.model_params.clone(), reqwest_client);

        let gate: Box<dyn Confirm> = if config.interactive {
            Box::new(TtyConfirm::new())
        } else {
            Box::new(AutoConfirm)
        };

        Ok(Self::with_parts(
            transcript,
            chat,
            Shell::new(config.shell.clone()),
            gate,
            Box::new(io::stdout()),
        ))
    }

    /// Assemble agent from its collaborators.
    pub fn with_parts(
        transcript: Transcript,
        chat: Box<dyn ChatModel>,
        shell: Shell,
        gate: Box<dyn Confirm>,
        out: Box<dyn Write>,
    ) -> Self {
        Agent {
            transcript,
            chat,
            shell,
            gate,
            out,
        }
    }

    /// Run agent until the model terminates the run. Returns the exit code.
    pub fn run(&mut self) -> Result<i32, AppError> {
        loop {
            if let Step::Exit(code) = self.step()? {
                return Ok(code);
            }
        }
    }

    /// One model call and the resulting side effect.
    pub fn step(&mut self) -> Result<Step, AppError> {
        debug!(messages = self.transcript.messages().len(), "awaiting model");
        let reply = self.chat.send(self.transcript.messages())?;

        // History keeps the reply even if it turns out to be malformed.
        self.transcript.push_assistant(reply.content.clone());

        let directive = Directive::parse(&reply.content)?;
        self.dispatch(directive)
    }

    fn dispatch(&mut self, directive: Directive) -> Result<Step, AppError> {
        match directive {
            Directive::RunCommand { command } => {
                if !self.gate.confirm(&command)? {
                    return Err(AppError::Aborted);
                }

                info!(shell = %self.shell.path().display(), "Executing: {command}");
                let output = self.shell.capture(&command);

                self.out.write_all(&output.text).map_err(AppError::Output)?;
                self.out.flush().map_err(AppError::Output)?;

                self.transcript.push_observation(output.to_observation());
                Ok(Step::Continue)
            }
            Directive::Terminate { code } => {
                info!("Exiting with code: {code}");
                Ok(Step::Exit(code))
            }
            Directive::Invalid { content } => Err(AppError::InvalidResponse(content)),
        }
    }

    /// Conversation so far.
    #[cfg(test)]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use gpta_lib::llm::{Message, Role};
    use tracing_test::traced_test;

    use super::*;

    type Calls = Rc<RefCell<Vec<Vec<Message>>>>;

    struct ScriptedChat {
        replies: RefCell<VecDeque<Result<String, gpta_lib::Error>>>,
        calls: Calls,
    }

    impl ChatModel for ScriptedChat {
        fn send(&self, transcript: &[Message]) -> Result<Message, gpta_lib::Error> {
            self.calls.borrow_mut().push(transcript.to_vec());
            let reply = self.replies.borrow_mut().pop_front().expect("scripted reply")?;
            Ok(Message::new(Role::Assistant, reply))
        }
    }

    struct ScriptedGate {
        answers: VecDeque<bool>,
        asked: Rc<RefCell<Vec<String>>>,
    }

    impl Confirm for ScriptedGate {
        fn confirm(&mut self, command: &str) -> Result<bool, AppError> {
            self.asked.borrow_mut().push(command.to_owned());
            Ok(self.answers.pop_front().expect("scripted answer"))
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Harness {
        agent: Agent,
        calls: Calls,
        out: SharedBuf,
    }

    fn harness(
        replies: Vec<Result<String, gpta_lib::Error>>,
        gate: Box<dyn Confirm>,
    ) -> Harness {
        let calls = Calls::default();
        let out = SharedBuf::default();
        let chat = ScriptedChat {
            replies: RefCell::new(replies.into()),
            calls: calls.clone(),
        };
        let agent = Agent::with_parts(
            Transcript::new("sys".into(), "list files".into()),
            Box::new(chat),
            Shell::new("/bin/sh".into()),
            gate,
            Box::new(out.clone()),
        );
        Harness { agent, calls, out }
    }

    fn ok(reply: &str) -> Result<String, gpta_lib::Error> {
        Ok(reply.to_owned())
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files_then_exit() {
        let mut h = harness(vec![ok("shell:ls"), ok("exit:0")], Box::new(AutoConfirm));

        let code = h.agent.run().expect("run");
        assert_eq!(code, 0);

        let calls = h.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].len(), 2);
        assert_eq!(calls[1].len(), 4);

        let printed = String::from_utf8(h.out.0.borrow().clone()).expect("utf8");
        let observation = &calls[1][3];
        assert_eq!(observation.role, Role::User);
        assert_eq!(observation.content, printed);
        assert_eq!(calls[1][2], Message::new(Role::Assistant, "shell:ls".into()));

        // Terminating reply is recorded, nothing after it.
        let messages = h.agent.transcript().messages();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[4], Message::new(Role::Assistant, "exit:0".into()));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_printed_once_and_observed() {
        let replies = vec![ok("shell:  echo hi  "), ok("shell:true"), ok("exit:3")];
        let mut h = harness(replies, Box::new(AutoConfirm));

        assert_eq!(h.agent.run().expect("run"), 3);
        assert_eq!(h.out.0.borrow().as_slice(), b"hi\nNo output\n");

        let messages = h.agent.transcript().messages();
        assert_eq!(messages[3], Message::new(Role::User, "hi\n".into()));
        assert_eq!(messages[5], Message::new(Role::User, "No output\n".into()));
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_command_is_observed_not_fatal() {
        let replies = vec![ok("shell:echo oops; exit 4"), ok("exit:1")];
        let mut h = harness(replies, Box::new(AutoConfirm));

        assert_eq!(h.agent.run().expect("run"), 1);
        let observation = &h.agent.transcript().messages()[3].content;
        assert!(observation.starts_with("oops\nError: "), "{observation}");
    }

    #[test]
    fn test_invalid_reply_is_kept_in_history() {
        let mut h = harness(vec![ok("hello")], Box::new(AutoConfirm));

        match h.agent.run() {
            Err(AppError::InvalidResponse(content)) => assert_eq!(content, "hello"),
            other => panic!("unexpected result: {other:?}"),
        }

        let last = h.agent.transcript().messages().last().expect("last message");
        assert_eq!(last, &Message::new(Role::Assistant, "hello".into()));
        assert!(h.out.0.borrow().is_empty());
    }

    #[test]
    fn test_bad_exit_code() {
        let mut h = harness(vec![ok("exit: abc")], Box::new(AutoConfirm));

        assert!(matches!(
            h.agent.run(),
            Err(AppError::InvalidExitCode(code)) if code == "abc"
        ));
        assert_eq!(h.agent.transcript().messages().len(), 3);
    }

    #[test]
    fn test_declined_command_aborts() {
        let asked = Rc::new(RefCell::new(Vec::new()));
        let gate = ScriptedGate {
            answers: VecDeque::from([false]),
            asked: asked.clone(),
        };
        let mut h = harness(vec![ok("shell: touch never-created ")], Box::new(gate));

        assert!(matches!(h.agent.run(), Err(AppError::Aborted)));
        assert_eq!(asked.borrow().as_slice(), ["touch never-created".to_owned()]);
        assert_eq!(h.calls.borrow().len(), 1);
        assert!(h.out.0.borrow().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_approved_command_runs() {
        let asked = Rc::new(RefCell::new(Vec::new()));
        let gate = ScriptedGate {
            answers: VecDeque::from([true]),
            asked: asked.clone(),
        };
        let mut h = harness(vec![ok("shell:echo approved"), ok("exit:0")], Box::new(gate));

        assert_eq!(h.agent.run().expect("run"), 0);
        assert_eq!(asked.borrow().len(), 1);
        assert_eq!(h.out.0.borrow().as_slice(), b"approved\n");
    }

    #[test]
    fn test_model_error_is_fatal() {
        let mut h = harness(vec![Err(gpta_lib::Error::NoChoices)], Box::new(AutoConfirm));

        assert!(matches!(
            h.agent.run(),
            Err(AppError::Model(gpta_lib::Error::NoChoices))
        ));
        assert_eq!(h.agent.transcript().messages().len(), 2);
    }

    #[test]
    fn test_step_terminate() {
        let mut h = harness(vec![ok("exit:0")], Box::new(AutoConfirm));
        assert_eq!(h.agent.step().expect("step"), Step::Exit(0));
    }

    #[cfg(unix)]
    #[test]
    #[traced_test]
    fn test_commands_and_exit_code_are_logged() {
        let mut h = harness(vec![ok("shell:echo hi"), ok("exit:3")], Box::new(AutoConfirm));

        assert_eq!(h.agent.run().expect("run"), 3);
        assert!(logs_contain("Executing: echo hi"));
        assert!(logs_contain("Exiting with code: 3"));
    }

    #[test]
    #[traced_test]
    fn test_declined_command_is_not_logged_as_executed() {
        let gate = ScriptedGate {
            answers: VecDeque::from([false]),
            asked: Rc::new(RefCell::new(Vec::new())),
        };
        let mut h = harness(vec![ok("shell:rm -rf build")], Box::new(gate));

        assert!(matches!(h.agent.run(), Err(AppError::Aborted)));
        assert!(!logs_contain("Executing: rm -rf build"));
    }
}
