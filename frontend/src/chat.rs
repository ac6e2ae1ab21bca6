use crate::services::advice::AdviceError;

pub const NO_ADVICE_MESSAGE: &str = "No advice generated.";
pub const FAILURE_MESSAGE: &str = "Error connecting to the strategist. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Message history of the strategist widget plus the in-flight flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ChatLog {
    /// Appends the user turn and returns the prompt to send, or `None` when
    /// the prompt is blank or a request is already in flight.
    pub fn submit(&mut self, prompt: &str) -> Option<String> {
        if prompt.trim().is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            text: prompt.to_string(),
        });
        self.loading = true;
        Some(prompt.to_string())
    }

    pub fn resolve(&mut self, outcome: Result<Option<String>, AdviceError>) {
        let text = match outcome {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => NO_ADVICE_MESSAGE.to_string(),
            Err(_) => FAILURE_MESSAGE.to_string(),
        };
        self.messages.push(ChatMessage {
            role: Role::Model,
            text,
        });
        self.loading = false;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_prompt_is_ignored() {
        let mut log = ChatLog::default();
        assert_eq!(log.submit("   "), None);
        assert!(log.is_empty());
        assert!(!log.is_loading());
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let mut log = ChatLog::default();
        assert_eq!(log.submit("ROI?").as_deref(), Some("ROI?"));
        assert_eq!(log.submit("hello?"), None);
        assert_eq!(log.messages().len(), 1);
    }

    #[test]
    fn success_appends_text_verbatim() {
        let mut log = ChatLog::default();
        log.submit("How do I hedge FX risk?");
        log.resolve(Ok(Some("  Use forwards.\n".to_string())));
        assert_eq!(
            log.messages()[1],
            ChatMessage {
                role: Role::Model,
                text: "  Use forwards.\n".to_string()
            }
        );
        assert!(!log.is_loading());
    }

    #[test]
    fn failure_appends_fixed_message() {
        let mut log = ChatLog::default();
        log.submit("cashflow?");
        log.resolve(Err(AdviceError::Status(503)));
        assert_eq!(log.messages().len(), 2);
        assert_eq!(log.messages()[1].text, FAILURE_MESSAGE);
        assert!(!log.is_loading());
    }

    #[test]
    fn empty_answer_falls_back() {
        let mut log = ChatLog::default();
        log.submit("anything");
        log.resolve(Ok(Some(String::new())));
        log.submit("again");
        log.resolve(Ok(None));
        assert_eq!(log.messages()[1].text, NO_ADVICE_MESSAGE);
        assert_eq!(log.messages()[3].text, NO_ADVICE_MESSAGE);
    }
}
