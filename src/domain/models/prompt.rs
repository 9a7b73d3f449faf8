#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::SessionError;
use super::Speaker;
use super::Utterance;

/// Persona and behavioural rules for the interviewer. Every request starts
/// with this, and it can't be changed at runtime.
pub const INTERVIEWER_INSTRUCTION: &str = "As an interviewer conducting a brief interview, your goal is to comprehensively perform the role of an interviewer. \
Begin by requesting the user to introduce themselves. Subsequently, inquire about the domain or field in which they intend to undergo the interview. \
Proceed to engage the user in conversation by posing domain-specific interview questions. \
Throughout the conversation, pose only a single question at a time. Refrain from providing answers independently to any questions during the interview, \
and conclude the interview by offering feedback on the overall experience for the user.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl From<Speaker> for Role {
    fn from(speaker: Speaker) -> Role {
        match speaker {
            Speaker::User => return Role::User,
            Speaker::Assistant => return Role::Assistant,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: Role, content: &str) -> PromptMessage {
        return PromptMessage {
            role,
            content: content.to_string(),
        };
    }
}

/// Everything the completion service needs for one call: the system
/// instruction, the full prior history and the new input, in that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    messages: Vec<PromptMessage>,
}

impl Request {
    pub fn messages(&self) -> &[PromptMessage] {
        return &self.messages;
    }

    #[cfg(test)]
    pub fn system_instruction(&self) -> &str {
        return &self.messages[0].content;
    }

    /// Replayed history, excluding the leading system entry and the trailing
    /// new input.
    pub fn prior_turns(&self) -> &[PromptMessage] {
        return &self.messages[1..self.messages.len() - 1];
    }

    pub fn new_input(&self) -> &str {
        return &self.messages[self.messages.len() - 1].content;
    }
}

/// Builds the request for the next turn. The service is stateless per call,
/// so prior turns are replayed exactly as recorded, never reordered or
/// deduplicated.
pub fn compose(
    system_instruction: &str,
    prior_turns: &[Utterance],
    new_input: &str,
) -> Result<Request, SessionError> {
    if new_input.trim().is_empty() {
        return Err(SessionError::EmptyInput);
    }

    let mut messages = Vec::with_capacity(prior_turns.len() + 2);
    messages.push(PromptMessage::new(Role::System, system_instruction));
    messages.extend(prior_turns.iter().map(|utterance| {
        return PromptMessage::new(utterance.speaker().into(), utterance.text());
    }));
    messages.push(PromptMessage::new(Role::User, new_input));

    return Ok(Request { messages });
}
