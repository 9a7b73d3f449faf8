#[cfg(test)]
#[path = "message_log_test.rs"]
mod tests;

use super::SessionError;
use super::Utterance;

/// Ordered, append-only record of a conversation. Insertion order is the
/// conversation order and is replayed verbatim into every request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    utterances: Vec<Utterance>,
}

impl MessageLog {
    pub fn append(&mut self, utterance: Utterance) -> Result<(), SessionError> {
        if utterance.text().is_empty() {
            return Err(SessionError::InvalidUtterance);
        }

        self.utterances.push(utterance);
        return Ok(());
    }

    /// Appends both halves of an exchange, or neither.
    pub fn append_exchange(
        &mut self,
        prompt: Utterance,
        reply: Utterance,
    ) -> Result<(), SessionError> {
        if prompt.text().is_empty() || reply.text().is_empty() {
            return Err(SessionError::InvalidUtterance);
        }

        self.append(prompt)?;
        self.append(reply)?;
        return Ok(());
    }

    pub fn snapshot(&self) -> &[Utterance] {
        return &self.utterances;
    }

    pub fn clear(&mut self) {
        self.utterances.clear();
    }

    pub fn len(&self) -> usize {
        return self.utterances.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.utterances.is_empty();
    }

    /// Plain text dump of the buffer, one `Human:`/`AI:` line per utterance.
    pub fn transcript(&self) -> String {
        return self
            .utterances
            .iter()
            .map(|utterance| {
                return format!(
                    "{}: {}",
                    utterance.speaker().transcript_prefix(),
                    utterance.text()
                );
            })
            .collect::<Vec<String>>()
            .join("\n");
    }
}
