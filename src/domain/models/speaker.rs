use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Label shown above a chat bubble.
    pub fn display_name(&self) -> String {
        match self {
            Speaker::User => {
                let username = Config::get(ConfigKey::Username);
                if username.is_empty() {
                    return "You".to_string();
                }
                return username;
            }
            Speaker::Assistant => return "Interviewer".to_string(),
        }
    }

    /// Prefix used when dumping the conversation buffer.
    pub fn transcript_prefix(&self) -> &'static str {
        match self {
            Speaker::User => return "Human",
            Speaker::Assistant => return "AI",
        }
    }
}
