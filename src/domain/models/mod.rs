mod action;
mod completion;
mod error;
mod event;
mod message_log;
#[cfg(test)]
pub mod mock;
pub mod prompt;
mod session_state;
mod slash_commands;
mod speaker;
mod utterance;

pub use action::*;
pub use completion::*;
pub use error::*;
pub use event::*;
pub use message_log::*;
pub use prompt::compose;
pub use prompt::Request;
pub use session_state::*;
pub use slash_commands::*;
pub use speaker::*;
pub use utterance::*;
