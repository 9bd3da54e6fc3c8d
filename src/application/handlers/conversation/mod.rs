//! Conversation command handlers.
//!
//! Handles sending messages to an intake session and resetting it.

mod reset_session;
mod send_message;

pub use reset_session::{ResetSessionCommand, ResetSessionHandler};
pub use send_message::{
    SendMessageCommand, SendMessageConfig, SendMessageError, SendMessageHandler,
    SendMessageResult, EMPTY_MESSAGE_REPLY,
};
