//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod conversation;

pub use conversation::{
    ResetSessionCommand, ResetSessionHandler, SendMessageCommand, SendMessageConfig,
    SendMessageError, SendMessageHandler, SendMessageResult, EMPTY_MESSAGE_REPLY,
};
