//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ResetSessionCommand, ResetSessionHandler, SendMessageCommand, SendMessageConfig,
    SendMessageError, SendMessageHandler, SendMessageResult, EMPTY_MESSAGE_REPLY,
};
