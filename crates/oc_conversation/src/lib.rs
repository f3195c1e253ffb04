//! The conversation store and session state machine.

pub mod conversation;
pub mod error;
pub mod export;
pub mod message;
pub mod session;

pub use conversation::Conversation;
pub use error::Error;
pub use message::{Role, Turn};
pub use session::{ApiKey, Session, SessionSnapshot};
