//! Reducers split by concern.  Each `update` returns `true` when it handled
//! the message.

pub mod chat;
pub mod documents;
pub mod settings;
pub mod status;
pub mod upload;
