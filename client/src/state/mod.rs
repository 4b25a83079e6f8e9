//! Client-side state modules.
//!
//! Plain data types and transitions; components hold them in signals.

pub mod assistant;
pub mod catalog;
pub mod contact;
pub mod message_queue;
pub mod presence;
pub mod settings;
pub mod toast;
pub mod ui;
