//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and environment concerns from page and
//! component logic. Each keeps a pure core that tests drive without a DOM.

pub mod clock;
pub mod debounce;
pub mod message_display;
pub mod motion;
pub mod scroll;
pub mod share;
pub mod sound;
pub mod storage;
pub mod theme;
pub mod timer;
