//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and interactive effects while reading and
//! writing shared state from Leptos context providers.

pub mod assistant;
pub mod footer;
pub mod header;
pub mod icons;
pub mod interactive_button;
pub mod layout;
pub mod liquid_blob;
pub mod mobile_menu;
pub mod project_card;
pub mod qr_code;
pub mod repulsive_particle;
pub mod social_presence;
pub mod toaster;
