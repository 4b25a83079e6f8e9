//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (filters, form drafts, selected
//! gallery image) and delegates rendering details to `components`.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod project_detail;
pub mod projects;
