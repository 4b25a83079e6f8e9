//! Hard-coded site content.
//!
//! Projects, the author profile and contact channels are compiled into the
//! bundle. Pages read these tables directly; nothing is fetched.

pub mod profile;
pub mod projects;
