//! Bearer-token authentication shared across the workspace.
//!
//! Provides JWT validation and the [`identity::Identity`] extractor, the
//! single authentication gate for protected routes.

pub mod identity;
pub mod token;
