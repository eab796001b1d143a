//! Domain layer containing the URL record entity and the store contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or HTTP code.
//! Repository traits are implemented in `crate::infrastructure::persistence`
//! and consumed by `crate::application::services`.

pub mod entities;
pub mod repositories;
