//! Version-specific resource models.
//!
//! Models are organized by API version so that version-specific differences
//! in resource shape can live side by side:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v3/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! The latest version is re-exported at this module level:
//!
//! ```rust
//! use volttime_api::rest::resources::Site;      // latest version
//! use volttime_api::rest::resources::v3::Charger; // explicit version
//! ```

pub mod v3;

pub use v3::*;
