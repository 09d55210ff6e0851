//! # tabdeck-core - Core Domain Types
//!
//! Foundation crate for tabdeck. Provides error handling, logging setup,
//! the location codec, and the backend wire types.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Location Codec (`location`)
//! - [`Location`] - Structural location (ordered path segments)
//! - [`NativeLocation`] - History-style location (single `pathname`)
//! - [`PartialLocation`], [`NativeLocationDescriptor`] - Partial forms used by routes
//!
//! ### Wire Types (`types`)
//! - [`TabListItem`], [`PanelDescriptor`], [`FeatureFlags`], [`Animal`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tabdeck_core::prelude::*;
//! ```

pub mod error;
pub mod location;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use location::{Location, NativeLocation, NativeLocationDescriptor, PartialLocation};
pub use types::{Animal, FeatureFlags, PanelDescriptor, TabId, TabListItem};
