//! Session stores.
//!
//! Both stores are plain owned values. They are created once at the
//! application root (see [`Session`]) and handed to whatever needs them by
//! reference, so each test can build its own isolated instance.

pub mod flags;
pub mod premium;
mod session;

pub use flags::{DEFAULT_VISIBILITY, FeatureFlags, FlagKey, FlagOverrides};
pub use premium::PremiumStore;
pub use session::Session;
