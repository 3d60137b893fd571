pub mod calculations;
pub mod gate;
pub mod models;
pub mod registry;
pub mod share;
pub mod store;
pub mod utils;

pub use gate::{AccessGate, GateState, GateView, UpsellPrompt};
pub use models::*;
pub use registry::{Registry, RegistryError};
pub use share::{Clipboard, ShareError, ShareParams, ShareState, ShareStatus};
pub use store::{FeatureFlags, FlagKey, FlagOverrides, PremiumStore, Session};
