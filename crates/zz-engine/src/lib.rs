//! Web-view security engine facade and worker runtime.
//!
//! The engine resolves a per-origin [`zz_policy::SecurityPolicy`] from the
//! configured posture and emits declarative [`Action`]s for the embedding
//! host to run against its view. It never touches a view itself.

mod action;
mod capability;
mod engine;
mod worker;

pub use action::Action;
pub use action::LogLevel;
pub use capability::CapabilityDescriptor;
pub use engine::SecurityEngine;
pub use worker::EngineWorker;

pub use zz_core::ApiTier;
pub use zz_policy::SecurityLevel;
