//! Per-origin security policy model and posture resolution.

mod host;
mod level;
mod policy;
mod store;

pub use host::host_key;
pub use level::SecurityLevel;
pub use policy::SecurityPolicy;
pub use store::PolicyStore;
