//! Host-keyed policy storage with get-or-create semantics.

use crate::SecurityPolicy;
use std::collections::HashMap;

/// Maps host keys to their current [`SecurityPolicy`].
///
/// Owned by the engine's single worker; entries are created lazily on
/// first reference and live until the engine is disposed.
#[derive(Debug, Default)]
pub struct PolicyStore {
    policies: HashMap<String, SecurityPolicy>,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the policy for `host`, inserting defaults on first lookup.
    pub fn get_or_create(&mut self, host: &str) -> &mut SecurityPolicy {
        self.policies
            .entry(host.to_owned())
            .or_insert_with(SecurityPolicy::default)
    }

    pub fn get(&self, host: &str) -> Option<&SecurityPolicy> {
        self.policies.get(host)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
