//! Blocked-tracker bookkeeping.

const DEFAULT_TRACKERS: &[&str] = &[
    "google-analytics.com",
    "doubleclick.net",
    "facebook.net",
    "facebook.com/tr",
    "twitter.com/i/jot",
    "adnxs.com",
];

/// Mutable set of host substrings the engine blocks outbound requests to.
///
/// Entries keep insertion order so emitted payloads are deterministic.
/// Matching is plain substring containment against the requested URL; an
/// entry may therefore carry a path suffix (`facebook.com/tr`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSet {
    domains: Vec<String>,
}

impl Default for TrackerSet {
    fn default() -> Self {
        Self {
            domains: DEFAULT_TRACKERS.iter().map(|d| (*d).to_owned()).collect(),
        }
    }
}

impl TrackerSet {
    /// Seeded with the default tracker list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            domains: Vec::new(),
        }
    }

    /// Adds a tracker substring. Blank input and duplicates are ignored
    /// silently; caller state stays valid either way.
    pub fn add(&mut self, domain: &str) {
        if domain.trim().is_empty() {
            return;
        }

        if self.domains.iter().any(|existing| existing == domain) {
            return;
        }

        self.domains.push(domain.to_owned());
    }

    /// Removes a tracker substring; absent entries are a no-op.
    pub fn remove(&mut self, domain: &str) {
        self.domains.retain(|existing| existing != domain);
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains.iter().any(|existing| existing == domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Owned copy of the current entries, in insertion order.
    pub fn snapshot(&self) -> Vec<String> {
        self.domains.clone()
    }
}
