//! Policy synthesis facade.

use crate::Action;
use crate::CapabilityDescriptor;
use crate::LogLevel;
use tracing::debug;
use zz_core::ApiTier;
use zz_policy::PolicyStore;
use zz_policy::SecurityLevel;
use zz_policy::host_key;
use zz_script::secure_cookie_script;
use zz_script::tracker_blocking_script;
use zz_trackers::TrackerSet;

/// View flags applied on legacy toolkits, in emission order.
const LEGACY_VIEW_FLAGS: &[(&str, bool)] = &[
    ("allowContentAccess", true),
    ("allowFileAccess", false),
    ("allowFileAccessFromFileURLs", false),
    ("allowUniversalAccessFromFileURLs", false),
];

/// Security policy engine for embedded web views.
///
/// Owns the tracker set and the per-host policy store. All methods expect
/// a single caller (the engine worker); [`crate::EngineWorker`] provides
/// the queued multi-caller front.
#[derive(Debug)]
pub struct SecurityEngine {
    enabled: bool,
    level: SecurityLevel,
    trackers: TrackerSet,
    store: PolicyStore,
}

impl Default for SecurityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SecurityEngine {
    /// Engine with enhancements disabled, posture `Normal`, and the
    /// default tracker list.
    pub fn new() -> Self {
        Self {
            enabled: false,
            level: SecurityLevel::Normal,
            trackers: TrackerSet::new(),
            store: PolicyStore::new(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        debug!(enabled, "security enhancements toggled");
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_level(&mut self, level: SecurityLevel) {
        self.level = level;
        debug!(level = level.as_str(), "security level set");
    }

    pub fn level(&self) -> SecurityLevel {
        self.level
    }

    pub fn add_blocked_tracker(&mut self, domain: &str) {
        self.trackers.add(domain);
    }

    pub fn remove_blocked_tracker(&mut self, domain: &str) {
        self.trackers.remove(domain);
    }

    pub fn blocked_trackers(&self) -> Vec<String> {
        self.trackers.snapshot()
    }

    /// Resolved policy for a host key, if one exists yet.
    pub fn policy_for(&self, host: &str) -> Option<&zz_policy::SecurityPolicy> {
        self.store.get(host)
    }

    /// Resolves the policy for `url` under the current posture and emits
    /// the ordered action list for the host to execute.
    ///
    /// Never fails: synthesis errors surface as error-level [`Action::Log`]
    /// entries and the affected emission is skipped.
    pub fn apply_security(&mut self, url: &str, capabilities: &CapabilityDescriptor) -> Vec<Action> {
        if !self.enabled {
            return Vec::new();
        }

        let host = host_key(url);
        let policy = self.store.get_or_create(&host);
        policy.fold(self.level, capabilities.api_tier);

        let enforce_strict_csp = policy.enforce_strict_csp;
        let csp = policy.security_headers.clone();

        let mut actions = Vec::new();
        match capabilities.api_tier {
            ApiTier::Advanced => {
                self.apply_advanced(url, &host, capabilities, enforce_strict_csp, csp, &mut actions)
            }
            ApiTier::Modern => self.apply_modern(url, capabilities, csp, &mut actions),
            ApiTier::Legacy => self.apply_legacy(url, &mut actions),
        }

        actions
    }

    fn apply_advanced(
        &self,
        url: &str,
        host: &str,
        capabilities: &CapabilityDescriptor,
        enforce_strict_csp: bool,
        csp: String,
        actions: &mut Vec<Action>,
    ) {
        if enforce_strict_csp && capabilities.supports_csp_meta {
            actions.push(Action::InjectCspMeta { csp });
        }

        if capabilities.supports_requested_with_allow_list && !host.is_empty() {
            actions.push(Action::Log {
                level: LogLevel::Debug,
                message: format!("X-Requested-With allow list for {host}: {url}, https://*.{host}"),
            });
        }

        // Substring blocking has nothing to anchor on without a host key.
        if self.level >= SecurityLevel::Enhanced && !host.is_empty() {
            match tracker_blocking_script(&self.trackers.snapshot()) {
                Ok(payload) => actions.push(Action::InjectScript { payload }),
                Err(error) => actions.push(synthesis_failure("tracker-blocking script", &error)),
            }
        }

        actions.push(applied_log("advanced", url));
    }

    fn apply_modern(
        &self,
        url: &str,
        capabilities: &CapabilityDescriptor,
        csp: String,
        actions: &mut Vec<Action>,
    ) {
        // Telemetry only; no action exists for error-page suppression yet.
        debug!(
            supported = capabilities.supports_suppress_error_page,
            "suppress-error-page probe"
        );

        actions.push(Action::InjectCspMeta { csp });
        actions.push(applied_log("modern", url));
    }

    fn apply_legacy(&self, url: &str, actions: &mut Vec<Action>) {
        for &(name, value) in LEGACY_VIEW_FLAGS {
            actions.push(Action::SetViewFlag { name, value });
        }

        actions.push(Action::InjectScript {
            payload: secure_cookie_script(),
        });
        actions.push(applied_log("legacy", url));
    }
}

fn applied_log(tier: &str, url: &str) -> Action {
    Action::Log {
        level: LogLevel::Info,
        message: format!("applied {tier} security enhancements to web view at {url}"),
    }
}

fn synthesis_failure(what: &str, error: &zz_core::EngineError) -> Action {
    Action::Log {
        level: LogLevel::Error,
        message: format!("skipped {what}: {error}"),
    }
}
