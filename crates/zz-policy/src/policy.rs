//! Security policy record and posture folding.

use crate::SecurityLevel;
use zz_core::ApiTier;

const DEFAULT_CSP: &str =
    "default-src 'self'; script-src 'self' 'unsafe-inline'; object-src 'none';";

const NORMAL_CSP: &str = "default-src * 'unsafe-inline' 'unsafe-eval'; \
     script-src * 'unsafe-inline' 'unsafe-eval';";

const ENHANCED_CSP: &str = "default-src 'self' https:; \
     script-src 'self' 'unsafe-inline' https:; \
     object-src 'none'; frame-ancestors 'self';";

const MAXIMUM_CSP: &str = "default-src 'self'; script-src 'self'; object-src 'none'; \
     base-uri 'none'; frame-ancestors 'self'; form-action 'self';";

/// Effective security controls for one origin.
///
/// The booleans and `security_headers` are overwritten together by
/// [`SecurityPolicy::fold`]; `enforce_https`, `block_third_party_requests`
/// and `reduce_fingerprinting` are resolved but carried for future use
/// (no action is emitted for them yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityPolicy {
    pub block_third_party_requests: bool,
    pub enforce_https: bool,
    pub block_trackers: bool,
    pub enforce_strict_csp: bool,
    pub reduce_fingerprinting: bool,
    pub security_headers: String,
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self {
            block_third_party_requests: false,
            enforce_https: false,
            block_trackers: false,
            enforce_strict_csp: false,
            reduce_fingerprinting: false,
            security_headers: DEFAULT_CSP.to_owned(),
        }
    }
}

impl SecurityPolicy {
    /// Overwrites all six fields from the posture level, then clamps
    /// strict-CSP and fingerprinting reduction down on legacy toolkits
    /// unless the level is `Maximum`.
    ///
    /// Idempotent under repeated application with the same inputs.
    pub fn fold(&mut self, level: SecurityLevel, tier: ApiTier) {
        match level {
            SecurityLevel::Maximum => {
                self.block_third_party_requests = true;
                self.enforce_https = true;
                self.block_trackers = true;
                self.enforce_strict_csp = true;
                self.reduce_fingerprinting = true;
                self.security_headers = MAXIMUM_CSP.to_owned();
            }
            SecurityLevel::Enhanced => {
                self.block_third_party_requests = false;
                self.enforce_https = true;
                self.block_trackers = true;
                self.enforce_strict_csp = true;
                self.reduce_fingerprinting = false;
                self.security_headers = ENHANCED_CSP.to_owned();
            }
            SecurityLevel::Normal => {
                self.block_third_party_requests = false;
                self.enforce_https = false;
                self.block_trackers = false;
                self.enforce_strict_csp = false;
                self.reduce_fingerprinting = false;
                self.security_headers = NORMAL_CSP.to_owned();
            }
        }

        if tier == ApiTier::Legacy {
            self.enforce_strict_csp = self.enforce_strict_csp && level == SecurityLevel::Maximum;
            self.reduce_fingerprinting =
                self.reduce_fingerprinting && level == SecurityLevel::Maximum;
        }
    }

    /// The CSP header value for this policy.
    ///
    /// Returned verbatim; the stored string is authoritative today, a
    /// future revision may synthesize it from the booleans.
    pub fn csp_header(&self) -> &str {
        &self.security_headers
    }
}

#[cfg(test)]
mod tests {
    use super::SecurityPolicy;
    use crate::SecurityLevel;
    use zz_core::ApiTier;

    #[test]
    fn default_policy_is_all_off_with_baseline_csp() {
        let policy = SecurityPolicy::default();
        assert!(!policy.block_third_party_requests);
        assert!(!policy.enforce_https);
        assert!(!policy.block_trackers);
        assert!(!policy.enforce_strict_csp);
        assert!(!policy.reduce_fingerprinting);
        assert_eq!(
            policy.csp_header(),
            "default-src 'self'; script-src 'self' 'unsafe-inline'; object-src 'none';"
        );
    }

    #[test]
    fn maximum_enables_everything_on_every_tier() {
        for tier in [ApiTier::Legacy, ApiTier::Modern, ApiTier::Advanced] {
            let mut policy = SecurityPolicy::default();
            policy.fold(SecurityLevel::Maximum, tier);
            assert!(policy.block_third_party_requests, "tier {tier:?}");
            assert!(policy.enforce_https, "tier {tier:?}");
            assert!(policy.block_trackers, "tier {tier:?}");
            assert!(policy.enforce_strict_csp, "tier {tier:?}");
            assert!(policy.reduce_fingerprinting, "tier {tier:?}");
            assert_eq!(
                policy.csp_header(),
                "default-src 'self'; script-src 'self'; object-src 'none'; \
                 base-uri 'none'; frame-ancestors 'self'; form-action 'self';"
            );
        }
    }

    #[test]
    fn enhanced_keeps_strict_csp_on_modern_tiers() {
        let mut policy = SecurityPolicy::default();
        policy.fold(SecurityLevel::Enhanced, ApiTier::Advanced);
        assert!(!policy.block_third_party_requests);
        assert!(policy.enforce_https);
        assert!(policy.block_trackers);
        assert!(policy.enforce_strict_csp);
        assert!(!policy.reduce_fingerprinting);
        assert_eq!(
            policy.csp_header(),
            "default-src 'self' https:; script-src 'self' 'unsafe-inline' https:; \
             object-src 'none'; frame-ancestors 'self';"
        );
    }

    #[test]
    fn enhanced_is_clamped_on_legacy_tier() {
        let mut policy = SecurityPolicy::default();
        policy.fold(SecurityLevel::Enhanced, ApiTier::Legacy);
        assert!(!policy.enforce_strict_csp);
        assert!(!policy.reduce_fingerprinting);
        assert!(policy.enforce_https);
        assert!(policy.block_trackers);
    }

    #[test]
    fn normal_disables_everything_and_relaxes_csp() {
        let mut policy = SecurityPolicy::default();
        policy.fold(SecurityLevel::Maximum, ApiTier::Advanced);
        policy.fold(SecurityLevel::Normal, ApiTier::Advanced);
        assert!(!policy.enforce_strict_csp);
        assert_eq!(
            policy.csp_header(),
            "default-src * 'unsafe-inline' 'unsafe-eval'; \
             script-src * 'unsafe-inline' 'unsafe-eval';"
        );
    }

    #[test]
    fn fold_is_idempotent() {
        for level in [
            SecurityLevel::Normal,
            SecurityLevel::Enhanced,
            SecurityLevel::Maximum,
        ] {
            for tier in [ApiTier::Legacy, ApiTier::Modern, ApiTier::Advanced] {
                let mut once = SecurityPolicy::default();
                once.fold(level, tier);
                let mut twice = once.clone();
                twice.fold(level, tier);
                assert_eq!(once, twice, "level {level:?}, tier {tier:?}");
            }
        }
    }
}
