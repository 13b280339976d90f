//! Host-toolkit capability input.

use zz_core::ApiTier;

/// What the embedding host's web-view toolkit supports.
///
/// Computed by the host (feature probes are its job) and passed into every
/// `apply_security` call; the engine never probes the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityDescriptor {
    pub supports_csp_meta: bool,
    pub supports_requested_with_allow_list: bool,
    pub supports_suppress_error_page: bool,
    pub api_tier: ApiTier,
}

impl CapabilityDescriptor {
    /// Descriptor for a toolkit that supports everything at `tier`.
    pub fn full(tier: ApiTier) -> Self {
        Self {
            supports_csp_meta: true,
            supports_requested_with_allow_list: true,
            supports_suppress_error_page: true,
            api_tier: tier,
        }
    }

    /// Descriptor for a toolkit that supports nothing beyond its tier.
    pub fn bare(tier: ApiTier) -> Self {
        Self {
            supports_csp_meta: false,
            supports_requested_with_allow_list: false,
            supports_suppress_error_page: false,
            api_tier: tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CapabilityDescriptor;
    use zz_core::ApiTier;

    #[test]
    fn presets_cover_both_extremes() {
        let full = CapabilityDescriptor::full(ApiTier::Advanced);
        assert!(full.supports_csp_meta);
        assert!(full.supports_requested_with_allow_list);
        assert!(full.supports_suppress_error_page);

        let bare = CapabilityDescriptor::bare(ApiTier::Legacy);
        assert!(!bare.supports_csp_meta);
        assert_eq!(bare.api_tier, ApiTier::Legacy);
    }
}
