//! Coarse security posture knob.

/// Process-wide security posture, ordered from most permissive to most
/// restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SecurityLevel {
    #[default]
    Normal,
    Enhanced,
    Maximum,
}

impl SecurityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Enhanced => "ENHANCED",
            Self::Maximum => "MAXIMUM",
        }
    }
}
