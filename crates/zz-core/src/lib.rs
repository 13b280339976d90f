//! Shared primitives used across ZikZak security crates.

use core::fmt;

/// Result alias used across the workspace.
pub type EngineResult<T> = Result<T, EngineError>;

/// Top-level error type for policy and payload synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub code: &'static str,
    pub message: String,
}

impl EngineError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for EngineError {}

/// Host-toolkit API generations the engine can target.
///
/// The embedding host classifies its web-view toolkit into one of three
/// tiers; the engine selects an enhancement branch per tier and never
/// probes the toolkit itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ApiTier {
    Legacy,
    Modern,
    Advanced,
}

impl ApiTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Modern => "modern",
            Self::Advanced => "advanced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiTier;
    use super::EngineError;

    #[test]
    fn error_display_includes_code_and_message() {
        let error = EngineError::new("engine.apply_failed", "synthesis failed");
        assert_eq!(error.to_string(), "engine.apply_failed: synthesis failed");
    }

    #[test]
    fn tier_order_matches_capability_progression() {
        assert!(ApiTier::Legacy < ApiTier::Modern);
        assert!(ApiTier::Modern < ApiTier::Advanced);
        assert_eq!(ApiTier::Advanced.as_str(), "advanced");
    }
}
