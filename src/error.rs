use crate::rule::RuleName;
use thiserror::Error;

/// Why a value was rejected by a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// Wrong length, wrong characters, or a shape the rule does not accept
    #[error("value does not have the expected structure")]
    StructuralMismatch,

    /// The value has the right shape but its check digits are wrong
    #[error("check digits do not match")]
    ChecksumMismatch,
}

impl ValidationError {
    /// Stable name used as a metric label
    pub fn as_label(&self) -> &'static str {
        match self {
            ValidationError::StructuralMismatch => "structural_mismatch",
            ValidationError::ChecksumMismatch => "checksum_mismatch",
        }
    }
}

/// Returned by the registry when a field value is checked against a named rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldValidationError {
    #[error("unknown validation rule '{0}'")]
    UnknownRule(String),

    #[error("validation rule '{0}' is not enabled in this registry")]
    RuleNotEnabled(RuleName),

    #[error("field failed rule '{rule}': {reason}")]
    Rejected {
        rule: RuleName,
        reason: ValidationError,
    },
}

#[derive(Debug, Error)]
pub enum CreateRegistryError {
    /// One of the built-in patterns failed to compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("rule '{0}' is configured more than once")]
    DuplicateRule(RuleName),

    #[error("a registry needs at least one rule")]
    NoRules,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid registry configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
