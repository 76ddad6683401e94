use crate::error::ValidationError;
use crate::secondary_validation::Validator;
use regex::RegexSet;

// In UTF-8 bytes, not characters
const MIN_PASSWORD_LENGTH: usize = 8;

// Order matters, see `PasswordReport::from_matches`
const CHARACTER_CLASSES: &[&str] = &[r"\p{Lu}", r"\p{Ll}", r"\p{Nd}", r"[\p{P}\p{S}]"];

/// Character-class coverage of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordReport {
    pub long_enough: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl PasswordReport {
    pub fn is_strong(&self) -> bool {
        self.long_enough
            && self.has_uppercase
            && self.has_lowercase
            && self.has_digit
            && self.has_symbol
    }
}

/// Classifies passwords by Unicode general category: an upper-case letter,
/// a lower-case letter, a decimal digit and a punctuation or symbol character
/// are all required, on top of a minimum length.
pub struct PasswordStrength {
    classes: RegexSet,
}

impl PasswordStrength {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            classes: RegexSet::new(CHARACTER_CLASSES)?,
        })
    }

    pub fn report(&self, password: &str) -> PasswordReport {
        let long_enough = password.len() >= MIN_PASSWORD_LENGTH;
        let matches = self.classes.matches(password);
        PasswordReport {
            long_enough,
            has_uppercase: matches.matched(0),
            has_lowercase: matches.matched(1),
            has_digit: matches.matched(2),
            has_symbol: matches.matched(3),
        }
    }

    pub fn is_strong(&self, password: &str) -> bool {
        self.report(password).is_strong()
    }
}

impl Validator for PasswordStrength {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if self.is_strong(value) {
            Ok(())
        } else {
            Err(ValidationError::StructuralMismatch)
        }
    }
}
