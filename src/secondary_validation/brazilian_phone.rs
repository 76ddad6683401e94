use crate::error::ValidationError;
use crate::normalization::normalize_digits;
use crate::secondary_validation::Validator;

/// Brazilian phone number, with or without the `55` country code.
///
/// Only the digit count (and the country code when present) is checked; area
/// codes are not.
pub struct BrazilianPhone;

pub(crate) const BRAZIL_COUNTRY_CODE: &str = "55";

impl Validator for BrazilianPhone {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let digits = normalize_digits(value);
        match digits.len() {
            // area code + 8 digit landline or 9 digit mobile
            10 | 11 => Ok(()),
            12 | 13 if digits.starts_with(BRAZIL_COUNTRY_CODE) => Ok(()),
            _ => Err(ValidationError::StructuralMismatch),
        }
    }
}

pub fn is_valid_phone(value: &str) -> bool {
    BrazilianPhone.is_valid(value)
}
