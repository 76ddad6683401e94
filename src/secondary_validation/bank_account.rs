use crate::error::ValidationError;
use crate::normalization::strip_separators;
use crate::secondary_validation::Validator;
use std::ops::RangeInclusive;

/// Bank account number: 5 to 12 digits, optionally written with a dash before
/// the check digit.
pub struct AccountNumber;

/// Bank agency (branch) number: 4 digits plus an optional check digit.
pub struct AgencyNumber;

const ACCOUNT_NUMBER_LENGTH: RangeInclusive<usize> = 5..=12;
const AGENCY_NUMBER_LENGTH: RangeInclusive<usize> = 4..=5;

fn validate_bank_number(
    value: &str,
    length: RangeInclusive<usize>,
) -> Result<(), ValidationError> {
    let stripped = strip_separators(value);
    if !stripped.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::StructuralMismatch);
    }
    // all ASCII at this point, so bytes == chars
    if !length.contains(&stripped.len()) {
        return Err(ValidationError::StructuralMismatch);
    }
    Ok(())
}

impl Validator for AccountNumber {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        validate_bank_number(value, ACCOUNT_NUMBER_LENGTH)
    }
}

impl Validator for AgencyNumber {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        validate_bank_number(value, AGENCY_NUMBER_LENGTH)
    }
}

pub fn is_valid_account_number(value: &str) -> bool {
    AccountNumber.is_valid(value)
}

pub fn is_valid_agency_number(value: &str) -> bool {
    AgencyNumber.is_valid(value)
}
