mod bank_account;
mod brazilian_cnpj_checksum;
mod brazilian_cpf_checksum;
mod brazilian_phone;
mod currency_code;
mod password_strength;
mod pix_key;

pub use crate::secondary_validation::bank_account::{
    is_valid_account_number, is_valid_agency_number, AccountNumber, AgencyNumber,
};
pub use crate::secondary_validation::brazilian_cnpj_checksum::{
    is_valid_cnpj, BrazilianCnpjChecksum,
};
pub use crate::secondary_validation::brazilian_cpf_checksum::{is_valid_cpf, BrazilianCpfChecksum};
pub use crate::secondary_validation::brazilian_phone::{is_valid_phone, BrazilianPhone};
pub(crate) use crate::secondary_validation::brazilian_phone::BRAZIL_COUNTRY_CODE;
pub use crate::secondary_validation::currency_code::{
    is_valid_currency, CurrencyCode, CurrencyCodeValidator,
};
pub use crate::secondary_validation::password_strength::{PasswordReport, PasswordStrength};
pub use crate::secondary_validation::pix_key::{PixKeyClassifier, PixKeyKind};

use crate::error::ValidationError;
use crate::normalization::{is_repeated_digit, normalize_digits};

pub trait Validator: Send + Sync {
    fn validate(&self, value: &str) -> Result<(), ValidationError>;

    fn is_valid(&self, value: &str) -> bool {
        self.validate(value).is_ok()
    }
}

/// Modulus-11 check digit over `digits`, weighted pairwise by `weights`.
///
/// A remainder below 2 gives `0`, otherwise the digit is `11 - remainder`.
#[inline]
fn mod11_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

/// Shared shape of the CPF and CNPJ checks: the last two digits are mod-11 check
/// digits of the digits before them. `first_weights` covers every digit but the
/// two check digits, `second_weights` additionally covers the first check digit.
fn validate_mod11_document(
    value: &str,
    first_weights: &[u32],
    second_weights: &[u32],
) -> Result<(), ValidationError> {
    let expected_length = second_weights.len() + 1;
    let normalized = normalize_digits(value);

    // The checksum is never computed on a malformed length
    if normalized.len() != expected_length {
        return Err(ValidationError::StructuralMismatch);
    }
    // Sequences such as 111.111.111-11 can pass the checksum but are never issued
    if is_repeated_digit(&normalized) {
        return Err(ValidationError::StructuralMismatch);
    }

    let digits: Vec<u32> = normalized.chars().filter_map(|c| c.to_digit(10)).collect();
    let body_length = first_weights.len();

    let first = mod11_check_digit(&digits[..body_length], first_weights);
    if first != digits[body_length] {
        return Err(ValidationError::ChecksumMismatch);
    }

    let second = mod11_check_digit(&digits[..=body_length], second_weights);
    if second != digits[body_length + 1] {
        return Err(ValidationError::ChecksumMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mod11_check_digit() {
        // 295 % 11 == 9
        assert_eq!(
            mod11_check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7], &[10, 9, 8, 7, 6, 5, 4, 3, 2]),
            2
        );
        // Remainders 0 and 1 both map to 0
        assert_eq!(mod11_check_digit(&[0, 0, 0], &[4, 3, 2]), 0);
        assert_eq!(mod11_check_digit(&[1, 0, 0, 0], &[12, 3, 2, 1]), 0);
    }

    #[test]
    fn validators_are_object_safe() {
        let validators: Vec<Box<dyn Validator>> = vec![
            Box::new(BrazilianCpfChecksum),
            Box::new(BrazilianCnpjChecksum),
            Box::new(BrazilianPhone),
        ];
        let accepted: Vec<bool> = validators
            .iter()
            .map(|v| v.is_valid("529.982.247-25"))
            .collect();
        // A CPF is also phone-shaped (11 digits)
        assert_eq!(accepted, vec![true, false, true]);
    }
}
