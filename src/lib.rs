// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod config;
mod error;
mod format;
mod normalization;
mod observability;
mod registry;
mod rule;
mod secondary_validation;
mod stats;

// This is the public API of the validation rules library
pub use config::RegistryConfig;
pub use error::{ConfigError, CreateRegistryError, FieldValidationError, ValidationError};
pub use format::{
    format_cnpj, format_cpf, format_phone, sanitize_cnpj, sanitize_cpf, sanitize_phone,
    try_format_cnpj, try_format_cpf, try_format_phone,
};
pub use normalization::{is_repeated_digit, normalize_digits, strip_separators};
pub use observability::labels::Labels;
pub use registry::{RuleRegistry, RuleRegistryBuilder};
pub use rule::RuleName;
pub use secondary_validation::{
    is_valid_account_number, is_valid_agency_number, is_valid_cnpj, is_valid_cpf,
    is_valid_currency, is_valid_phone, AccountNumber, AgencyNumber, BrazilianCnpjChecksum,
    BrazilianCpfChecksum, BrazilianPhone, CurrencyCode, CurrencyCodeValidator, PasswordReport,
    PasswordStrength, PixKeyClassifier, PixKeyKind, Validator,
};
