use crate::error::ValidationError;
use crate::secondary_validation::Validator;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// ISO 4217 codes accepted by the `currency` rule.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CurrencyCode {
    Brl,
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cny,
    Ars,
    Clp,
    Cop,
    Mxn,
    Pen,
    Uyu,
}

pub struct CurrencyCodeValidator;

impl Validator for CurrencyCodeValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        CurrencyCode::from_str(&value.to_uppercase())
            .map(|_| ())
            .map_err(|_| ValidationError::StructuralMismatch)
    }
}

/// Case-insensitive: `brl` and `BRL` are both accepted. Upper-casing is
/// Unicode-aware, so `uſd` (long s) is read as `USD`.
pub fn is_valid_currency(value: &str) -> bool {
    CurrencyCodeValidator.is_valid(value)
}
