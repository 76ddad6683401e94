use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Stable names a field-validation engine uses to look rules up in a
/// [RuleRegistry](crate::RuleRegistry).
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleName {
    Cpf,
    Cnpj,
    PhoneBr,
    Currency,
    PasswordStrength,
    AccountNumber,
    AgencyNumber,
    PixKey,
}
