use crate::error::ValidationError;
use crate::secondary_validation::{
    BrazilianCnpjChecksum, BrazilianCpfChecksum, BrazilianPhone, Validator,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$";
// Random keys (EVP) are UUIDs in their canonical 8-4-4-4-12 form
const RANDOM_KEY_PATTERN: &str =
    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";

/// The five shapes a PIX key can take. Payments are routed differently
/// depending on the kind.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PixKeyKind {
    Cpf,
    Cnpj,
    Email,
    Phone,
    Random,
}

struct PatternShape {
    regex: Regex,
}

impl Validator for PatternShape {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if self.regex.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::StructuralMismatch)
        }
    }
}

/// Recognizes PIX keys by trying each kind in a fixed order, the first
/// match wins.
///
/// A string can fit more than one shape: a valid CPF is also 11 digits long,
/// which is a valid phone number. The order below resolves these in favor of
/// the document kinds.
pub struct PixKeyClassifier {
    kinds: Vec<(PixKeyKind, Box<dyn Validator>)>,
}

impl PixKeyClassifier {
    pub fn new() -> Result<Self, regex::Error> {
        let email = PatternShape {
            regex: Regex::new(EMAIL_PATTERN)?,
        };
        let random = PatternShape {
            regex: Regex::new(RANDOM_KEY_PATTERN)?,
        };

        let kinds: Vec<(PixKeyKind, Box<dyn Validator>)> = vec![
            (PixKeyKind::Cpf, Box::new(BrazilianCpfChecksum) as Box<dyn Validator>),
            (PixKeyKind::Cnpj, Box::new(BrazilianCnpjChecksum) as Box<dyn Validator>),
            (PixKeyKind::Email, Box::new(email) as Box<dyn Validator>),
            (PixKeyKind::Phone, Box::new(BrazilianPhone) as Box<dyn Validator>),
            (PixKeyKind::Random, Box::new(random) as Box<dyn Validator>),
        ];
        Ok(Self { kinds })
    }

    /// The kind of `key`, or `None` if it fits none of them.
    pub fn classify(&self, key: &str) -> Option<PixKeyKind> {
        self.kinds
            .iter()
            .find(|(_, validator)| validator.is_valid(key))
            .map(|(kind, _)| *kind)
    }

    /// Kinds in the order they are tried.
    pub fn precedence(&self) -> impl Iterator<Item = PixKeyKind> + '_ {
        self.kinds.iter().map(|(kind, _)| *kind)
    }
}

impl Validator for PixKeyClassifier {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        match self.classify(value) {
            Some(_) => Ok(()),
            None => Err(ValidationError::StructuralMismatch),
        }
    }
}
