use crate::error::ConfigError;
use crate::rule::RuleName;
use serde::{Deserialize, Serialize};
use serde_with::formats::PreferMany;
use serde_with::{serde_as, OneOrMany};
use strum::IntoEnumIterator;

fn all_rules() -> Vec<RuleName> {
    RuleName::iter().collect()
}

/// Which rules a [RuleRegistry](crate::RuleRegistry) exposes.
///
/// A missing rule list enables every rule. A single rule name may be given
/// instead of a list.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RegistryConfig {
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default = "all_rules")]
    pub rules: Vec<RuleName>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { rules: all_rules() }
    }
}

impl RegistryConfig {
    /// A config with no rules, to be filled with [RegistryConfig::rule].
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn rule(&self, rule: RuleName) -> Self {
        self.mutate_clone(|x| x.rules.push(rule))
    }

    pub fn with_rules(&self, rules: &[RuleName]) -> Self {
        self.mutate_clone(|x| x.rules = rules.to_vec())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_have_default() {
        let config = RegistryConfig::default();
        assert_eq!(config.rules.len(), 8);
        assert_eq!(config.rules.first(), Some(&RuleName::Cpf));
    }

    #[test]
    fn missing_rules_enable_everything() {
        assert_eq!(
            RegistryConfig::from_json("{}").unwrap(),
            RegistryConfig::default()
        );
    }

    #[test]
    fn should_accept_a_single_rule_name() {
        let config = RegistryConfig::from_json(r#"{"rules": "currency"}"#).unwrap();
        assert_eq!(config.rules, vec![RuleName::Currency]);
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"rules":["currency"]}"#
        );
    }

    #[test]
    fn should_parse_rule_names() {
        let config = RegistryConfig::from_json(r#"{"rules": ["cpf", "pix_key"]}"#).unwrap();
        assert_eq!(config.rules, vec![RuleName::Cpf, RuleName::PixKey]);
    }

    #[test]
    fn should_reject_unknown_rule_names() {
        let err = RegistryConfig::from_json(r#"{"rules": ["iban"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }

    #[test]
    fn should_override_rules() {
        let config = RegistryConfig::empty()
            .rule(RuleName::Currency)
            .rule(RuleName::PhoneBr);
        assert_eq!(config.rules, vec![RuleName::Currency, RuleName::PhoneBr]);

        let config = config.with_rules(&[RuleName::Cnpj]);
        assert_eq!(config.rules, vec![RuleName::Cnpj]);
    }
}
