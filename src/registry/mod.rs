mod rule_metrics;

use crate::config::RegistryConfig;
use crate::error::{CreateRegistryError, FieldValidationError, ValidationError};
use crate::observability::labels::Labels;
use crate::registry::rule_metrics::RuleMetrics;
use crate::rule::RuleName;
use crate::secondary_validation::{
    AccountNumber, AgencyNumber, BrazilianCnpjChecksum, BrazilianCpfChecksum, BrazilianPhone,
    CurrencyCodeValidator, PasswordStrength, PixKeyClassifier, PixKeyKind, Validator,
};
use crate::stats::GLOBAL_STATS;
use ahash::AHashMap;
use std::str::FromStr;
use std::sync::Arc;

struct RegisteredRule {
    validator: Arc<dyn Validator>,
    metrics: RuleMetrics,
}

/// Named validation rules, looked up by a field-validation engine.
///
/// A registry is built once (every pattern is compiled at that point) and is
/// read-only afterwards, so it can be shared between threads behind an `Arc`
/// without any locking.
pub struct RuleRegistry {
    rules: AHashMap<RuleName, RegisteredRule>,
    // Enabled rules, in canonical order
    rule_names: Vec<RuleName>,
    pix_key_classifier: Option<Arc<PixKeyClassifier>>,
}

impl RuleRegistry {
    pub fn builder(config: &RegistryConfig) -> RuleRegistryBuilder<'_> {
        RuleRegistryBuilder::new(config)
    }

    /// The validator registered under `name`, if it is known and enabled.
    pub fn get(&self, name: &str) -> Option<&dyn Validator> {
        let rule = RuleName::from_str(name).ok()?;
        self.rules.get(&rule).map(|x| x.validator.as_ref())
    }

    /// Check `value` against the rule called `name`.
    pub fn validate(&self, name: &str, value: &str) -> Result<(), FieldValidationError> {
        let rule = RuleName::from_str(name)
            .map_err(|_| FieldValidationError::UnknownRule(name.to_owned()))?;
        self.validate_rule(rule, value)
    }

    pub fn validate_rule(&self, rule: RuleName, value: &str) -> Result<(), FieldValidationError> {
        let registered = self
            .rules
            .get(&rule)
            .ok_or(FieldValidationError::RuleNotEnabled(rule))?;

        registered.metrics.evaluations.increment(1);
        registered.validator.validate(value).map_err(|reason| {
            registered.metrics.rejections(reason).increment(1);
            FieldValidationError::Rejected { rule, reason }
        })
    }

    /// Like [RuleRegistry::validate], but a rejected value is `Ok(false)`.
    /// Unknown or disabled rules are still errors.
    pub fn is_valid(&self, name: &str, value: &str) -> Result<bool, FieldValidationError> {
        match self.validate(name, value) {
            Ok(()) => Ok(true),
            Err(FieldValidationError::Rejected { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Check `value` against a comma-separated list of rule names, such as
    /// `"cpf,pix_key"`. Rules are checked in order and the first failure is
    /// returned. Blank entries are ignored.
    pub fn validate_tag(&self, tag: &str, value: &str) -> Result<(), FieldValidationError> {
        for name in tag.split(',').map(str::trim).filter(|x| !x.is_empty()) {
            self.validate(name, value)?;
        }
        Ok(())
    }

    /// The kind of PIX key `key` is. This counts as an evaluation of the
    /// `pix_key` rule.
    pub fn classify_pix_key(&self, key: &str) -> Result<PixKeyKind, FieldValidationError> {
        let rule = RuleName::PixKey;
        let (Some(classifier), Some(registered)) =
            (self.pix_key_classifier.as_ref(), self.rules.get(&rule))
        else {
            return Err(FieldValidationError::RuleNotEnabled(rule));
        };

        registered.metrics.evaluations.increment(1);
        classifier.classify(key).ok_or_else(|| {
            let reason = ValidationError::StructuralMismatch;
            registered.metrics.rejections(reason).increment(1);
            FieldValidationError::Rejected { rule, reason }
        })
    }

    pub fn rule_names(&self) -> impl Iterator<Item = RuleName> + '_ {
        self.rule_names.iter().copied()
    }
}

pub struct RuleRegistryBuilder<'a> {
    config: &'a RegistryConfig,
    labels: Labels,
}

impl RuleRegistryBuilder<'_> {
    pub fn new(config: &RegistryConfig) -> RuleRegistryBuilder<'_> {
        RuleRegistryBuilder {
            config,
            labels: Labels::empty(),
        }
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> Result<RuleRegistry, CreateRegistryError> {
        if self.config.rules.is_empty() {
            return Err(CreateRegistryError::NoRules);
        }

        let mut rules = AHashMap::new();
        let mut pix_key_classifier = None;

        for rule in self.config.rules.iter().copied() {
            if rules.contains_key(&rule) {
                return Err(CreateRegistryError::DuplicateRule(rule));
            }

            let validator: Arc<dyn Validator> = match rule {
                RuleName::Cpf => Arc::new(BrazilianCpfChecksum),
                RuleName::Cnpj => Arc::new(BrazilianCnpjChecksum),
                RuleName::PhoneBr => Arc::new(BrazilianPhone),
                RuleName::Currency => Arc::new(CurrencyCodeValidator),
                RuleName::PasswordStrength => Arc::new(PasswordStrength::new()?),
                RuleName::AccountNumber => Arc::new(AccountNumber),
                RuleName::AgencyNumber => Arc::new(AgencyNumber),
                RuleName::PixKey => {
                    let classifier = Arc::new(PixKeyClassifier::new()?);
                    pix_key_classifier = Some(Arc::clone(&classifier));
                    classifier
                }
            };

            let rule_labels = self.labels.clone_with_labels(&[("rule", rule.to_string())]);
            rules.insert(
                rule,
                RegisteredRule {
                    validator,
                    metrics: RuleMetrics::new(&rule_labels),
                },
            );
        }

        let mut rule_names: Vec<RuleName> = rules.keys().copied().collect();
        rule_names.sort();

        GLOBAL_STATS.registry_creations.increment(1);
        GLOBAL_STATS
            .number_of_rules_per_registry
            .record(rule_names.len() as f64);

        Ok(RuleRegistry {
            rules,
            rule_names,
            pix_key_classifier,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    fn full_registry() -> RuleRegistry {
        RuleRegistry::builder(&RegistryConfig::default())
            .build()
            .unwrap()
    }

    #[test]
    fn test_every_rule_by_name() {
        let registry = full_registry();
        let test_cases = vec![
            ("cpf", "52998224725", "12345678901"),
            ("cnpj", "11222333000181", "12345678000199"),
            ("phone_br", "11999887766", "123"),
            ("currency", "BRL", "XXX"),
            ("password_strength", "Password1!", "weak"),
            ("account_number", "12345678", "123"),
            ("agency_number", "1234", "12"),
            ("pix_key", "user@example.com", "invalid"),
        ];
        for (name, valid, invalid) in test_cases {
            assert_eq!(registry.is_valid(name, valid), Ok(true), "{name}");
            assert_eq!(registry.is_valid(name, invalid), Ok(false), "{name}");
            assert!(registry.get(name).unwrap().is_valid(valid));
        }
    }

    #[test]
    fn unknown_rules_are_errors() {
        let registry = full_registry();
        assert!(registry.get("iban").is_none());
        assert_eq!(
            registry.validate("iban", "anything"),
            Err(FieldValidationError::UnknownRule("iban".to_string()))
        );
    }

    #[test]
    fn disabled_rules_are_errors() {
        let config = RegistryConfig::empty().rule(RuleName::Cpf);
        let registry = RuleRegistry::builder(&config).build().unwrap();

        assert!(registry.get("cnpj").is_none());
        assert_eq!(
            registry.is_valid("cnpj", "11222333000181"),
            Err(FieldValidationError::RuleNotEnabled(RuleName::Cnpj))
        );
        assert_eq!(
            registry.classify_pix_key("52998224725"),
            Err(FieldValidationError::RuleNotEnabled(RuleName::PixKey))
        );
        assert_eq!(registry.rule_names().collect::<Vec<_>>(), vec![RuleName::Cpf]);
    }

    #[test]
    fn rejections_carry_rule_and_reason() {
        let registry = full_registry();
        assert_eq!(
            registry.validate("cpf", "529.982.247-26"),
            Err(FieldValidationError::Rejected {
                rule: RuleName::Cpf,
                reason: ValidationError::ChecksumMismatch,
            })
        );
        assert_eq!(
            registry.validate("cnpj", "123"),
            Err(FieldValidationError::Rejected {
                rule: RuleName::Cnpj,
                reason: ValidationError::StructuralMismatch,
            })
        );
    }

    #[test]
    fn test_validate_tag() {
        let registry = full_registry();
        assert_eq!(registry.validate_tag("cpf,pix_key", "529.982.247-25"), Ok(()));
        assert_eq!(registry.validate_tag(" phone_br , pix_key ,", "11999887766"), Ok(()));
        assert_eq!(registry.validate_tag("", "anything"), Ok(()));
        assert_eq!(
            registry.validate_tag("pix_key,cpf", "11999887766"),
            Err(FieldValidationError::Rejected {
                rule: RuleName::Cpf,
                reason: ValidationError::ChecksumMismatch,
            })
        );
        assert_eq!(
            registry.validate_tag("cpf,nope", "52998224725"),
            Err(FieldValidationError::UnknownRule("nope".to_string()))
        );
    }

    #[test]
    fn test_classify_pix_key() {
        let registry = full_registry();
        assert_eq!(registry.classify_pix_key("52998224725"), Ok(PixKeyKind::Cpf));
        assert_eq!(
            registry.classify_pix_key("123e4567-e89b-12d3-a456-426614174000"),
            Ok(PixKeyKind::Random)
        );
        assert_eq!(
            registry.classify_pix_key("not a key"),
            Err(FieldValidationError::Rejected {
                rule: RuleName::PixKey,
                reason: ValidationError::StructuralMismatch,
            })
        );
    }

    #[test]
    fn should_reject_bad_configs() {
        let empty = RegistryConfig::empty();
        assert!(matches!(
            RuleRegistry::builder(&empty).build(),
            Err(CreateRegistryError::NoRules)
        ));

        let duplicated = RegistryConfig::empty()
            .rule(RuleName::Currency)
            .rule(RuleName::Currency);
        assert!(matches!(
            RuleRegistry::builder(&duplicated).build(),
            Err(CreateRegistryError::DuplicateRule(RuleName::Currency))
        ));
    }

    #[test]
    fn rule_names_are_in_canonical_order() {
        let config = RegistryConfig::empty()
            .rule(RuleName::PixKey)
            .rule(RuleName::Currency)
            .rule(RuleName::Cpf);
        let registry = RuleRegistry::builder(&config).build().unwrap();
        assert_eq!(
            registry.rule_names().collect::<Vec<_>>(),
            vec![RuleName::Cpf, RuleName::Currency, RuleName::PixKey]
        );
    }

    #[test]
    fn should_submit_validation_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let config = RegistryConfig::empty().rule(RuleName::Cpf);
            let registry = RuleRegistry::builder(&config)
                .labels(Labels::new(&[("service", "onboarding")]))
                .build()
                .unwrap();

            let _ = registry.validate("cpf", "52998224725");
            let _ = registry.validate("cpf", "52998224726");
            let _ = registry.validate("cpf", "123");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let base_labels = vec![Label::new("service", "onboarding"), Label::new("rule", "cpf")];
        let evaluations = snapshot
            .get(&CompositeKey::new(
                Counter,
                Key::from_parts("validation.evaluations", base_labels.clone()),
            ))
            .expect("metric not found");
        assert_eq!(evaluations, &(None, None, DebugValue::Counter(3)));

        for (reason, count) in [("checksum_mismatch", 1), ("structural_mismatch", 1)] {
            let mut labels = base_labels.clone();
            labels.push(Label::new("reason", reason));
            let rejections = snapshot
                .get(&CompositeKey::new(
                    Counter,
                    Key::from_parts("validation.rejections", labels),
                ))
                .expect("metric not found");
            assert_eq!(rejections, &(None, None, DebugValue::Counter(count)));
        }
    }
}
