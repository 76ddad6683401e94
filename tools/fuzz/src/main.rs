use afl::fuzz;
use br_field_rules::{
    format_cnpj, format_cpf, format_phone, normalize_digits, sanitize_cnpj, sanitize_cpf,
    sanitize_phone, RegistryConfig, RuleName, RuleRegistry, Validator,
};
use rand::{rngs::StdRng, seq::IteratorRandom, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    // Built once, like a service would, and reused for every input
    let registry = std::panic::AssertUnwindSafe(build_registry());
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(&registry, data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let registry = build_registry();
    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&registry, &input);
}

fn build_registry() -> RuleRegistry {
    RuleRegistry::builder(&RegistryConfig::default())
        .build()
        .unwrap()
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(registry: &RuleRegistry, bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let mut rng = StdRng::seed_from_u64(rng_seed);
    let rule = RegistryConfig::default().rules.into_iter().choose(&mut rng)?;
    run_fuzz(registry, rule, input_str);

    Some(())
}

fn run_fuzz(registry: &RuleRegistry, rule: RuleName, input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Rule: {}", rule);
        println!("Input: {:?}", input);
    }

    let normalized = normalize_digits(input);
    assert_eq!(normalize_digits(&normalized), normalized);

    // Formatting never panics and is stable
    for (format, sanitize) in [
        (format_cpf as fn(&str) -> String, sanitize_cpf as fn(&str) -> String),
        (format_cnpj, sanitize_cnpj),
        (format_phone, sanitize_phone),
    ] {
        let formatted = format(input);
        assert_eq!(format(&formatted), formatted);
        assert_eq!(format(&sanitize(input)), formatted);
    }

    // The boolean and the detailed result always agree
    let validator = registry.get(rule.as_ref()).unwrap();
    assert_eq!(validator.is_valid(input), validator.validate(input).is_ok());

    let classified = registry.classify_pix_key(input);
    assert_eq!(
        classified.is_ok(),
        registry.is_valid("pix_key", input).unwrap()
    );
}
