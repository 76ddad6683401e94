use lazy_static::lazy_static;
use metrics::{counter, histogram, Counter, Histogram};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub registry_creations: Counter,

    // The number of rules enabled in a registry
    pub number_of_rules_per_registry: Histogram,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            registry_creations: counter!("registry.creations"),
            number_of_rules_per_registry: histogram!("registry.num_rules"),
        }
    }
}
