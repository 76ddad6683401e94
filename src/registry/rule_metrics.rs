use crate::error::ValidationError;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub struct RuleMetrics {
    pub evaluations: Counter,
    pub structural_rejections: Counter,
    pub checksum_rejections: Counter,
}

const REASON: &str = "reason";

impl RuleMetrics {
    pub fn new(labels: &Labels) -> Self {
        RuleMetrics {
            evaluations: counter!("validation.evaluations", labels.clone()),
            structural_rejections: counter!(
                "validation.rejections",
                labels.clone_with_labels(&[(
                    REASON,
                    ValidationError::StructuralMismatch.as_label()
                )])
            ),
            checksum_rejections: counter!(
                "validation.rejections",
                labels.clone_with_labels(&[(REASON, ValidationError::ChecksumMismatch.as_label())])
            ),
        }
    }

    pub fn rejections(&self, reason: ValidationError) -> &Counter {
        match reason {
            ValidationError::StructuralMismatch => &self.structural_rejections,
            ValidationError::ChecksumMismatch => &self.checksum_rejections,
        }
    }
}
