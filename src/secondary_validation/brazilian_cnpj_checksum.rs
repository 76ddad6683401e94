use crate::error::ValidationError;
use crate::secondary_validation::{validate_mod11_document, Validator};

/// CNPJ (Cadastro Nacional da Pessoa Jurídica): 14 digits, `XX.XXX.XXX/YYYY-ZZ`
/// once punctuated, where `ZZ` are the check digits.
pub struct BrazilianCnpjChecksum;

const BRAZILIAN_CNPJ_FIRST_WEIGHTS: &[u32] = &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const BRAZILIAN_CNPJ_SECOND_WEIGHTS: &[u32] = &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

impl Validator for BrazilianCnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        validate_mod11_document(
            value,
            BRAZILIAN_CNPJ_FIRST_WEIGHTS,
            BRAZILIAN_CNPJ_SECOND_WEIGHTS,
        )
    }
}

pub fn is_valid_cnpj(value: &str) -> bool {
    BrazilianCnpjChecksum.is_valid(value)
}
