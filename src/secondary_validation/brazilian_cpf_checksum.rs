use crate::error::ValidationError;
use crate::secondary_validation::{validate_mod11_document, Validator};

/// CPF (Cadastro de Pessoas Físicas): 11 digits, the last two being check digits.
pub struct BrazilianCpfChecksum;

const BRAZILIAN_CPF_FIRST_WEIGHTS: &[u32] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];
const BRAZILIAN_CPF_SECOND_WEIGHTS: &[u32] = &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

impl Validator for BrazilianCpfChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        validate_mod11_document(
            value,
            BRAZILIAN_CPF_FIRST_WEIGHTS,
            BRAZILIAN_CPF_SECOND_WEIGHTS,
        )
    }
}

/// Accepts punctuated (`529.982.247-25`) or bare (`52998224725`) CPFs.
pub fn is_valid_cpf(value: &str) -> bool {
    BrazilianCpfChecksum.is_valid(value)
}
