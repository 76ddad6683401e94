//! Display formatting for documents and phone numbers.
//!
//! The `format_*` functions are tolerant: when the input does not have the
//! right number of digits they return the digits unformatted instead of
//! failing. A passthrough result must not be read as "valid". The `try_format_*`
//! variants return `None` in that case instead.

use crate::normalization::normalize_digits;
use crate::secondary_validation::BRAZIL_COUNTRY_CODE;

const CPF_DIGIT_COUNT: usize = 11;
const CNPJ_DIGIT_COUNT: usize = 14;

/// `52998224725` -> `529.982.247-25`
pub fn format_cpf(cpf: &str) -> String {
    let digits = normalize_digits(cpf);
    try_format_normalized_cpf(&digits).unwrap_or(digits)
}

/// `11222333000181` -> `11.222.333/0001-81`
pub fn format_cnpj(cnpj: &str) -> String {
    let digits = normalize_digits(cnpj);
    try_format_normalized_cnpj(&digits).unwrap_or(digits)
}

/// `5511999887766` -> `(11) 99988-7766`, `1133224455` -> `(11) 3322-4455`
pub fn format_phone(phone: &str) -> String {
    let digits = normalize_digits(phone);
    try_format_normalized_phone(&digits).unwrap_or(digits)
}

pub fn try_format_cpf(cpf: &str) -> Option<String> {
    try_format_normalized_cpf(&normalize_digits(cpf))
}

pub fn try_format_cnpj(cnpj: &str) -> Option<String> {
    try_format_normalized_cnpj(&normalize_digits(cnpj))
}

pub fn try_format_phone(phone: &str) -> Option<String> {
    try_format_normalized_phone(&normalize_digits(phone))
}

pub fn sanitize_cpf(cpf: &str) -> String {
    normalize_digits(cpf)
}

pub fn sanitize_cnpj(cnpj: &str) -> String {
    normalize_digits(cnpj)
}

pub fn sanitize_phone(phone: &str) -> String {
    normalize_digits(phone)
}

// The `try_format_normalized_*` functions expect ASCII digits only, so byte
// slicing is always on character boundaries.

fn try_format_normalized_cpf(digits: &str) -> Option<String> {
    if digits.len() != CPF_DIGIT_COUNT {
        return None;
    }
    Some(format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    ))
}

fn try_format_normalized_cnpj(digits: &str) -> Option<String> {
    if digits.len() != CNPJ_DIGIT_COUNT {
        return None;
    }
    Some(format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..]
    ))
}

fn try_format_normalized_phone(digits: &str) -> Option<String> {
    let local = match digits.strip_prefix(BRAZIL_COUNTRY_CODE) {
        Some(rest) if rest.len() == 10 || rest.len() == 11 => rest,
        _ => digits,
    };
    let (area_code, number) = local.split_at(local.len().min(2));
    match number.len() {
        9 => Some(format!("({}) {}-{}", area_code, &number[..5], &number[5..])),
        8 => Some(format!("({}) {}-{}", area_code, &number[..4], &number[4..])),
        _ => None,
    }
}
