/// Keep only the ASCII digits of `input`, in order.
///
/// This is total: any input (including an empty one) produces a possibly empty
/// string of `0`-`9` characters. Applying it twice gives the same result as
/// applying it once.
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Remove ASCII whitespace and dashes, leaving every other character in place.
///
/// Bank account and agency numbers are commonly written as `12345-6` or
/// `1234 5`, but any other punctuation makes them invalid, so this is
/// deliberately narrower than [normalize_digits].
pub fn strip_separators(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != '-')
        .collect()
}

/// True if `input` is non-empty and every character is the same.
pub fn is_repeated_digit(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}
