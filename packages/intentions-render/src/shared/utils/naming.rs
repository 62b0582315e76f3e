//! Test function naming rules

/// A function is a test when its name starts with `prefix`
#[inline]
pub fn is_test_function(name: &str, prefix: &str) -> bool {
    name.starts_with(prefix)
}

/// Human readable case name derived from a test function name
///
/// Strips `prefix` once, turns underscores into spaces and capitalizes the
/// result: first character upper-cased, the rest lower-cased.
///
/// # Example
/// ```
/// use intentions_render::shared::utils::naming::case_name;
///
/// assert_eq!(
///     case_name("test_transfer_money_with_insufficient_balance", "test_"),
///     "Transfer money with insufficient balance",
/// );
/// ```
pub fn case_name(function_name: &str, prefix: &str) -> String {
    let stripped = function_name.strip_prefix(prefix).unwrap_or(function_name);
    let spaced = stripped.replace('_', " ");

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
