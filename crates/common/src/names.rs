//! Identifier casing conversions
//!
//! Pure, total functions over identifier strings (ASCII letters, digits,
//! underscore). Unexpected characters pass through unchanged; there is no
//! failure mode.

/// Convert a snake_case identifier to UpperCamelCase.
///
/// Inputs without an underscore are returned unchanged, so already-camel
/// identifiers pass through as-is. This is a pass-through, not an enforcement
/// of canonical casing: callers must only feed snake_case or already-camel
/// identifiers.
pub fn to_upper_camel(identifier: &str) -> String {
    if !identifier.contains('_') {
        return identifier.to_string();
    }
    identifier.split('_').map(capitalize).collect()
}

/// Convert an identifier to lower_snake_case.
///
/// Applies [`to_upper_camel`] first, then inserts `_` before every uppercase
/// letter, lowercases everything and strips the leading underscore this
/// leaves behind. Because it is defined over [`to_upper_camel`]'s output and
/// not the raw input, `to_lower_snake(to_upper_camel(x)) == to_lower_snake(x)`
/// holds for all identifier inputs.
pub fn to_lower_snake(identifier: &str) -> String {
    let camel = to_upper_camel(identifier);
    let mut out = String::with_capacity(camel.len() + 4);
    for ch in camel.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    match out.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => out,
    }
}

/// Uppercase the first character of a segment, lowercase the rest.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => format!(
            "{}{}",
            first.to_ascii_uppercase(),
            chars.as_str().to_ascii_lowercase()
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_camel_from_snake() {
        assert_eq!(to_upper_camel("query_order"), "QueryOrder");
        assert_eq!(to_upper_camel("query_order_detail"), "QueryOrderDetail");
        assert_eq!(to_upper_camel("a_b_c"), "ABC");
    }

    #[test]
    fn test_upper_camel_passthrough_without_underscore() {
        assert_eq!(to_upper_camel("queryOrder"), "queryOrder");
        assert_eq!(to_upper_camel("QueryOrder"), "QueryOrder");
        assert_eq!(to_upper_camel("query"), "query");
    }

    #[test]
    fn test_lower_snake_from_camel() {
        assert_eq!(to_lower_snake("queryOrder"), "query_order");
        assert_eq!(to_lower_snake("QueryOrder"), "query_order");
        assert_eq!(to_lower_snake("QueryOrderDetail"), "query_order_detail");
    }

    #[test]
    fn test_lower_snake_keeps_snake_input() {
        assert_eq!(to_lower_snake("query_order"), "query_order");
        assert_eq!(to_lower_snake("query"), "query");
    }

    #[test]
    fn test_round_trip_identity_for_snake_case() {
        for input in ["query_order", "get_user_info", "a_b", "query_order2_detail"] {
            assert_eq!(to_lower_snake(&to_upper_camel(input)), input);
        }
    }

    #[test]
    fn test_lower_snake_agrees_through_upper_camel() {
        for input in ["queryOrder", "query_order", "QueryOrder", "query", "a_b_c"] {
            assert_eq!(to_lower_snake(&to_upper_camel(input)), to_lower_snake(input));
        }
    }

    #[test]
    fn test_unexpected_characters_pass_through() {
        assert_eq!(to_upper_camel("query-order"), "query-order");
        assert_eq!(to_lower_snake("query-order"), "query-order");
    }
}
