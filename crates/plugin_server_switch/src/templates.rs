//! Positional placeholder substitution for configured response templates.
//!
//! Response and list-entry templates use `{0}`, `{1}`, ... placeholders.
//! Substitution is an explicit scan with these rules, independent of any
//! formatting machinery:
//!
//! - `{N}` is replaced by the N-th value, 0-based.
//! - A placeholder with no corresponding value is copied through verbatim.
//! - Anything that is not `{` + ASCII digits + `}` is copied through
//!   verbatim; there is no escaping syntax.

/// Applies `values` to the positional placeholders in `template`.
pub fn apply(template: &str, values: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        let Some(close) = rest.find('}') else {
            // Unterminated brace, nothing left to substitute.
            break;
        };

        match placeholder_index(&rest[1..close]) {
            Some(index) if index < values.len() => {
                out.push_str(values[index]);
                rest = &rest[close + 1..];
            }
            _ => {
                // Not a substitutable placeholder; emit the brace and keep
                // scanning right after it.
                out.push('{');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn placeholder_index(body: &str) -> Option<usize> {
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    body.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_all_positions() {
        assert_eq!(
            apply("\n{1}. {0} (port {2})", &["eu-main", "1", "7777"]),
            "\n1. eu-main (port 7777)"
        );
    }

    #[test]
    fn repeated_placeholder() {
        assert_eq!(apply("{0} and {0}", &["x"]), "x and x");
    }

    #[test]
    fn unused_values_are_fine() {
        assert_eq!(apply("\n- {0}", &["1", "1", "7777"]), "\n- 1");
    }

    #[test]
    fn out_of_range_placeholder_left_verbatim() {
        assert_eq!(apply("list:{0} next:{3}", &["a"]), "list:a next:{3}");
    }

    #[test]
    fn non_numeric_braces_left_verbatim() {
        assert_eq!(apply("{alias} {0}", &["a"]), "{alias} a");
    }

    #[test]
    fn unterminated_brace_left_verbatim() {
        assert_eq!(apply("tail {0", &["a"]), "tail {0");
    }

    #[test]
    fn empty_template() {
        assert_eq!(apply("", &["a"]), "");
    }
}
