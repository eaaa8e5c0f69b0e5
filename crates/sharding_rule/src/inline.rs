//! Expansion of inline data node expressions.
//!
//! An expression is a comma separated list of segments. Each segment may
//! contain any number of placeholders:
//!
//! - `${0..3}` expands to `0`, `1`, `2`, `3`
//! - `${[a, b]}` expands to `a`, `b`
//!
//! A segment with multiple placeholders expands to the cartesian product of
//! its placeholders, leftmost varying slowest.
//!
//! An expression expands to at most `MAX_EXPANDED_VALUES` values.
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Result, RuleError};

pub const MAX_EXPANDED_VALUES: usize = 65_536;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]*)\}").expect("placeholder regex to be valid"));

static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*\.\.\s*(\d+)\s*$").expect("range regex to be valid"));

/// Expand an inline expression into its concrete values.
pub fn expand(expression: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for segment in split_segments(expression)? {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        out.extend(expand_segment(expression, segment)?);
        if out.len() > MAX_EXPANDED_VALUES {
            return Err(too_many_values(expression));
        }
    }
    Ok(out)
}

/// Split on commas that aren't inside a placeholder.
fn split_segments(expression: &str) -> Result<Vec<&str>> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in expression.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1).ok_or_else(|| invalid(expression, "unbalanced '}'"))?
            }
            ',' if depth == 0 => {
                segments.push(&expression[start..idx]);
                start = idx + 1;
            }
            _ => (),
        }
    }
    if depth != 0 {
        return Err(invalid(expression, "unclosed placeholder"));
    }
    segments.push(&expression[start..]);

    Ok(segments)
}

fn expand_segment(expression: &str, segment: &str) -> Result<Vec<String>> {
    let mut results = vec![String::new()];
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(segment) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let literal = &segment[last..whole.start()];
        let values = placeholder_values(expression, &caps[1])?;
        if results.len().saturating_mul(values.len()) > MAX_EXPANDED_VALUES {
            return Err(too_many_values(expression));
        }

        results = results
            .iter()
            .flat_map(|prefix| {
                values
                    .iter()
                    .map(move |value| format!("{prefix}{literal}{value}"))
            })
            .collect();
        last = whole.end();
    }

    let tail = &segment[last..];
    for result in &mut results {
        result.push_str(tail);
    }

    Ok(results)
}

fn placeholder_values(expression: &str, body: &str) -> Result<Vec<String>> {
    if let Some(caps) = RANGE.captures(body) {
        let lower: u64 = caps[1]
            .parse()
            .map_err(|_| invalid(expression, "range bound out of range"))?;
        let upper: u64 = caps[2]
            .parse()
            .map_err(|_| invalid(expression, "range bound out of range"))?;
        if lower > upper {
            return Err(invalid(expression, "range lower bound exceeds upper bound"));
        }
        if upper - lower >= MAX_EXPANDED_VALUES as u64 {
            return Err(too_many_values(expression));
        }
        return Ok((lower..=upper).map(|v| v.to_string()).collect());
    }

    let body = body.trim();
    let list = body
        .strip_prefix('[')
        .and_then(|b| b.strip_suffix(']'))
        .ok_or_else(|| invalid(expression, "placeholder must be a range or a list"))?;

    let values: Vec<String> = list
        .split(',')
        .map(|v| v.trim().trim_matches(|c| c == '\'' || c == '"').to_string())
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() {
        return Err(invalid(expression, "empty list"));
    }

    Ok(values)
}

fn too_many_values(expression: &str) -> RuleError {
    invalid(
        expression,
        &format!("expands to more than {MAX_EXPANDED_VALUES} values"),
    )
}

fn invalid(expression: &str, reason: &str) -> RuleError {
    RuleError::InvalidInlineExpression {
        expression: expression.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_placeholders() {
        let got = expand("ds_0.t_order_0, ds_1.t_order_1").unwrap();
        assert_eq!(vec!["ds_0.t_order_0", "ds_1.t_order_1"], got);
    }

    #[test]
    fn range_product() {
        let got = expand("ds_${0..1}.t_order_${0..1}").unwrap();
        assert_eq!(
            vec![
                "ds_0.t_order_0",
                "ds_0.t_order_1",
                "ds_1.t_order_0",
                "ds_1.t_order_1",
            ],
            got
        );
    }

    #[test]
    fn list_placeholder() {
        let got = expand("${['ms', 'slave']}_ds.t_user, ds_2.t_user").unwrap();
        assert_eq!(vec!["ms_ds.t_user", "slave_ds.t_user", "ds_2.t_user"], got);
    }

    #[test]
    fn reversed_range() {
        let err = expand("ds.t_${3..1}").unwrap_err();
        assert!(matches!(err, RuleError::InvalidInlineExpression { .. }));
    }

    #[test]
    fn unclosed_placeholder() {
        let err = expand("ds.t_${0..1").unwrap_err();
        assert!(matches!(err, RuleError::InvalidInlineExpression { .. }));
    }

    #[test]
    fn huge_range() {
        let err = expand("ds.t_${0..4000000000}").unwrap_err();
        assert!(matches!(err, RuleError::InvalidInlineExpression { .. }));
    }

    #[test]
    fn huge_product() {
        // 300 * 300 values, each range on its own is fine.
        let err = expand("ds_${0..299}.t_${0..299}").unwrap_err();
        assert!(matches!(err, RuleError::InvalidInlineExpression { .. }));
    }

    #[test]
    fn huge_across_segments() {
        let segment = format!("ds.t_${{0..{}}}", MAX_EXPANDED_VALUES - 1);
        let got = expand(&segment).unwrap();
        assert_eq!(MAX_EXPANDED_VALUES, got.len());

        let err = expand(&format!("{segment}, ds.t_extra")).unwrap_err();
        assert!(matches!(err, RuleError::InvalidInlineExpression { .. }));
    }

    #[test]
    fn garbage_placeholder() {
        let err = expand("ds.t_${abc}").unwrap_err();
        assert!(matches!(err, RuleError::InvalidInlineExpression { .. }));
    }
}
