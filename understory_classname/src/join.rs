// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class list joining.

use alloc::string::String;

/// Joins class tokens into a single space-separated class list.
///
/// Each token may itself be a space-separated list. Missing tokens, empty
/// segments and repeated classes are dropped; the first occurrence of a class
/// wins, so relative order is preserved.
///
/// ```rust
/// use understory_classname::classnames;
///
/// let joined = classnames([Some("a b"), None, Some(" b  c "), Some("a")]);
/// assert_eq!(joined, "a b c");
/// ```
#[must_use]
pub fn classnames<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for class in tokens.into_iter().flatten().flat_map(str::split_whitespace) {
        if out.split(' ').any(|existing| existing == class) {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_joins_to_empty() {
        assert_eq!(classnames([None, Some(""), Some("   ")]), "");
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            classnames([Some("Button"), Some("Button Button_size_m"), Some("Button")]),
            "Button Button_size_m"
        );
    }
}
