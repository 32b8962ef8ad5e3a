// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorator errors.

use alloc::string::String;
use core::fmt;

/// Errors raised while building or rendering modifier decorators.
///
/// Both variants are programmer errors (missing setup) rather than data
/// errors. They are raised at the point of detection and never recovered
/// internally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BemError {
    /// A modifier specification named no props.
    ///
    /// Raised by the decorator factory, before any component is wrapped.
    EmptyModSpec,
    /// A decorated component was rendered, but the component it wraps had no
    /// `className` in its default props when it was decorated.
    MissingClassName {
        /// Display name of the innermost wrapped component.
        component: String,
    },
}

impl fmt::Display for BemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyModSpec => f.write_str("modifier specification must name at least one prop"),
            Self::MissingClassName { component } => write!(
                f,
                "className not specified in default props of \"{component}\""
            ),
        }
    }
}

impl core::error::Error for BemError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn missing_class_name_names_component() {
        let err = BemError::MissingClassName {
            component: "Button".into(),
        };
        assert_eq!(
            err.to_string(),
            "className not specified in default props of \"Button\""
        );
    }
}
