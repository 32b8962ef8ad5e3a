// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated modifier specifications.

use alloc::string::String;
use core::fmt::Write as _;

use understory_classname::EntityMods;

use crate::error::BemError;
use crate::props::Props;

/// The props a modifier requires, with their expected values.
///
/// A `ModSpec` always names at least one prop. It matches a set of props when
/// every named prop is present with a strictly equal value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModSpec {
    mods: EntityMods,
}

impl ModSpec {
    /// Validates `mods` as a modifier specification.
    ///
    /// # Errors
    ///
    /// Returns [`BemError::EmptyModSpec`] if `mods` is empty.
    pub fn new(mods: EntityMods) -> Result<Self, BemError> {
        if mods.is_empty() {
            return Err(BemError::EmptyModSpec);
        }
        Ok(Self { mods })
    }

    /// Returns the expected `name -> value` pairs.
    #[must_use]
    pub fn mods(&self) -> &EntityMods {
        &self.mods
    }

    /// Returns `true` if every named prop is set to its expected value.
    #[must_use]
    pub fn matches(&self, props: &Props) -> bool {
        self.mods
            .iter()
            .all(|(name, expected)| props.get(name) == Some(expected))
    }

    /// Human-readable form used in diagnostic identifiers: `size:m | theme:x`.
    ///
    /// Braces, quotes and brackets are stripped and separators become ` | `.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut raw = String::new();
        for (i, (name, value)) in self.mods.iter().enumerate() {
            if i > 0 {
                raw.push(',');
            }
            // Writing into a `String` cannot fail.
            let _ = write!(raw, "{name}:{value}");
        }

        let mut out = String::with_capacity(raw.len());
        for ch in raw.chars() {
            match ch {
                '{' | '}' | '"' | '[' | ']' => {}
                ',' => out.push_str(" | "),
                _ => out.push(ch),
            }
        }
        out
    }
}

impl TryFrom<EntityMods> for ModSpec {
    type Error = BemError;

    fn try_from(mods: EntityMods) -> Result<Self, BemError> {
        Self::new(mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_is_rejected() {
        assert_eq!(ModSpec::new(EntityMods::new()), Err(BemError::EmptyModSpec));
    }

    #[test]
    fn matches_requires_every_prop() {
        let mods = EntityMods::new().with("size", "m").with("theme", "action");
        let spec = ModSpec::try_from(mods).unwrap();

        let full = Props::new().with("size", "m").with("theme", "action");
        assert!(spec.matches(&full.with("x", 1)));
        assert!(!spec.matches(&Props::new().with("size", "m")));
        assert!(!spec.matches(&Props::new().with("size", "m").with("theme", "normal")));
    }

    #[test]
    fn matching_is_strict() {
        let spec = ModSpec::new(EntityMods::new().with("count", 1)).unwrap();
        assert!(!spec.matches(&Props::new().with("count", "1")));
        assert!(spec.matches(&Props::new().with("count", 1)));

        let flag = ModSpec::new(EntityMods::new().flag("disabled")).unwrap();
        assert!(flag.matches(&Props::new().with("disabled", true)));
        assert!(!flag.matches(&Props::new().with("disabled", "true")));
        assert!(!flag.matches(&Props::new()));
    }

    #[test]
    fn summary_is_readable() {
        let spec = ModSpec::new(
            EntityMods::new()
                .with("size", "m")
                .flag("disabled")
                .with("label", "{a,b}"),
        )
        .unwrap();
        assert_eq!(spec.summary(), "size:m | disabled:true | label:a | b");
    }
}
