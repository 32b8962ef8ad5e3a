// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier values and ordered modifier sets.

use alloc::string::String;
use core::fmt;
use core::iter::FromIterator;

use smallvec::SmallVec;

/// A scalar modifier (or prop) value.
///
/// Equality is strict: values of different variants never compare equal, so
/// `Str("1")` and `Num(1)` are different values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModValue {
    /// A string value, rendered as `Block_name_value`.
    Str(String),
    /// A boolean value. `true` renders as `Block_name`; `false` is skipped.
    Bool(bool),
    /// An integer value, rendered as `Block_name_value` (zero included).
    Num(i64),
}

impl ModValue {
    /// Returns `true` if this value produces a modifier token.
    ///
    /// `Bool(false)` and the empty string are skipped when formatting.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Num(_) => true,
        }
    }

    /// Returns the string payload, if this is a [`ModValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ModValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ModValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for ModValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for ModValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ModValue {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for ModValue {
    fn from(value: i32) -> Self {
        Self::Num(value.into())
    }
}

impl From<u32> for ModValue {
    fn from(value: u32) -> Self {
        Self::Num(value.into())
    }
}

/// An insertion-ordered set of `name -> value` modifiers.
///
/// Names are unique. Setting a name that is already present replaces its value
/// but keeps its original position, so formatting order always follows the
/// order in which names were first declared.
///
/// Modifier sets are almost always tiny, so entries live inline in a
/// [`SmallVec`] and lookups are linear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityMods {
    entries: SmallVec<[(String, ModValue); 4]>,
}

impl EntityMods {
    /// Creates an empty modifier set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ModValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name` to `true`, returning `self` for chaining.
    ///
    /// This is the spelling for "the prop must be set" modifiers such as
    /// `disabled` or `checked`.
    #[must_use]
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.with(name, true)
    }

    /// Sets `name` to `value`.
    ///
    /// Returns the previous value if `name` was already present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ModValue>) -> Option<ModValue> {
        let name = name.into();
        let value = value.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Some(core::mem::replace(slot, value));
        }
        self.entries.push((name, value));
        None
    }

    /// Returns the value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ModValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Returns `true` if there are no modifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of modifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates modifiers in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModValue)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for EntityMods
where
    K: Into<String>,
    V: Into<ModValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mods = Self::new();
        for (name, value) in iter {
            mods.set(name, value);
        }
        mods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut mods = EntityMods::new().with("size", "m").with("theme", "action");
        let previous = mods.set("size", "l");
        assert_eq!(previous, Some(ModValue::from("m")));

        let names: alloc::vec::Vec<_> = mods.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["size", "theme"]);
        assert_eq!(mods.get("size"), Some(&ModValue::from("l")));
    }

    #[test]
    fn equality_is_strict_across_variants() {
        assert_ne!(ModValue::from("1"), ModValue::from(1));
        assert_ne!(ModValue::from("true"), ModValue::from(true));
        assert_eq!(ModValue::from(7_u32), ModValue::Num(7));
    }

    #[test]
    fn rendered_values() {
        assert!(ModValue::from("m").is_rendered());
        assert!(!ModValue::from("").is_rendered());
        assert!(ModValue::from(true).is_rendered());
        assert!(!ModValue::from(false).is_rendered());
        assert!(ModValue::from(0).is_rendered());
    }
}
