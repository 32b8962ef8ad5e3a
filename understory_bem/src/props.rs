// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! String-keyed component props.

use alloc::string::String;
use core::iter::FromIterator;

use hashbrown::HashMap;
use understory_classname::ModValue;

/// The prop that carries a component's class list.
pub const CLASS_NAME: &str = "className";

/// A string-keyed mapping of scalar prop values.
///
/// Lookups are plain key lookups; there is no schema. The `className` prop
/// has dedicated accessors because decorators read and rewrite it.
///
/// # Example
///
/// ```rust
/// use understory_bem::Props;
///
/// let props = Props::new().with("size", "m").with_class_name("extra");
/// assert_eq!(props.get("size").and_then(|v| v.as_str()), Some("m"));
/// assert_eq!(props.class_name(), Some("extra"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Props {
    values: HashMap<String, ModValue>,
}

impl Props {
    /// Creates empty props.
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

    /// Sets `name` to `value`, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ModValue>) -> Option<ModValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Removes `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<ModValue> {
        self.values.remove(name)
    }

    /// Returns the value of `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ModValue> {
        self.values.get(name)
    }

    /// Returns `true` if `name` is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the `className` prop if it is set to a string.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.get(CLASS_NAME).and_then(ModValue::as_str)
    }

    /// Sets the `className` prop, returning `self` for chaining.
    #[must_use]
    pub fn with_class_name(self, class_name: impl Into<String>) -> Self {
        self.with(CLASS_NAME, class_name.into())
    }

    /// Fills every prop that is set in `defaults` but missing from `self`.
    ///
    /// Props already present in `self` are never overwritten.
    #[must_use]
    pub fn with_defaults(mut self, defaults: &Self) -> Self {
        for (name, value) in &defaults.values {
            if !self.values.contains_key(name) {
                self.values.insert(name.clone(), value.clone());
            }
        }
        self
    }

    /// Returns the number of props.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no props are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates props in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModValue)> + '_ {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<ModValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (name, value) in iter {
            props.set(name, value);
        }
        props
    }
}
