// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block/element naming and modifier token formatting.

use alloc::string::String;
use core::fmt::{self, Write as _};

use crate::mods::{EntityMods, ModValue};

/// Delimiters used to spell block, element and modifier tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Preset {
    /// Between block and element (`Block-Elem`).
    pub elem: &'static str,
    /// Between entity and modifier name (`Block_mod`).
    pub modifier: &'static str,
    /// Between modifier name and value (`Block_mod_value`).
    pub value: &'static str,
}

impl Preset {
    /// `Block-Elem_mod_value`.
    pub const REACT: Self = Self {
        elem: "-",
        modifier: "_",
        value: "_",
    };

    /// `block__elem_mod_value`.
    pub const ORIGIN: Self = Self {
        elem: "__",
        modifier: "_",
        value: "_",
    };

    /// `block__elem--mod_value`.
    pub const TWO_DASHES: Self = Self {
        elem: "__",
        modifier: "--",
        value: "_",
    };
}

impl Default for Preset {
    fn default() -> Self {
        Self::REACT
    }
}

/// A token context for one block (and optionally one element of it).
///
/// `ClassName` is cheap to build and purely functional: every formatting
/// method returns a fresh `String` and leaves the context untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassName {
    block: String,
    elem: Option<String>,
    preset: Preset,
}

/// Creates a token context for `block` using [`Preset::REACT`].
#[must_use]
pub fn cn(block: impl Into<String>) -> ClassName {
    ClassName::new(block)
}

impl ClassName {
    /// Creates a token context for `block` using [`Preset::REACT`].
    #[must_use]
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            elem: None,
            preset: Preset::default(),
        }
    }

    /// Replaces the naming preset.
    #[must_use]
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    /// Returns a context for the element `elem` of this block.
    #[must_use]
    pub fn elem(&self, elem: impl Into<String>) -> Self {
        Self {
            block: self.block.clone(),
            elem: Some(elem.into()),
            preset: self.preset,
        }
    }

    /// Returns the block name.
    #[must_use]
    pub fn block(&self) -> &str {
        &self.block
    }

    /// Returns the naming preset.
    #[must_use]
    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Returns the bare entity token (`Block` or `Block-Elem`).
    #[must_use]
    pub fn entity(&self) -> String {
        let mut out = String::new();
        self.write_entity(&mut out);
        out
    }

    /// Returns the entity token followed by one token per rendered modifier.
    ///
    /// Modifiers are emitted in declaration order. Values for which
    /// [`ModValue::is_rendered`] is `false` are skipped; `true` produces a
    /// value-less token.
    #[must_use]
    pub fn mods(&self, mods: &EntityMods) -> String {
        let mut out = self.entity();
        for (name, value) in mods.iter() {
            if !value.is_rendered() {
                continue;
            }
            out.push(' ');
            self.write_entity(&mut out);
            out.push_str(self.preset.modifier);
            out.push_str(name);
            if *value != ModValue::Bool(true) {
                out.push_str(self.preset.value);
                // Writing into a `String` cannot fail.
                let _ = write!(out, "{value}");
            }
        }
        out
    }

    fn write_entity(&self, out: &mut String) {
        out.push_str(&self.block);
        if let Some(elem) = &self.elem {
            out.push_str(self.preset.elem);
            out.push_str(elem);
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.block)?;
        if let Some(elem) = &self.elem {
            f.write_str(self.preset.elem)?;
            f.write_str(elem)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_tokens() {
        assert_eq!(cn("Button").entity(), "Button");
        assert_eq!(cn("Button").elem("Icon").entity(), "Button-Icon");
        let origin = cn("Button").with_preset(Preset::ORIGIN);
        assert_eq!(origin.elem("icon").entity(), "Button__icon");
    }

    #[test]
    fn element_context_keeps_block_and_preset() {
        let card = cn("card").with_preset(Preset::TWO_DASHES);
        let title = card.elem("title");
        assert_eq!(title.block(), "card");
        assert_eq!(title.preset(), Preset::TWO_DASHES);
        assert_eq!(cn("card").preset(), Preset::REACT);

        let mods = EntityMods::new().with("size", "m").flag("active");
        assert_eq!(
            title.mods(&mods),
            "card__title card__title--size_m card__title--active"
        );
    }

    #[test]
    fn skipped_and_valueless_modifiers() {
        let mods = EntityMods::new()
            .with("hidden", false)
            .with("label", "")
            .with("focused", true)
            .with("count", 0);
        assert_eq!(cn("Tab").mods(&mods), "Tab Tab_focused Tab_count_0");
    }

    #[test]
    fn empty_mods_is_bare_entity() {
        assert_eq!(cn("Tab").mods(&EntityMods::new()), "Tab");
    }

    #[test]
    fn display_matches_entity() {
        let ctx = cn("Link").elem("Text");
        assert_eq!(alloc::format!("{ctx}"), ctx.entity());
    }
}
