// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Classname: block/element/modifier class-name tokens.
//!
//! This crate formats class names that follow the block/element/modifier
//! convention. A class name is built from a **block** (`Button`), an optional
//! **element** inside that block (`Button-Text`), and any number of
//! **modifiers** that describe a presentational variant (`Button_size_m`).
//!
//! The crate only produces strings. It does not parse class lists, it does not
//! validate names, and it does not know anything about components.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_classname::{EntityMods, classnames, cn};
//!
//! let button = cn("Button");
//! assert_eq!(button.entity(), "Button");
//! assert_eq!(button.elem("Text").entity(), "Button-Text");
//!
//! let mods = EntityMods::new().with("size", "m").with("disabled", true);
//! assert_eq!(button.mods(&mods), "Button Button_size_m Button_disabled");
//!
//! // Joining drops empty segments and repeated classes.
//! let joined = classnames([Some("Button"), Some("Button Button_size_m"), None]);
//! assert_eq!(joined, "Button Button_size_m");
//! ```
//!
//! ## Naming presets
//!
//! The delimiters between block, element, modifier name and modifier value are
//! described by a [`Preset`]. [`Preset::REACT`] is the default
//! (`Block-Elem_mod_value`); [`Preset::ORIGIN`] gives the classic
//! `Block__elem_mod_value` spelling.
//!
//! ```rust
//! use understory_classname::{EntityMods, Preset, cn};
//!
//! let menu = cn("menu").with_preset(Preset::ORIGIN).elem("item");
//! let mods = EntityMods::new().with("active", true);
//! assert_eq!(menu.mods(&mods), "menu__item menu__item_active");
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod join;
mod mods;
mod naming;

pub use join::classnames;
pub use mods::{EntityMods, ModValue};
pub use naming::{ClassName, Preset, cn};
