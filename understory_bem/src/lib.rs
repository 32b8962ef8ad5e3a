// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory BEM: prop-driven modifier classes for components.
//!
//! A parent often wants to render a child in a presentational variant (a
//! larger button, a checked box) without the child knowing anything about
//! how variants are spelled in CSS. This crate provides **modifier
//! decorators** for that: a decorator is built from the props it requires,
//! and a component it wraps gains the matching block/element/modifier class
//! whenever it is rendered with exactly those prop values.
//!
//! ## Core Concepts
//!
//! - [`Component`] is anything that renders [`Props`]. Its
//!   [`default_props`](Component::default_props) carry the block class
//!   (`className`), and the host merges them in through [`render`].
//! - [`with_bem_mod`] validates a modifier specification and returns a
//!   [`WithBemMod`] decorator. [`with_bem_mod_body`] does the same with a
//!   custom [`ModBody`] that takes over rendering when the modifier applies.
//! - Applying the decorator gives a [`BemMod`]. On every render it compares
//!   each prop named by its [`ModSpec`] with strict equality. If all of them
//!   match, the wrapped component is rendered with
//!   `className = block + modifier token + incoming className`; otherwise
//!   the props pass through untouched.
//!
//! Class tokens come from `understory_classname`.
//!
//! ## Stacking decorators
//!
//! A [`BemMod`] forwards the block class in its own default props, so any
//! number of decorators can wrap the same component. Each one decides on its
//! own, and modifier classes accumulate in the order the decorators were
//! applied.
//!
//! ```rust
//! use understory_bem::{BemError, Decorate, EntityMods, FnComponent, Props, render, with_bem_mod};
//!
//! let button = FnComponent::new("Button", |props: Props| {
//!     Ok::<_, BemError>(props.class_name().unwrap_or_default().to_owned())
//! })
//! .with_class_name("Button");
//!
//! let size_m = with_bem_mod(EntityMods::new().with("size", "m")).unwrap();
//! let action = with_bem_mod(EntityMods::new().with("theme", "action")).unwrap();
//! let button = button.decorate(&size_m).decorate(&action);
//!
//! let props = Props::new().with("size", "m").with("theme", "action");
//! assert_eq!(
//!     render(&button, props).unwrap(),
//!     "Button Button_size_m Button_theme_action"
//! );
//! ```
//!
//! ## Errors
//!
//! An empty modifier specification is rejected by the factory
//! ([`BemError::EmptyModSpec`]). Wrapping a component that has no default
//! `className` succeeds, but rendering the result fails with
//! [`BemError::MissingClassName`] naming the innermost component.
//!
//! ## Diagnostics
//!
//! With the `diagnostics` feature (on by default), [`BemMod::with_trace`]
//! installs a [`ModTrace`] sink that sees every render decision. Its
//! [`ModDecision`] displays as `WithBemMod(Button)[size:m][enabled]`.
//! [`LastDecision`] keeps the latest one. The `tracing` feature adds
//! `TracingTrace`, which forwards decisions to `tracing`.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod component;
mod decorator;
mod error;
mod props;
mod spec;
#[cfg(feature = "diagnostics")]
mod trace;

pub use component::{Component, FnComponent, render};
pub use decorator::{
    BemMod, Decorate, DefaultBody, ModBody, WRAPPER_NAME, WithBemMod, with_bem_mod,
    with_bem_mod_body,
};
pub use error::BemError;
pub use props::{CLASS_NAME, Props};
pub use spec::ModSpec;
#[cfg(feature = "tracing")]
pub use trace::TracingTrace;
#[cfg(feature = "diagnostics")]
pub use trace::{LastDecision, ModDecision, ModTrace};
pub use understory_classname::{EntityMods, ModValue, Preset};
