// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for render decisions.
//!
//! Decorated components do not keep a record of why a modifier did or did not
//! apply. Embedders that want to see it install a [`ModTrace`] sink with
//! [`BemMod::with_trace`](crate::BemMod::with_trace); the sink is called once
//! per render, after the match test and before the wrapped component renders.
//!
//! [`LastDecision`] keeps the most recent diagnostic identifier, which is
//! what a devtools panel usually wants. Closures implement [`ModTrace`] too.
//!
//! This module only exists with the `diagnostics` feature.

use alloc::string::{String, ToString};
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::spec::ModSpec;

/// One render decision made by a decorated component.
///
/// `Display` gives the diagnostic identifier:
/// `WithBemMod(Button)[size:m][enabled]`.
#[derive(Copy, Clone, Debug)]
pub struct ModDecision<'a> {
    /// Name of the decorator (`WithBemMod`).
    pub wrapper: &'a str,
    /// Bare block token of the wrapped component.
    pub wrapped: &'a str,
    /// The decorator's modifier specification.
    pub spec: &'a ModSpec,
    /// Whether the modifier applied on this render.
    pub applied: bool,
}

impl fmt::Display for ModDecision<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.wrapper, self.wrapped)?;
        let value = self.spec.summary();
        if !value.is_empty() {
            write!(f, "[{value}]")?;
        }
        if self.applied {
            f.write_str("[enabled]")
        } else {
            f.write_str("[disabled]")
        }
    }
}

/// A callback sink for render decisions.
pub trait ModTrace {
    /// Called once per render of a decorated component.
    fn decision(&self, decision: &ModDecision<'_>);
}

impl<F> ModTrace for F
where
    F: Fn(&ModDecision<'_>),
{
    fn decision(&self, decision: &ModDecision<'_>) {
        self(decision);
    }
}

/// Records the diagnostic identifier of the most recent decision.
///
/// Each render overwrites the previous record.
#[derive(Debug, Default)]
pub struct LastDecision {
    display_name: RefCell<Option<String>>,
    applied: Cell<Option<bool>>,
}

impl LastDecision {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the diagnostic identifier of the last decision, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.display_name.borrow().clone()
    }

    /// Returns whether the modifier applied on the last render, if any.
    #[must_use]
    pub fn applied(&self) -> Option<bool> {
        self.applied.get()
    }

    /// Forgets the last decision.
    pub fn clear(&self) {
        self.display_name.replace(None);
        self.applied.set(None);
    }
}

impl ModTrace for LastDecision {
    fn decision(&self, decision: &ModDecision<'_>) {
        self.display_name.replace(Some(decision.to_string()));
        self.applied.set(Some(decision.applied));
    }
}

/// Emits one `tracing` event per render decision at `TRACE` level.
#[cfg(feature = "tracing")]
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingTrace;

#[cfg(feature = "tracing")]
impl ModTrace for TracingTrace {
    fn decision(&self, decision: &ModDecision<'_>) {
        tracing::trace!(
            wrapper = decision.wrapper,
            wrapped = decision.wrapped,
            spec = %decision.spec.summary(),
            applied = decision.applied,
            "modifier decision"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_classname::EntityMods;

    #[test]
    fn identifier_shape() {
        let mods = EntityMods::new().with("size", "m").with("theme", "action");
        let spec = ModSpec::new(mods).unwrap();
        let decision = ModDecision {
            wrapper: "WithBemMod",
            wrapped: "Button",
            spec: &spec,
            applied: true,
        };
        assert_eq!(
            decision.to_string(),
            "WithBemMod(Button)[size:m | theme:action][enabled]"
        );

        let rec = LastDecision::new();
        rec.decision(&decision);
        rec.decision(&ModDecision {
            applied: false,
            ..decision
        });
        assert_eq!(
            rec.display_name().as_deref(),
            Some("WithBemMod(Button)[size:m | theme:action][disabled]")
        );
        assert_eq!(rec.applied(), Some(false));

        rec.clear();
        assert_eq!(rec.display_name(), None);
    }
}
