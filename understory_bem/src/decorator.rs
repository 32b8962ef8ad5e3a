// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier decorators.
//!
//! [`with_bem_mod`] builds a [`WithBemMod`] decorator from a modifier
//! specification. Applying it to a component yields a [`BemMod`], which on
//! every render checks its props against the specification and, when they
//! match, adds the modifier class to the `className` it passes down.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;
use core::marker::PhantomData;

use understory_classname::{EntityMods, Preset, classnames, cn};

use crate::component::{Component, render};
use crate::error::BemError;
use crate::props::Props;
use crate::spec::ModSpec;
#[cfg(feature = "diagnostics")]
use crate::trace::{ModDecision, ModTrace};

/// Name decorated components report as their wrapper.
pub const WRAPPER_NAME: &str = "WithBemMod";

/// Renders the wrapped component once a modifier applies.
///
/// Closures `Fn(&C, Props) -> Result<C::Output, BemError>` implement this, so
/// a decorator can take over rendering (for example to add children or swap
/// props) while still receiving the augmented `className`.
pub trait ModBody<C: Component> {
    /// Renders `block` with the augmented `props`.
    fn render(&self, block: &C, props: Props) -> Result<C::Output, BemError>;
}

impl<C, F> ModBody<C> for F
where
    C: Component,
    F: Fn(&C, Props) -> Result<C::Output, BemError>,
{
    fn render(&self, block: &C, props: Props) -> Result<C::Output, BemError> {
        self(block, props)
    }
}

/// Renders the wrapped component with the augmented props.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultBody;

impl<C: Component> ModBody<C> for DefaultBody {
    fn render(&self, block: &C, props: Props) -> Result<C::Output, BemError> {
        render(block, props)
    }
}

/// A modifier decorator: turns a component into a [`BemMod`].
///
/// The same decorator can be applied to any number of components.
#[derive(Clone, Debug)]
pub struct WithBemMod<F = DefaultBody> {
    spec: ModSpec,
    preset: Preset,
    body: F,
}

/// Creates a decorator that applies `mods` when the props match them.
///
/// # Errors
///
/// Returns [`BemError::EmptyModSpec`] if `mods` is empty.
///
/// # Example
///
/// ```rust
/// use understory_bem::{BemError, Decorate, EntityMods, FnComponent, Props, render, with_bem_mod};
///
/// let button = FnComponent::new("Button", |props: Props| {
///     Ok::<_, BemError>(props.class_name().unwrap_or_default().to_owned())
/// })
/// .with_class_name("Button");
///
/// let size_m = with_bem_mod(EntityMods::new().with("size", "m")).unwrap();
/// let button = button.decorate(&size_m);
///
/// let matched = Props::new().with("size", "m").with_class_name("extra");
/// assert_eq!(render(&button, matched).unwrap(), "Button Button_size_m extra");
///
/// let unmatched = Props::new().with("size", "l");
/// assert_eq!(render(&button, unmatched).unwrap(), "Button");
/// ```
pub fn with_bem_mod(mods: impl Into<EntityMods>) -> Result<WithBemMod, BemError> {
    with_bem_mod_body(mods, DefaultBody)
}

/// Creates a decorator whose `body` renders the wrapped component when the
/// modifier applies.
///
/// # Errors
///
/// Returns [`BemError::EmptyModSpec`] if `mods` is empty.
pub fn with_bem_mod_body<F>(
    mods: impl Into<EntityMods>,
    body: F,
) -> Result<WithBemMod<F>, BemError> {
    Ok(WithBemMod {
        spec: ModSpec::new(mods.into())?,
        preset: Preset::default(),
        body,
    })
}

impl<F> WithBemMod<F> {
    /// Returns the modifier specification.
    #[must_use]
    pub fn spec(&self) -> &ModSpec {
        &self.spec
    }

    /// Replaces the naming preset used to spell the modifier token.
    ///
    /// Defaults to [`Preset::REACT`] (`Block_mod_value`).
    ///
    /// ```rust
    /// use understory_bem::{BemError, Decorate, EntityMods, FnComponent, Preset, Props};
    /// use understory_bem::{render, with_bem_mod};
    ///
    /// let card = FnComponent::new("Card", |props: Props| Ok::<_, BemError>(props))
    ///     .with_class_name("card");
    /// let wide = with_bem_mod(EntityMods::new().flag("wide"))
    ///     .unwrap()
    ///     .with_preset(Preset::TWO_DASHES);
    /// assert_eq!(wide.spec().mods().len(), 1);
    ///
    /// let card = card.decorate(&wide);
    /// let out = render(&card, Props::new().with("wide", true)).unwrap();
    /// assert_eq!(out.class_name(), Some("card card--wide"));
    /// ```
    #[must_use]
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    /// Returns the naming preset.
    #[must_use]
    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Wraps `block`.
    ///
    /// The block class is read from `block`'s default props now, not at
    /// render time. A missing block class is only reported when the result is
    /// rendered.
    #[must_use]
    pub fn apply<C>(&self, block: C) -> BemMod<C, F>
    where
        C: Component,
        F: ModBody<C> + Clone,
    {
        let class_name = block.default_props().class_name().map(String::from);
        let display_name = alloc::format!("{WRAPPER_NAME}({})", block.display_name());
        BemMod {
            block,
            body: self.body.clone(),
            spec: self.spec.clone(),
            preset: self.preset,
            class_name,
            display_name,
            #[cfg(feature = "diagnostics")]
            trace: None,
            _single_thread: PhantomData,
        }
    }
}

/// Extension for applying decorators in chains.
///
/// `button.decorate(&a).decorate(&b)` is `b.apply(a.apply(button))`.
pub trait Decorate: Component + Sized {
    /// Wraps `self` with `decorator`.
    #[must_use]
    fn decorate<F>(self, decorator: &WithBemMod<F>) -> BemMod<Self, F>
    where
        F: ModBody<Self> + Clone,
    {
        decorator.apply(self)
    }
}

impl<C: Component> Decorate for C {}

/// A component wrapped by a modifier decorator.
///
/// Its default props carry the wrapped block's class, so decorators stack:
/// each layer sees the same block class and decides independently.
///
/// Rendering is single-threaded: `BemMod` is neither `Send` nor `Sync`, with
/// or without the `diagnostics` feature.
///
/// ```rust,compile_fail
/// use understory_bem::{BemError, BemMod, FnComponent, Props};
///
/// fn assert_send<T: Send>() {}
/// assert_send::<BemMod<FnComponent<fn(Props) -> Result<Props, BemError>>>>();
/// ```
pub struct BemMod<C, F = DefaultBody> {
    block: C,
    body: F,
    spec: ModSpec,
    preset: Preset,
    class_name: Option<String>,
    display_name: String,
    #[cfg(feature = "diagnostics")]
    trace: Option<Rc<dyn ModTrace>>,
    // Keeps auto traits independent of `diagnostics`.
    _single_thread: PhantomData<Rc<()>>,
}

impl<C, F> BemMod<C, F> {
    /// Returns the wrapped component.
    #[must_use]
    pub fn block(&self) -> &C {
        &self.block
    }

    /// Returns the modifier specification.
    #[must_use]
    pub fn spec(&self) -> &ModSpec {
        &self.spec
    }

    /// Returns the block class captured when the component was wrapped.
    #[must_use]
    pub fn block_class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Installs a sink that observes every render decision.
    ///
    /// Sinks are shared through [`Rc`], matching the single-threaded render
    /// model.
    #[cfg(feature = "diagnostics")]
    #[must_use]
    pub fn with_trace(mut self, trace: Rc<dyn ModTrace>) -> Self {
        self.trace = Some(trace);
        self
    }
}

impl<C, F> Component for BemMod<C, F>
where
    C: Component,
    F: ModBody<C>,
{
    type Output = C::Output;

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn origin_name(&self) -> &str {
        self.block.origin_name()
    }

    fn default_props(&self) -> Props {
        match &self.class_name {
            Some(class_name) => Props::new().with_class_name(class_name.as_str()),
            None => Props::new(),
        }
    }

    fn render(&self, mut props: Props) -> Result<C::Output, BemError> {
        let Some(base) = self.class_name.as_deref() else {
            return Err(BemError::MissingClassName {
                component: self.block.origin_name().into(),
            });
        };

        let entity = cn(base).with_preset(self.preset);
        // An empty block class never gets a modifier.
        let applied = !base.is_empty() && self.spec.matches(&props);

        #[cfg(feature = "diagnostics")]
        if let Some(trace) = &self.trace {
            trace.decision(&ModDecision {
                wrapper: WRAPPER_NAME,
                wrapped: &entity.entity(),
                spec: &self.spec,
                applied,
            });
        }

        if !applied {
            return render(&self.block, props);
        }

        let modifier = entity.mods(self.spec.mods());
        let class_name = classnames([Some(base), Some(modifier.as_str()), props.class_name()]);
        props.set(crate::props::CLASS_NAME, class_name);
        self.body.render(&self.block, props)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for BemMod<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BemMod")
            .field("block", &self.block)
            .field("spec", &self.spec)
            .field("preset", &self.preset)
            .field("class_name", &self.class_name)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}
