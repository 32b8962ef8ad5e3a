// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The component abstraction decorators wrap.
//!
//! A [`Component`] is anything that turns [`Props`] into some output. It
//! carries a display name for diagnostics and a set of default props that the
//! host merges into incoming props before rendering (see [`render`]).

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::error::BemError;
use crate::props::Props;

/// A renderable component.
pub trait Component {
    /// What rendering produces.
    type Output;

    /// Human-readable component name.
    fn display_name(&self) -> &str;

    /// Name of the innermost component in a wrapper chain.
    ///
    /// Wrappers forward this to the component they wrap; plain components
    /// return their own display name.
    fn origin_name(&self) -> &str {
        self.display_name()
    }

    /// Props merged into incoming props by [`render`] before rendering.
    fn default_props(&self) -> Props {
        Props::new()
    }

    /// Renders with fully resolved props.
    ///
    /// Callers normally go through [`render`], which applies
    /// [`default_props`](Component::default_props) first.
    fn render(&self, props: Props) -> Result<Self::Output, BemError>;
}

/// Renders `component` the way a host would: default props first, then
/// [`Component::render`].
pub fn render<C>(component: &C, props: Props) -> Result<C::Output, BemError>
where
    C: Component + ?Sized,
{
    let props = props.with_defaults(&component.default_props());
    component.render(props)
}

impl<C: Component + ?Sized> Component for Rc<C> {
    type Output = C::Output;

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn origin_name(&self) -> &str {
        (**self).origin_name()
    }

    fn default_props(&self) -> Props {
        (**self).default_props()
    }

    fn render(&self, props: Props) -> Result<Self::Output, BemError> {
        (**self).render(props)
    }
}

/// A component backed by a render closure.
///
/// # Example
///
/// ```rust
/// use understory_bem::{BemError, FnComponent, Props, render};
///
/// let button = FnComponent::new("Button", |props: Props| {
///     Ok::<_, BemError>(props.class_name().unwrap_or_default().to_owned())
/// })
/// .with_class_name("Button");
///
/// assert_eq!(render(&button, Props::new()).unwrap(), "Button");
/// ```
pub struct FnComponent<F> {
    name: String,
    default_props: Props,
    render: F,
}

impl<F> FnComponent<F> {
    /// Creates a component named `name` with no default props.
    #[must_use]
    pub fn new(name: impl Into<String>, render: F) -> Self {
        Self {
            name: name.into(),
            default_props: Props::new(),
            render,
        }
    }

    /// Replaces the default props.
    #[must_use]
    pub fn with_default_props(mut self, props: Props) -> Self {
        self.default_props = props;
        self
    }

    /// Sets the default `className` (the block class decorators build on).
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.default_props = self.default_props.with_class_name(class_name);
        self
    }
}

impl<F, O> Component for FnComponent<F>
where
    F: Fn(Props) -> Result<O, BemError>,
{
    type Output = O;

    fn display_name(&self) -> &str {
        &self.name
    }

    fn default_props(&self) -> Props {
        self.default_props.clone()
    }

    fn render(&self, props: Props) -> Result<O, BemError> {
        (self.render)(props)
    }
}

impl<F> fmt::Debug for FnComponent<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComponent")
            .field("name", &self.name)
            .field("default_props", &self.default_props)
            .finish_non_exhaustive()
    }
}
