// SPDX-License-Identifier: MPL-2.0
//! Render surface abstraction.
//!
//! Widgets never talk to a rendering technology directly. They issue four
//! primitive operations against a [`Surface`]: create/insert, set or clear a
//! style, remove, and query by identity or class. The desktop host renders
//! the resulting tree with Iced; tests inspect it directly.
//!
//! # Components
//!
//! - [`Surface`] - The trait widgets are written against
//! - [`Document`] - In-memory element tree implementing [`Surface`]

mod document;

pub use document::Document;

use std::time::Duration;

/// Opaque identity of an element on the surface.
///
/// Identities are never reused, so a stale id held by a widget always
/// refers to nothing once its element is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric identity.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Description of an element to create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementSpec {
    pub tag: String,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub label: Option<String>,
}

impl ElementSpec {
    /// Starts a new element description with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Adds a class name.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets an accessible label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Horizontal offset of an element relative to its resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Absolute offset in logical pixels.
    Px(f32),
    /// Offset as a percentage of the element's own width.
    Percent(f32),
}

impl Offset {
    /// Returns true when the element sits at its resting position.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Offset::Px(v) | Offset::Percent(v) => v == 0.0,
        }
    }
}

/// Semantic fill colors. The renderer decides the concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fill {
    Primary,
    Border,
    Info,
    Success,
    Error,
}

/// Style property names, used to clear a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Transform,
    Background,
    Opacity,
    Transition,
}

/// A single style value set on an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    TranslateX(Offset),
    Background(Fill),
    /// Opacity in `0.0..=1.0`.
    Opacity(f32),
    /// Duration over which `TranslateX` and `Opacity` changes animate.
    Transition(Duration),
}

impl Style {
    /// Returns the property this style value assigns.
    #[must_use]
    pub fn property(&self) -> StyleProperty {
        match self {
            Style::TranslateX(_) => StyleProperty::Transform,
            Style::Background(_) => StyleProperty::Background,
            Style::Opacity(_) => StyleProperty::Opacity,
            Style::Transition(_) => StyleProperty::Transition,
        }
    }

    /// Value `progress` of the way from `self` to `target`.
    ///
    /// Offsets in the same unit and opacities are interpolated linearly.
    /// Anything else jumps straight to `target`.
    #[must_use]
    pub fn interpolate(self, target: Style, progress: f32) -> Style {
        let progress = progress.clamp(0.0, 1.0);
        let lerp = |from: f32, to: f32| from + (to - from) * progress;
        match (self, target) {
            (Style::TranslateX(Offset::Px(from)), Style::TranslateX(Offset::Px(to))) => {
                Style::TranslateX(Offset::Px(lerp(from, to)))
            }
            (Style::TranslateX(Offset::Percent(from)), Style::TranslateX(Offset::Percent(to))) => {
                Style::TranslateX(Offset::Percent(lerp(from, to)))
            }
            (Style::Opacity(from), Style::Opacity(to)) => Style::Opacity(lerp(from, to)),
            _ => target,
        }
    }
}

/// The visible UI tree that widgets mutate.
///
/// Every method accepting an [`ElementId`] is a no-op returning `false` when
/// the element does not exist (never created, or already removed).
pub trait Surface {
    /// Creates an element and inserts it as the last child of `parent`, or
    /// at the top level when `parent` is `None` or no longer exists.
    fn create(&mut self, parent: Option<ElementId>, element: ElementSpec) -> ElementId;

    /// Sets a style value, replacing any previous value of the same property.
    fn set_style(&mut self, id: ElementId, style: Style) -> bool;

    /// Clears a style property.
    fn clear_style(&mut self, id: ElementId, property: StyleProperty) -> bool;

    /// Removes an element and its whole subtree.
    fn remove(&mut self, id: ElementId) -> bool;

    /// Returns all live elements carrying `class`, in document order.
    fn query(&self, class: &str) -> Vec<ElementId>;

    /// Returns whether the element is still present.
    fn contains(&self, id: ElementId) -> bool;

    /// Tells the surface what time it is, so style changes made from now on
    /// are stamped with `now`. Surfaces that do not animate ignore it.
    fn advance_clock(&mut self, _now: Duration) {}
}
