// SPDX-License-Identifier: MPL-2.0
//! In-memory element tree.

use super::{ElementId, ElementSpec, Style, StyleProperty, Surface};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct StyleEntry {
    value: Style,
    /// Value shown just before the last change, if there was one.
    previous: Option<Style>,
    changed_at: Duration,
}

#[derive(Debug, Clone)]
struct Node {
    spec: ElementSpec,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    styles: BTreeMap<StyleProperty, StyleEntry>,
}

impl Node {
    fn transition(&self) -> Option<Duration> {
        match self.styles.get(&StyleProperty::Transition)?.value {
            Style::Transition(duration) if !duration.is_zero() => Some(duration),
            _ => None,
        }
    }

    fn rendered(&self, property: StyleProperty, at: Duration) -> Option<Style> {
        let entry = self.styles.get(&property)?;
        let (Some(previous), Some(duration)) = (entry.previous, self.transition()) else {
            return Some(entry.value);
        };
        let elapsed = at.saturating_sub(entry.changed_at);
        let progress = elapsed.as_micros() as f32 / duration.as_micros() as f32;
        Some(previous.interpolate(entry.value, progress))
    }
}

/// An in-memory [`Surface`].
///
/// Keeps elements in insertion order under their parent. Removal detaches the
/// element from its parent and drops every descendant.
///
/// Every style change is stamped with the clock last passed to
/// [`Surface::advance_clock`], which lets a renderer play the element's
/// `Transition` between the old and the new value.
#[derive(Debug, Default)]
pub struct Document {
    nodes: HashMap<ElementId, Node>,
    roots: Vec<ElementId>,
    next_id: u64,
    clock: Duration,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the document holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level elements, in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Children of an element, in insertion order.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(&id)
            .map_or(&[][..], |node| node.children.as_slice())
    }

    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    #[must_use]
    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.nodes.get(&id).map(|node| node.spec.tag.as_str())
    }

    #[must_use]
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.nodes.get(&id).and_then(|node| node.spec.text.as_deref())
    }

    #[must_use]
    pub fn label(&self, id: ElementId) -> Option<&str> {
        self.nodes.get(&id).and_then(|node| node.spec.label.as_deref())
    }

    #[must_use]
    pub fn classes(&self, id: ElementId) -> &[String] {
        self.nodes
            .get(&id)
            .map_or(&[][..], |node| node.spec.classes.as_slice())
    }

    #[must_use]
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    /// Returns the current value of a style property.
    #[must_use]
    pub fn style(&self, id: ElementId, property: StyleProperty) -> Option<Style> {
        self.nodes
            .get(&id)
            .and_then(|node| node.styles.get(&property).map(|entry| entry.value))
    }

    /// Returns the value a style property shows at time `at`.
    ///
    /// While the element's `Transition` is running after a change, the
    /// result lies between the previous and the current value.
    #[must_use]
    pub fn rendered(&self, id: ElementId, property: StyleProperty, at: Duration) -> Option<Style> {
        self.nodes
            .get(&id)
            .and_then(|node| node.rendered(property, at))
    }

    /// Time stamped on style changes.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// First element carrying `class`, in document order.
    #[must_use]
    pub fn first(&self, class: &str) -> Option<ElementId> {
        self.query(class).into_iter().next()
    }

    fn visit(&self, ids: &[ElementId], out: &mut Vec<ElementId>, class: &str) {
        for id in ids {
            if let Some(node) = self.nodes.get(id) {
                if node.spec.classes.iter().any(|c| c == class) {
                    out.push(*id);
                }
                self.visit(&node.children, out, class);
            }
        }
    }

    fn drop_subtree(&mut self, id: ElementId) {
        if let Some(node) = self.nodes.remove(&id) {
            for child in node.children {
                self.drop_subtree(child);
            }
        }
    }
}

impl Surface for Document {
    fn create(&mut self, parent: Option<ElementId>, element: ElementSpec) -> ElementId {
        let id = ElementId::from_raw(self.next_id);
        self.next_id += 1;

        let parent = parent.filter(|p| self.nodes.contains_key(p));
        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent_node) => parent_node.children.push(id),
            None => self.roots.push(id),
        }

        self.nodes.insert(
            id,
            Node {
                spec: element,
                parent,
                children: Vec::new(),
                styles: BTreeMap::new(),
            },
        );
        id
    }

    fn set_style(&mut self, id: ElementId, style: Style) -> bool {
        let clock = self.clock;
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };

        let property = style.property();
        let shown = node.rendered(property, clock);
        if node.styles.get(&property).map(|entry| entry.value) != Some(style) {
            node.styles.insert(
                property,
                StyleEntry {
                    value: style,
                    previous: shown,
                    changed_at: clock,
                },
            );
        }
        true
    }

    fn clear_style(&mut self, id: ElementId, property: StyleProperty) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.styles.remove(&property);
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: ElementId) -> bool {
        let Some(parent) = self.nodes.get(&id).map(|node| node.parent) else {
            return false;
        };

        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent_node) => parent_node.children.retain(|c| *c != id),
            None => self.roots.retain(|c| *c != id),
        }
        self.drop_subtree(id);
        true
    }

    fn query(&self, class: &str) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.visit(&self.roots, &mut out, class);
        out
    }

    fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn advance_clock(&mut self, now: Duration) {
        self.clock = self.clock.max(now);
    }
}
