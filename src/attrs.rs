use yew::virtual_dom::VNode;
use yew::{AttrValue, Html};

use crate::style::cn;

/// Ordered bag of attributes forwarded verbatim to a component's root element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attrs(Vec<(&'static str, AttrValue)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<AttrValue>) -> Self {
        self.set(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| &**value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> {
        self.0.iter().map(|(key, value)| (*key, value))
    }

    /// Layer `overrides` on top of `self`. `class` is composed with [`cn`] and
    /// keys in `protected` keep the base value.
    pub fn merge(&self, overrides: &Attrs, protected: &[&str]) -> Attrs {
        let mut merged = self.clone();

        for (key, value) in overrides.iter() {
            if protected.contains(&key) {
                continue;
            }
            let value = match (key, merged.get(key)) {
                ("class", Some(base)) => AttrValue::from(cn([base, &**value])),
                _ => value.clone(),
            };
            merged.set(key, value);
        }

        merged
    }

    // Replaces what the markup already set; non-element nodes pass through.
    pub fn apply(&self, mut node: Html) -> Html {
        if self.is_empty() {
            return node;
        }
        if let VNode::VTag(tag) = &mut node {
            for (key, value) in self.iter() {
                tag.add_attribute(key, value.clone());
            }
        }
        node
    }

    fn set(&mut self, key: &'static str, value: AttrValue) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }
}

impl<const N: usize> From<[(&'static str, &'static str); N]> for Attrs {
    fn from(pairs: [(&'static str, &'static str); N]) -> Self {
        pairs
            .into_iter()
            .fold(Attrs::new(), |attrs, (key, value)| attrs.with(key, value))
    }
}
