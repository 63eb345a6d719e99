use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Attribute names owned by the host element machinery, never carried from a placeholder to
/// its resolved item.
pub const RESERVED_ATTRIBUTES: &[&str] = &["class", "style", "id"];

/// Style properties the grid controls for layout, never carried from a placeholder.
pub const RESERVED_STYLES: &[&str] = &["top", "left", "transform", "display"];

/// The host's handle to one rendered item (or placeholder).
///
/// The grid never inspects nodes. It only forwards host mutations so they can survive a
/// placeholder being swapped for its item.
pub trait Node {
    fn set_attribute(&mut self, name: &str, value: &str);
    fn set_style(&mut self, property: &str, value: &str);
    fn add_class(&mut self, class: &str);
}

/// Mutations applied to a placeholder since it was inserted.
///
/// Attributes and styles are assignments (last write wins); classes accumulate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decorations {
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    classes: Vec<String>,
}

impl Decorations {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.styles.is_empty() && self.classes.is_empty()
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        assign(&mut self.attributes, name, value);
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        assign(&mut self.styles, property, value);
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Replays the recorded mutations onto `node`, skipping reserved names.
    pub fn transplant_onto<N: Node + ?Sized>(&self, node: &mut N) {
        for (name, value) in self.attributes() {
            if !RESERVED_ATTRIBUTES.contains(&name) {
                node.set_attribute(name, value);
            }
        }
        for (property, value) in self.styles() {
            if !RESERVED_STYLES.contains(&property) {
                node.set_style(property, value);
            }
        }
        for class in self.classes() {
            node.add_class(class);
        }
    }
}

fn assign(entries: &mut Vec<(String, String)>, name: &str, value: &str) {
    if let Some(entry) = entries.iter_mut().find(|(k, _)| k == name) {
        entry.1 = value.to_string();
    } else {
        entries.push((name.to_string(), value.to_string()));
    }
}

/// A stand-in node bound to one pending fetch.
#[derive(Clone, Debug)]
pub struct Placeholder<N> {
    node: N,
    decorations: Decorations,
}

impl<N: Node> Placeholder<N> {
    pub(crate) fn new(node: N) -> Self {
        Self {
            node,
            decorations: Decorations::default(),
        }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        self.node.set_attribute(name, value);
        self.decorations.set_attribute(name, value);
    }

    pub(crate) fn set_style(&mut self, property: &str, value: &str) {
        self.node.set_style(property, value);
        self.decorations.set_style(property, value);
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        self.node.add_class(class);
        self.decorations.add_class(class);
    }

    /// Carries the recorded mutations onto the item replacing this placeholder.
    pub(crate) fn transplant_onto(&self, item: &mut N) {
        self.decorations.transplant_onto(item);
    }
}
