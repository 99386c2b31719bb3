//! Render-description tree
//!
//! Components produce a [`Node`] tree; the host framework walks it and mounts
//! real UI. The tree is ephemeral: built per render pass, discarded after the
//! host consumes it. Styling travels as utility class names on [`Element`],
//! never as computed style values.
//!
//! # Example
//!
//! ```
//! use weft_core::{el, text};
//!
//! let node = el("button")
//!     .class("inline-flex items-center")
//!     .attr("type", "button")
//!     .child(text("Save"))
//!     .into_node();
//! assert_eq!(
//!     node.to_html(),
//!     r#"<button class="inline-flex items-center" type="button">Save</button>"#
//! );
//! ```

use smallvec::SmallVec;

/// One node of a render description
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-rendered markup included verbatim (icon SVG). The caller owns
    /// escaping; component code only feeds this from trusted constants.
    Raw(String),
}

impl Node {
    /// Render the tree as an HTML string.
    ///
    /// The host framework consumes the tree structurally; this rendering
    /// exists for testing, snapshots, and static documentation output.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(&escape(s)),
            Node::Raw(s) => out.push_str(s),
            Node::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                if !el.classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&escape(&el.classes));
                    out.push('"');
                }
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape(value));
                    out.push('"');
                }
                if el.children.is_empty() && is_void(&el.tag) {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }

    /// The element's class string, if this node is an element
    pub fn classes(&self) -> Option<&str> {
        match self {
            Node::Element(el) => Some(el.classes.as_str()),
            Node::Text(_) | Node::Raw(_) => None,
        }
    }

    /// Find the first descendant element (self included) with the given tag
    pub fn find(&self, tag: &str) -> Option<&Element> {
        match self {
            Node::Text(_) | Node::Raw(_) => None,
            Node::Element(el) => {
                if el.tag == tag {
                    return Some(el);
                }
                el.children.iter().find_map(|c| c.find(tag))
            }
        }
    }
}

/// An element in the render tree
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: String,
    pub attrs: SmallVec<[(&'static str, String); 4]>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: String::new(),
            attrs: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Set the element's class string (replaces any previous value)
    pub fn class(mut self, classes: impl Into<String>) -> Self {
        self.classes = classes.into();
        self
    }

    /// Set an attribute; setting the same name again replaces the value
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    /// Append a child node
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child node when `condition` holds
    pub fn child_if(self, condition: bool, child: impl Into<Node>) -> Self {
        if condition {
            self.child(child)
        } else {
            self
        }
    }

    /// Append a text child
    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(Node::Text(s.into()))
    }

    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    /// Look up an attribute value by name
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// Create an element with the given tag
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

/// Create a text node
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

/// Create a raw markup node
pub fn raw(s: impl Into<String>) -> Node {
    Node::Raw(s.into())
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "input" | "img" | "br" | "hr")
}

fn escape(s: &str) -> String {
    if !s.contains(['&', '<', '>', '"']) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder() {
        let node = el("span").class("text-sm").text("hi").into_node();
        assert_eq!(node.to_html(), r#"<span class="text-sm">hi</span>"#);
    }

    #[test]
    fn test_void_element() {
        let node = el("input").attr("type", "text").into_node();
        assert_eq!(node.to_html(), r#"<input type="text" />"#);
    }

    #[test]
    fn test_attr_replaces_on_same_name() {
        let node = el("div").attr("role", "dialog").attr("role", "alertdialog");
        assert_eq!(node.attr_value("role"), Some("alertdialog"));
        assert_eq!(node.attrs.len(), 1);
    }

    #[test]
    fn test_text_is_escaped() {
        let node = text("a < b & \"c\"");
        assert_eq!(node.to_html(), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_find_descendant() {
        let node = el("div")
            .child(el("span").class("inner").text("x"))
            .into_node();
        assert_eq!(node.find("span").map(|e| e.classes.as_str()), Some("inner"));
        assert!(node.find("button").is_none());
    }
}
