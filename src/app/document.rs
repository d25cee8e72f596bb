//! Host document holding the mount points.

use std::collections::BTreeMap;

use crate::config::validation::mount_id;

/// A named element that can receive rendered markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    id: String,
    inner_html: String,
}

impl Element {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }
}

/// A minimal document: elements addressed by id.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with one empty element carrying `id`.
    pub fn with_element(id: impl Into<String>) -> Self {
        let mut document = Self::new();
        document.add_element(id);
        document
    }

    pub fn add_element(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.elements.entry(id.clone()).or_insert(Element {
            id,
            inner_html: String::new(),
        });
    }

    /// Find an element by `#id` selector.
    pub fn query_selector(&self, selector: &str) -> Option<&Element> {
        mount_id(selector).and_then(|id| self.elements.get(id))
    }

    pub fn query_selector_mut(&mut self, selector: &str) -> Option<&mut Element> {
        mount_id(selector).and_then(|id| self.elements.get_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_selector() {
        let mut document = Document::with_element("app");
        assert_eq!(document.query_selector("#app").unwrap().id(), "app");
        assert!(document.query_selector("app").is_none());
        assert!(document.query_selector("#root").is_none());

        document
            .query_selector_mut("#app")
            .unwrap()
            .set_inner_html("<p>hi</p>");
        assert_eq!(document.query_selector("#app").unwrap().inner_html(), "<p>hi</p>");
    }

    #[test]
    fn test_add_element_keeps_existing_content() {
        let mut document = Document::with_element("app");
        document.query_selector_mut("#app").unwrap().set_inner_html("x");
        document.add_element("app");
        assert_eq!(document.query_selector("#app").unwrap().inner_html(), "x");
    }
}
