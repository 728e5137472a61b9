use std::collections::HashMap;

use crate::tabs::PanelTable;

pub const DISPLAY_BLOCK: &str = "block";
pub const DISPLAY_NONE: &str = "none";

/// The style bits of a page element the tab toggler touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub display: String,
    pub class_name: String,
}

impl Element {
    pub fn is_shown(&self) -> bool {
        self.display != DISPLAY_NONE
    }
}

/// Elements addressed by id.
#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three-panel page as it loads: slideshow shown, the rest hidden.
    pub fn standard(table: &PanelTable) -> Self {
        let mut document = Self::new();
        for (position, entry) in table.entries().iter().enumerate() {
            let (display, class_name) = if position == 0 { (DISPLAY_BLOCK, "off") } else { (DISPLAY_NONE, "on") };
            document.insert(entry.panel.as_str(), Element { display: display.into(), class_name: String::new() });
            document.insert(entry.indicator.as_str(), Element { display: DISPLAY_BLOCK.into(), class_name: class_name.into() });
        }
        document
    }

    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    #[cfg(test)]
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_page_shows_slideshow_first() {
        let document = Document::standard(&PanelTable::standard());

        let slideshow = document.get_element_by_id("slideshow_content").unwrap();
        assert!(slideshow.is_shown());
        assert!(!document.get_element_by_id("about_code_content").unwrap().is_shown());
        assert!(!document.get_element_by_id("cite_us_content").unwrap().is_shown());

        assert_eq!(document.get_element_by_id("visualizations").unwrap().class_name, "off");
        assert_eq!(document.get_element_by_id("about_code").unwrap().class_name, "on");
        assert_eq!(document.get_element_by_id("cite_us").unwrap().class_name, "on");
    }

    #[test]
    fn unknown_id_is_absent() {
        let document = Document::standard(&PanelTable::standard());
        assert!(document.get_element_by_id("gallery").is_none());
    }
}
