use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::page::{DISPLAY_BLOCK, DISPLAY_NONE, Document, Element};

/// Indicator class of the tab whose panel is shown.
pub const INDICATOR_SELECTED: &str = "off";
/// Indicator class of every other tab.
pub const INDICATOR_UNSELECTED: &str = "on";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    #[error("element not found: {0}")]
    ElementNotFound(String),
    #[error("unknown panel: {0}")]
    UnknownPanel(String),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PanelId {
    Slideshow,
    AboutCode,
    CiteUs,
}

impl PanelId {
    pub const ALL: [PanelId; 3] = [PanelId::Slideshow, PanelId::AboutCode, PanelId::CiteUs];

    /// Element id of the panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::Slideshow => "slideshow_content",
            PanelId::AboutCode => "about_code_content",
            PanelId::CiteUs => "cite_us_content",
        }
    }

    /// Element id of the panel's tab.
    pub fn indicator(&self) -> &'static str {
        match self {
            PanelId::Slideshow => "visualizations",
            PanelId::AboutCode => "about_code",
            PanelId::CiteUs => "cite_us",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PanelId::Slideshow => "Visualizations",
            PanelId::AboutCode => "About the code",
            PanelId::CiteUs => "Cite us",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelId {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelId::ALL
            .into_iter()
            .find(|panel| panel.as_str() == s)
            .ok_or_else(|| TabError::UnknownPanel(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub panel: String,
    pub indicator: String,
    pub label: String,
}

/// The panels the toggler knows about, in page order.
#[derive(Debug, Clone)]
pub struct PanelTable {
    entries: Vec<PanelEntry>,
}

impl PanelTable {
    pub fn new(entries: Vec<PanelEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(
            PanelId::ALL
                .iter()
                .map(|id| PanelEntry {
                    panel: id.as_str().to_string(),
                    indicator: id.indicator().to_string(),
                    label: id.label().to_string(),
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[PanelEntry] {
        &self.entries
    }
}

/// Shows `item_display` and hides every other known panel.
///
/// The requested element is shown before anything else is looked up, so a
/// missing element further down the table leaves the earlier changes applied.
pub fn set_display(document: &mut Document, table: &PanelTable, item_display: &str) -> Result<(), TabError> {
    element(document, item_display)?.display = DISPLAY_BLOCK.to_string();

    for entry in table.entries() {
        if entry.panel != item_display {
            element(document, &entry.panel)?.display = DISPLAY_NONE.to_string();
            element(document, &entry.indicator)?.class_name = INDICATOR_UNSELECTED.to_string();
        } else {
            element(document, &entry.indicator)?.class_name = INDICATOR_SELECTED.to_string();
        }
    }

    tracing::debug!(panel = item_display, "panel displayed");
    Ok(())
}

fn element<'a>(document: &'a mut Document, id: &str) -> Result<&'a mut Element, TabError> {
    document
        .get_element_by_id_mut(id)
        .ok_or_else(|| TabError::ElementNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> (Document, PanelTable) {
        let table = PanelTable::standard();
        (Document::standard(&table), table)
    }

    fn shown(document: &Document, id: &str) -> bool {
        document.get_element_by_id(id).unwrap().is_shown()
    }

    fn class(document: &Document, id: &str) -> String {
        document.get_element_by_id(id).unwrap().class_name.clone()
    }

    #[test]
    fn base_panel_shows_alone() {
        let (mut document, table) = page();
        set_display(&mut document, &table, "cite_us_content").unwrap();
        set_display(&mut document, &table, "slideshow_content").unwrap();

        assert!(shown(&document, "slideshow_content"));
        assert!(!shown(&document, "about_code_content"));
        assert!(!shown(&document, "cite_us_content"));

        assert_eq!(class(&document, "visualizations"), "off");
        assert_eq!(class(&document, "about_code"), "on");
        assert_eq!(class(&document, "cite_us"), "on");
    }

    #[test]
    fn second_panel_hides_the_base() {
        let (mut document, table) = page();
        set_display(&mut document, &table, "about_code_content").unwrap();

        assert!(shown(&document, "about_code_content"));
        assert!(!shown(&document, "slideshow_content"));
        assert!(!shown(&document, "cite_us_content"));

        assert_eq!(class(&document, "about_code"), "off");
        assert_eq!(class(&document, "visualizations"), "on");
        assert_eq!(class(&document, "cite_us"), "on");
    }

    #[test]
    fn toggling_is_idempotent() {
        let (mut document, table) = page();
        set_display(&mut document, &table, "cite_us_content").unwrap();
        set_display(&mut document, &table, "cite_us_content").unwrap();

        assert!(shown(&document, "cite_us_content"));
        assert!(!shown(&document, "slideshow_content"));
        assert_eq!(class(&document, "cite_us"), "off");
    }

    #[test]
    fn unknown_panel_is_element_not_found() {
        let (mut document, table) = page();
        assert_eq!(
            set_display(&mut document, &table, "gallery"),
            Err(TabError::ElementNotFound("gallery".into()))
        );
        // Nothing was touched.
        assert!(shown(&document, "slideshow_content"));
    }

    #[test]
    fn missing_indicator_fails_after_partial_update() {
        let (mut document, table) = page();
        document.remove("cite_us");

        assert_eq!(
            set_display(&mut document, &table, "about_code_content"),
            Err(TabError::ElementNotFound("cite_us".into()))
        );
        assert!(shown(&document, "about_code_content"));
        assert!(!shown(&document, "slideshow_content"));
        assert!(!shown(&document, "cite_us_content"));
    }

    #[test]
    fn panel_ids_round_trip_through_element_ids() {
        for panel in PanelId::ALL {
            assert_eq!(panel.to_string().parse::<PanelId>(), Ok(panel));
        }
        assert_eq!("visualizations".parse::<PanelId>(), Err(TabError::UnknownPanel("visualizations".into())));
    }
}
