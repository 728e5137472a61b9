use raylib::prelude::*;

use crate::constants::*;
use crate::image_container::FadingImage;
use crate::page::Document;
use crate::tabs::{INDICATOR_SELECTED, PanelId, PanelTable};

const ABOUT_CODE_TEXT: &[&str] = &[
    "The visualizations are rendered from simulation output.",
    "Source code and build instructions are distributed with the images.",
];

const CITE_US_TEXT: &[&str] = &[
    "If you use these visualizations in your work,",
    "please cite the accompanying publication.",
];

/// Screen rectangle of the tab at `position`, as (x, y, width, height).
pub fn tab_bounds(position: usize) -> (i32, i32, i32, i32) {
    (PANEL_MARGIN + position as i32 * TAB_WIDTH, 0, TAB_WIDTH, TAB_HEIGHT)
}

/// Index of the tab under `(x, y)`, if any.
pub fn tab_at(x: f32, y: f32, count: usize) -> Option<usize> {
    (0..count).find(|&position| {
        let (tx, ty, tw, th) = tab_bounds(position);
        x >= tx as f32 && x < (tx + tw) as f32 && y >= ty as f32 && y < (ty + th) as f32
    })
}

pub fn content_area() -> Rectangle {
    Rectangle::new(
        PANEL_MARGIN as f32,
        (TAB_HEIGHT + PANEL_MARGIN) as f32,
        (RENDER_WIDTH - 2 * PANEL_MARGIN) as f32,
        (RENDER_HEIGHT - TAB_HEIGHT - 2 * PANEL_MARGIN) as f32,
    )
}

pub fn draw_tabs(d: &mut impl RaylibDraw, document: &Document, table: &PanelTable) {
    d.draw_rectangle(0, 0, RENDER_WIDTH, TAB_HEIGHT, Color::new(24, 24, 28, 255));

    for (position, entry) in table.entries().iter().enumerate() {
        let selected = document
            .get_element_by_id(&entry.indicator)
            .is_some_and(|indicator| indicator.class_name == INDICATOR_SELECTED);
        let (background, foreground) = if selected {
            (Color::new(60, 60, 70, 255), Color::WHITE)
        } else {
            (Color::new(24, 24, 28, 255), Color::GRAY)
        };

        let (x, y, w, h) = tab_bounds(position);
        d.draw_rectangle(x, y, w, h, background);
        d.draw_text(&format!("{} {}", position + 1, entry.label), x + 14, y + 14, 20, foreground);
    }
}

pub fn draw_panels(d: &mut impl RaylibDraw, document: &Document, table: &PanelTable, images: &FadingImage) {
    let area = content_area();

    for entry in table.entries() {
        let shown = document
            .get_element_by_id(&entry.panel)
            .is_some_and(|panel| panel.is_shown());
        if !shown {
            continue;
        }

        match entry.panel.parse::<PanelId>() {
            Ok(PanelId::Slideshow) => images.draw(d, area),
            Ok(PanelId::AboutCode) => draw_lines(d, area, ABOUT_CODE_TEXT),
            Ok(PanelId::CiteUs) => draw_lines(d, area, CITE_US_TEXT),
            Err(_) => draw_lines(d, area, &[entry.label.as_str()]),
        }
    }
}

fn draw_lines(d: &mut impl RaylibDraw, area: Rectangle, lines: &[&str]) {
    for (row, line) in lines.iter().enumerate() {
        d.draw_text(line, area.x as i32, area.y as i32 + row as i32 * 32, 24, Color::RAYWHITE);
    }
}
