//! Virtual canvas layout.
//!
//! Lays the page out on a canvas taller than the terminal, assigning
//! each panel a stable id and a row extent. The scroll offset then picks
//! which rows are on screen; the reveal watchers work entirely in these
//! page coordinates.

use unfurl_core::ElementId;
use unfurl_motion::RowSpan;

use crate::page::{Page, Panel, SectionKind};

/// Widest the content column gets on large terminals.
const MAX_CONTENT_WIDTH: u16 = 84;

/// Rows of a metric panel: the glyph art plus its label and a gap.
const METRIC_PANEL_ROWS: u16 = unfurl_fonts::GLYPH_ROWS as u16 + 2;

/// A panel placed on the canvas.
#[derive(Debug, Clone)]
pub struct PanelSlot {
    pub id: ElementId,
    /// Index of the owning section in the page.
    pub section: usize,
    /// Index of the panel within its section.
    pub panel: usize,
    /// Row extent on the canvas.
    pub span: RowSpan,
    /// Left edge in screen columns.
    pub x: u16,
    pub width: u16,
}

/// A non-revealing chrome row: headings and the hero lines.
#[derive(Debug, Clone)]
pub struct ChromeSlot {
    pub row: i32,
    pub kind: ChromeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeKind {
    /// The page title line.
    Title,
    /// The rotating tagline line.
    Tagline,
    /// A section heading.
    Heading(usize),
}

/// The laid-out page.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub slots: Vec<PanelSlot>,
    pub chrome: Vec<ChromeSlot>,
    /// First canvas row of each section, for menu navigation.
    pub section_tops: Vec<i32>,
    pub total_height: i32,
    /// Terminal width this layout was computed for.
    pub width: u16,
}

impl PageLayout {
    /// Find the slot for an element, if it still exists.
    pub fn slot(&self, id: ElementId) -> Option<&PanelSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }
}

/// Lay the page out for the given terminal width.
///
/// Ids are assigned in section/panel order, so the same page yields the
/// same ids at every width and relocated watchers stay accurate across
/// resizes.
pub fn compute(page: &Page, width: u16) -> PageLayout {
    let content_width = width.min(MAX_CONTENT_WIDTH).max(20);
    let margin = width.saturating_sub(content_width) / 2;

    let mut slots = Vec::new();
    let mut chrome = Vec::new();
    let mut section_tops = Vec::new();
    let mut next_id = 0u32;
    let mut y: i32 = 1;

    for (si, section) in page.sections.iter().enumerate() {
        section_tops.push(y);

        if section.kind == SectionKind::Hero {
            chrome.push(ChromeSlot {
                row: y,
                kind: ChromeKind::Title,
            });
            y += 2;
            if !page.tagline.is_empty() {
                chrome.push(ChromeSlot {
                    row: y,
                    kind: ChromeKind::Tagline,
                });
                y += 2;
            }
        } else if section.heading.is_some() {
            chrome.push(ChromeSlot {
                row: y,
                kind: ChromeKind::Heading(si),
            });
            y += 2;
        }

        match section.kind {
            SectionKind::Tags => {
                // Tags flow left to right, wrapping within the column.
                let mut x = margin;
                let mut row = y;
                for (pi, panel) in section.panels.iter().enumerate() {
                    let tag_width = panel.title.chars().count() as u16 + 2;
                    if x + tag_width > margin + content_width && x > margin {
                        x = margin;
                        row += 2;
                    }
                    slots.push(PanelSlot {
                        id: ElementId(next_id),
                        section: si,
                        panel: pi,
                        span: RowSpan::new(row, 1),
                        x,
                        width: tag_width,
                    });
                    next_id += 1;
                    x += tag_width + 2;
                }
                y = row + 2;
            }
            _ => {
                for (pi, panel) in section.panels.iter().enumerate() {
                    let height = panel_height(section.kind, panel);
                    slots.push(PanelSlot {
                        id: ElementId(next_id),
                        section: si,
                        panel: pi,
                        span: RowSpan::new(y, height),
                        x: margin,
                        width: content_width,
                    });
                    next_id += 1;
                    y += i32::from(height) + 1;
                }
            }
        }

        // Gap between sections.
        y += 1;
    }

    PageLayout {
        slots,
        chrome,
        section_tops,
        total_height: y,
        width,
    }
}

/// Rows a stacked panel occupies on the canvas.
fn panel_height(kind: SectionKind, panel: &Panel) -> u16 {
    let body_rows = if panel.body.is_empty() {
        0
    } else {
        panel.body.lines().count() as u16
    };
    match kind {
        SectionKind::Hero => body_rows.max(1),
        SectionKind::Cards => 1 + body_rows,
        SectionKind::List => 1,
        SectionKind::Metrics => METRIC_PANEL_ROWS,
        // Handled by the flow branch above.
        SectionKind::Tags => 1,
    }
}
