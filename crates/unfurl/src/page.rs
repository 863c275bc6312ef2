//! Page content model.
//!
//! A page is a list of sections, each holding panels that reveal as they
//! scroll into view. Pages load from a JSON document or fall back to the
//! built-in demo page.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use unfurl_core::RevealStyle;

/// A page of content for the viewer.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Page title, shown in the hero and the header bar.
    pub title: String,
    /// Static lead-in for the rotating tagline word.
    #[serde(default)]
    pub tagline_lead: String,
    /// Words cycled through after the tagline lead.
    #[serde(default)]
    pub tagline: Vec<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A titled group of panels sharing a reveal style and stagger.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub panels: Vec<Panel>,
    /// Reveal style name overriding the kind's default.
    #[serde(default)]
    pub style: Option<String>,
    /// Per-panel reveal delay step in milliseconds: panel `i` waits
    /// `i * stagger_ms` after crossing the threshold.
    #[serde(default)]
    pub stagger_ms: u64,
}

/// What a section's panels look like and how they lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Title, rotating tagline, and intro text.
    Hero,
    /// Stacked cards with a title and body.
    Cards,
    /// Compact single-line items.
    List,
    /// Short labels flowing left to right.
    Tags,
    /// Large animated numeric values with a label.
    Metrics,
}

impl SectionKind {
    /// The reveal style a section of this kind uses unless overridden.
    fn default_style(self, fallback: RevealStyle) -> RevealStyle {
        match self {
            SectionKind::Hero => fallback,
            SectionKind::Cards => RevealStyle::Rise,
            SectionKind::List => RevealStyle::SlideRight,
            SectionKind::Tags => RevealStyle::Scale,
            SectionKind::Metrics => RevealStyle::Rise,
        }
    }
}

/// A single revealable unit of content.
#[derive(Debug, Clone, Deserialize)]
pub struct Panel {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Metric source text, e.g. `"98.6%"`; present only on metric panels.
    #[serde(default)]
    pub value: Option<String>,
    /// Explicit reveal delay, overriding the section stagger.
    #[serde(default)]
    pub reveal_delay_ms: Option<u64>,
}

impl Section {
    /// Resolve the section's reveal style against the configured default.
    pub fn reveal_style(&self, fallback: RevealStyle) -> RevealStyle {
        self.style
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_else(|| self.kind.default_style(fallback))
    }

    /// The reveal delay for the panel at `index`.
    pub fn reveal_delay_ms(&self, index: usize) -> u64 {
        self.panels
            .get(index)
            .and_then(|panel| panel.reveal_delay_ms)
            .unwrap_or(index as u64 * self.stagger_ms)
    }
}

impl Page {
    /// Load a page document from a JSON file. `None` when the file
    /// cannot be read or parsed; the caller falls back to the demo page.
    pub fn load(path: &Path) -> Option<Self> {
        let text = fs::read_to_string(path).ok()?;
        serde_json::from_str(&text).ok()
    }

    /// The built-in demo page.
    pub fn demo() -> Self {
        Self {
            title: "unfurl studio".to_string(),
            tagline_lead: "software that is".to_string(),
            tagline: ["dependable", "measured", "quietly fast"]
                .map(String::from)
                .to_vec(),
            sections: vec![
                Section {
                    kind: SectionKind::Hero,
                    heading: None,
                    panels: vec![Panel {
                        title: String::new(),
                        body: "A small engineering practice for teams that want\n\
                               their infrastructure boring and their product not."
                            .to_string(),
                        value: None,
                        reveal_delay_ms: None,
                    }],
                    style: None,
                    stagger_ms: 0,
                },
                Section {
                    kind: SectionKind::Cards,
                    heading: Some("What we do".to_string()),
                    panels: vec![
                        card(
                            "Cloud foundations",
                            "Accounts, networks, and pipelines laid out once,\nproperly, so nobody has to think about them again.",
                        ),
                        card(
                            "Product engineering",
                            "Senior pairs embedded with your team, shipping\nfrom the first week.",
                        ),
                        card(
                            "Data & insight",
                            "Warehouse, models, and dashboards that answer\nquestions people actually ask.",
                        ),
                        card(
                            "Managed operations",
                            "On-call, patching, and capacity handled, with a\nmonthly report you can forward to the board.",
                        ),
                    ],
                    style: None,
                    stagger_ms: 100,
                },
                Section {
                    kind: SectionKind::List,
                    heading: Some("How we work".to_string()),
                    panels: vec![
                        list_item("Listen first", "two weeks of discovery before any proposal"),
                        list_item("Small batches", "every change shippable, every week demoable"),
                        list_item("Leave notes", "runbooks and diagrams, not tribal knowledge"),
                    ],
                    style: None,
                    stagger_ms: 200,
                },
                Section {
                    kind: SectionKind::Tags,
                    heading: Some("Tooling".to_string()),
                    panels: ["rust", "postgres", "kubernetes", "terraform", "grafana", "nats"]
                        .map(tag)
                        .to_vec(),
                    style: None,
                    stagger_ms: 50,
                },
                Section {
                    kind: SectionKind::Metrics,
                    heading: Some("Outcomes".to_string()),
                    panels: vec![
                        metric("98.6%", "uptime across managed fleets last year"),
                        metric("250x", "more deploys per month after pipeline work"),
                        metric("3.5x", "median return on replatforming engagements"),
                        metric("120", "releases shipped for clients this year"),
                    ],
                    style: None,
                    stagger_ms: 150,
                },
            ],
        }
    }
}

fn card(title: &str, body: &str) -> Panel {
    Panel {
        title: title.to_string(),
        body: body.to_string(),
        value: None,
        reveal_delay_ms: None,
    }
}

fn list_item(title: &str, body: &str) -> Panel {
    Panel {
        title: title.to_string(),
        body: body.to_string(),
        value: None,
        reveal_delay_ms: None,
    }
}

fn tag(label: &str) -> Panel {
    Panel {
        title: label.to_string(),
        body: String::new(),
        value: None,
        reveal_delay_ms: None,
    }
}

fn metric(value: &str, label: &str) -> Panel {
    Panel {
        title: label.to_string(),
        body: String::new(),
        value: Some(value.to_string()),
        reveal_delay_ms: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_page_has_metric_values() {
        let page = Page::demo();
        let metrics = page
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::Metrics)
            .unwrap();
        assert!(metrics.panels.iter().all(|p| p.value.is_some()));
    }

    #[test]
    fn test_stagger_assigns_indexed_delays() {
        let page = Page::demo();
        let cards = page
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::Cards)
            .unwrap();
        assert_eq!(cards.reveal_delay_ms(0), 0);
        assert_eq!(cards.reveal_delay_ms(2), 200);
    }

    #[test]
    fn test_explicit_delay_overrides_stagger() {
        let section = Section {
            kind: SectionKind::Cards,
            heading: None,
            panels: vec![Panel {
                title: String::new(),
                body: String::new(),
                value: None,
                reveal_delay_ms: Some(700),
            }],
            style: None,
            stagger_ms: 100,
        };
        assert_eq!(section.reveal_delay_ms(0), 700);
    }

    #[test]
    fn test_reveal_style_resolution() {
        let mut section = Section {
            kind: SectionKind::Cards,
            heading: None,
            panels: Vec::new(),
            style: None,
            stagger_ms: 0,
        };
        assert_eq!(section.reveal_style(RevealStyle::Fade), RevealStyle::Rise);

        section.style = Some("slideleft".to_string());
        assert_eq!(
            section.reveal_style(RevealStyle::Fade),
            RevealStyle::SlideLeft
        );

        section.style = Some("bogus".to_string());
        assert_eq!(section.reveal_style(RevealStyle::Fade), RevealStyle::Rise);
    }

    #[test]
    fn test_parse_page_document() {
        let page: Page = serde_json::from_str(
            r#"{
                "title": "acme",
                "tagline": ["sharp"],
                "sections": [
                    {
                        "kind": "metrics",
                        "heading": "Numbers",
                        "stagger_ms": 100,
                        "panels": [
                            {"title": "uptime", "value": "99%"}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(page.title, "acme");
        assert_eq!(page.sections[0].kind, SectionKind::Metrics);
        assert_eq!(page.sections[0].panels[0].value.as_deref(), Some("99%"));
    }
}
