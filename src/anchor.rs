//! Section anchors: the in-page navigation contract.
//!
//! Every section and every navigation entry is keyed by an [`Anchor`]. The
//! navigation list is derived from the same presence test the composer uses,
//! so a nav entry and its section cannot drift apart.

use crate::content::Portfolio;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// A content area of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Anchor {
    About,
    Experience,
    Education,
    Skills,
    Languages,
    Leadership,
    Awards,
    Publications,
    Activities,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 10] = [
        Anchor::About,
        Anchor::Experience,
        Anchor::Education,
        Anchor::Skills,
        Anchor::Languages,
        Anchor::Leadership,
        Anchor::Awards,
        Anchor::Publications,
        Anchor::Activities,
        Anchor::Contact,
    ];

    /// Element id used for the section and the `#fragment` of links to it.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::About => "about",
            Anchor::Experience => "experience",
            Anchor::Education => "education",
            Anchor::Skills => "skills",
            Anchor::Languages => "languages",
            Anchor::Leadership => "leadership",
            Anchor::Awards => "awards",
            Anchor::Publications => "publications",
            Anchor::Activities => "activities",
            Anchor::Contact => "contact",
        }
    }

    /// Section heading, also used as the navigation label.
    pub fn title(self) -> &'static str {
        match self {
            Anchor::About => "About",
            Anchor::Experience => "Experience",
            Anchor::Education => "Education",
            Anchor::Skills => "Skills",
            Anchor::Languages => "Languages",
            Anchor::Leadership => "Leadership",
            Anchor::Awards => "Awards",
            Anchor::Publications => "Scholarship",
            Anchor::Activities => "Activities",
            Anchor::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Whether this area has content to render.
    fn is_present(self, site: &Portfolio) -> bool {
        match self {
            Anchor::Education => !site.education.is_empty(),
            Anchor::Leadership => !site.leadership.is_empty(),
            Anchor::Awards => !site.awards.is_empty(),
            _ => true,
        }
    }
}

/// Sections rendered for `site`, in page order.
pub fn sections(site: &Portfolio) -> Vec<Anchor> {
    Anchor::ALL
        .into_iter()
        .filter(|a| a.is_present(site))
        .collect()
}

/// Footer quick links, limited to sections that exist.
pub fn quick_links(site: &Portfolio) -> Vec<Anchor> {
    const QUICK: [Anchor; 5] = [
        Anchor::About,
        Anchor::Experience,
        Anchor::Languages,
        Anchor::Activities,
        Anchor::Contact,
    ];
    QUICK.into_iter().filter(|a| a.is_present(site)).collect()
}

/// GitHub heading anchor slug.
///
/// Lowercase, keep alphanumerics, spaces and hyphens, then turn spaces into
/// hyphens. Everything else (punctuation, `&`, `/`, `_`) is dropped.
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

static RE_SECTION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<section\s+id="([^"]+)""#).unwrap());

static RE_FRAGMENT_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"href="#([^"]+)""##).unwrap());

static RE_NAV_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<nav\b[^>]*>(.*?)</nav>").unwrap());

/// Result of auditing rendered HTML for anchor consistency.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AnchorReport {
    /// Navigation targets with no section carrying that id.
    pub orphan_links: Vec<String>,
    /// Sections no navigation entry points at.
    pub orphan_sections: Vec<String>,
    /// Section ids used more than once.
    pub duplicate_sections: Vec<String>,
    /// In-page links anywhere in the document that resolve to nothing.
    pub dangling_links: Vec<String>,
}

impl AnchorReport {
    pub fn is_clean(&self) -> bool {
        self.orphan_links.is_empty()
            && self.orphan_sections.is_empty()
            && self.duplicate_sections.is_empty()
            && self.dangling_links.is_empty()
    }
}

impl std::fmt::Display for AnchorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let groups = [
            ("navigation targets without a section", &self.orphan_links),
            ("sections missing from navigation", &self.orphan_sections),
            ("duplicate section ids", &self.duplicate_sections),
            ("dangling in-page links", &self.dangling_links),
        ];
        let mut first = true;
        for (label, ids) in groups {
            if ids.is_empty() {
                continue;
            }
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", label, ids.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

/// Compare the `<nav>` targets of `html` against its `<section id>`s.
pub fn audit(html: &str) -> AnchorReport {
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for cap in RE_SECTION_ID.captures_iter(html) {
        let id = cap[1].to_string();
        if !seen.insert(id.clone()) {
            duplicates.insert(id);
        }
    }

    let nav: BTreeSet<String> = RE_NAV_BLOCK
        .captures_iter(html)
        .flat_map(|block| {
            RE_FRAGMENT_HREF
                .captures_iter(block.get(1).map_or("", |m| m.as_str()))
                .map(|c| c[1].to_string())
                .collect::<Vec<_>>()
        })
        .collect();

    let all_links: BTreeSet<String> = RE_FRAGMENT_HREF
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect();

    AnchorReport {
        orphan_links: nav.difference(&seen).cloned().collect(),
        orphan_sections: seen.difference(&nav).cloned().collect(),
        duplicate_sections: duplicates.into_iter().collect(),
        dangling_links: all_links
            .difference(&seen)
            .filter(|id| !nav.contains(*id))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ActivityItem, Area, EducationEntry, PORTFOLIO};

    #[test]
    fn ids_are_unique() {
        let ids: BTreeSet<&str> = Anchor::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), Anchor::ALL.len());
    }

    #[test]
    fn canonical_sections_in_order() {
        let ids: Vec<&str> = sections(&PORTFOLIO).iter().map(|a| a.id()).collect();
        assert_eq!(
            ids,
            ["about", "experience", "skills", "languages", "publications", "activities", "contact"]
        );
    }

    #[test]
    fn optional_areas_appear_when_filled() {
        let site = Portfolio {
            education: Area {
                subtitle: None,
                entries: &[EducationEntry {
                    institution: "Example University",
                    degree: "Ph.D.",
                    details: &[],
                }],
            },
            awards: Area {
                subtitle: None,
                entries: &[ActivityItem::Plain("Best poster")],
            },
            ..PORTFOLIO
        };
        let ids: Vec<&str> = sections(&site).iter().map(|a| a.id()).collect();
        assert_eq!(
            ids,
            [
                "about",
                "experience",
                "education",
                "skills",
                "languages",
                "awards",
                "publications",
                "activities",
                "contact"
            ]
        );
    }

    #[test]
    fn quick_links_subset() {
        let ids: Vec<&str> = quick_links(&PORTFOLIO).iter().map(|a| a.id()).collect();
        assert_eq!(ids, ["about", "experience", "languages", "activities", "contact"]);
    }

    #[test]
    fn publications_is_labelled_scholarship() {
        assert_eq!(Anchor::Publications.title(), "Scholarship");
        assert_eq!(Anchor::Publications.href(), "#publications");
    }

    #[test]
    fn slug_simple() {
        assert_eq!(github_slug("Core strengths"), "core-strengths");
    }

    #[test]
    fn slug_drops_punctuation() {
        assert_eq!(github_slug("GxP / Quality Systems"), "gxp--quality-systems");
        assert_eq!(github_slug("Immunoassays & Biochemistry"), "immunoassays--biochemistry");
    }

    #[test]
    fn audit_clean_document() {
        let html = r##"<nav><a href="#a">A</a><a href="#b">B</a></nav>
<section id="a"></section><section id="b"></section><a href="#b">again</a>"##;
        assert!(audit(html).is_clean());
    }

    #[test]
    fn audit_reports_orphans() {
        let html = r##"<nav><a href="#a">A</a><a href="#ghost">G</a></nav>
<section id="a"></section><section id="hidden"></section>
<section id="a"></section><a href="#nowhere">x</a>"##;
        let report = audit(html);
        assert_eq!(report.orphan_links, ["ghost"]);
        assert_eq!(report.orphan_sections, ["hidden"]);
        assert_eq!(report.duplicate_sections, ["a"]);
        assert_eq!(report.dangling_links, ["nowhere"]);
        assert!(!report.is_clean());
        let msg = report.to_string();
        assert!(msg.contains("navigation targets without a section: ghost"));
        assert!(msg.contains("dangling in-page links: nowhere"));
    }
}
