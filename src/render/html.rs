//! HTML renderer: the standalone single-page site.
//!
//! Lays out header, hero, highlights, one section per content area and the
//! footer, in that fixed order. Every list is emitted in source order.

use crate::anchor::{self, Anchor};
use crate::content::*;
use crate::escape::{html_escape, mailto};
use crate::render::components::*;
use crate::render::{RenderContext, Renderer};
use anyhow::Result;

#[derive(Debug, Default)]
pub struct HtmlRenderer {
    /// Extra stylesheets linked from `<head>`.
    pub stylesheets: Vec<String>,
}

impl Renderer for HtmlRenderer {
    fn render(&self, site: &Portfolio, ctx: &RenderContext) -> Result<String> {
        Ok(self.page(site, ctx))
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

const LIST: &str = "mt-4 space-y-2 text-sm leading-6 text-slate-700";
const DOT: &str = "bg-slate-900";
const CARD_TITLE: &str = "text-sm font-extrabold text-slate-900";

const BTN_GRADIENT: &str = "inline-flex items-center justify-center rounded-xl bg-gradient-to-r from-indigo-600 via-fuchsia-600 to-amber-500 px-5 py-2.5 text-sm font-extrabold text-white shadow-sm hover:opacity-95";
const BTN_WHITE: &str = "inline-flex items-center justify-center rounded-xl border border-slate-200 bg-white px-5 py-2.5 text-sm font-extrabold text-slate-800 shadow-sm hover:bg-slate-50";
const BTN_DARK: &str = "inline-flex items-center justify-center rounded-xl bg-slate-950 px-5 py-2.5 text-sm font-extrabold text-white hover:bg-slate-900";
const BTN_GHOST: &str = "inline-flex items-center justify-center rounded-xl bg-white/10 px-5 py-2.5 text-sm font-extrabold text-white shadow-sm ring-1 ring-white/20 hover:bg-white/15";
const BTN_SOLID: &str = "inline-flex items-center justify-center rounded-xl bg-white px-5 py-2.5 text-sm font-extrabold text-slate-950 shadow-sm hover:bg-white/90";

impl HtmlRenderer {
    fn page(&self, site: &Portfolio, ctx: &RenderContext) -> String {
        let mut out = String::new();
        let p = &site.profile;

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(p.name)));
        out.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            html_escape(p.title)
        ));
        for href in &self.stylesheets {
            out.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                html_escape(href)
            ));
        }
        out.push_str("<style>\nhtml { scroll-behavior: smooth; }\n.scroll-mt-28 { scroll-margin-top: 7rem; }\n</style>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str("<div class=\"min-h-screen bg-[radial-gradient(1200px_circle_at_20%_-10%,rgba(99,102,241,0.20),transparent_60%),radial-gradient(900px_circle_at_90%_10%,rgba(217,70,239,0.18),transparent_55%),radial-gradient(900px_circle_at_50%_110%,rgba(245,158,11,0.16),transparent_55%)] bg-slate-50 text-slate-900\">\n");

        let sections = anchor::sections(site);
        out.push_str(&render_header(p, &sections));

        out.push_str("<main class=\"mx-auto max-w-6xl px-4 py-10 sm:px-6\">\n");
        out.push_str(&render_hero(site));
        out.push_str(&render_highlights(site.highlights));

        for anchor in &sections {
            out.push_str("<div class=\"mt-14\">\n");
            out.push_str(&render_section(site, *anchor));
            out.push_str("</div>\n");
        }

        out.push_str(&render_footer(site, ctx));
        out.push_str("</main>\n</div>\n</body>\n</html>\n");
        out
    }
}

fn render_header(p: &Profile, sections: &[Anchor]) -> String {
    let mut out = String::new();
    out.push_str("<header class=\"sticky top-0 z-50 border-b border-slate-200/70 bg-white/70 backdrop-blur\">\n");
    out.push_str("<div class=\"mx-auto flex max-w-6xl items-center justify-between px-4 py-4 sm:px-6\">\n");

    // Brand mark
    out.push_str("<div class=\"flex items-center gap-3\">\n");
    out.push_str("<div class=\"h-11 w-11 rounded-2xl bg-gradient-to-br from-indigo-600 via-fuchsia-600 to-amber-500 shadow-sm\" aria-hidden=\"true\"></div>\n");
    out.push_str(&format!(
        "<div>\n<div class=\"text-sm font-extrabold leading-tight text-slate-900\">{}</div>\n<div class=\"text-xs font-medium leading-tight text-slate-600\">{}</div>\n</div>\n",
        html_escape(p.name),
        html_escape(p.title)
    ));
    out.push_str("</div>\n");

    out.push_str("<nav class=\"hidden items-center gap-5 md:flex\">\n");
    for anchor in sections {
        out.push_str(&format!("  {}\n", nav_link(*anchor)));
    }
    out.push_str("</nav>\n");

    out.push_str("<div class=\"flex items-center gap-2\">\n");
    out.push_str(&format!(
        "  {}\n",
        link_button(
            p.resume_pdf,
            "Resume",
            LinkKind::Download,
            "hidden sm:inline-flex items-center justify-center rounded-xl bg-gradient-to-r from-indigo-600 via-fuchsia-600 to-amber-500 px-4 py-2 text-sm font-extrabold text-white shadow-sm hover:opacity-95",
        )
    ));
    out.push_str(&format!(
        "  {}\n",
        link_button(
            p.cv_pdf,
            "CV",
            LinkKind::Download,
            "hidden sm:inline-flex items-center justify-center rounded-xl border border-slate-200 bg-white px-4 py-2 text-sm font-extrabold text-slate-800 shadow-sm hover:bg-slate-50",
        )
    ));
    out.push_str(&format!(
        "  {}\n",
        link_button(
            p.linkedin_href,
            "LinkedIn",
            LinkKind::External,
            "inline-flex items-center justify-center rounded-xl border border-slate-200 bg-white px-4 py-2 text-sm font-extrabold text-slate-800 shadow-sm hover:bg-slate-50",
        )
    ));
    out.push_str("</div>\n");

    out.push_str("</div>\n</header>\n");
    out
}

fn render_hero(site: &Portfolio) -> String {
    let p = &site.profile;
    let mut out = String::new();
    out.push_str("<div class=\"rounded-3xl bg-gradient-to-br from-slate-950 via-indigo-950 to-slate-950 p-8 text-white shadow-[0_30px_80px_-40px_rgba(2,6,23,0.8)]\">\n");

    if !site.hero.badges.is_empty() {
        out.push_str("<div class=\"flex flex-wrap items-center gap-2\">\n");
        for badge in site.hero.badges {
            out.push_str(&format!("  {}\n", tone_badge(badge.tone, badge.text)));
        }
        out.push_str("</div>\n");
    }

    out.push_str("<div class=\"mt-7 flex flex-col gap-6 sm:flex-row sm:items-center\">\n");
    out.push_str(&format!(
        "<div class=\"relative h-32 w-32 overflow-hidden rounded-2xl ring-4 ring-white/15 shadow-sm sm:h-36 sm:w-36\"><img src=\"{}\" alt=\"{}\" class=\"h-full w-full object-cover object-top\"></div>\n",
        html_escape(p.photo),
        html_escape(p.photo_alt)
    ));
    out.push_str(&format!(
        "<div>\n<h1 class=\"text-4xl font-black tracking-tight sm:text-5xl\">{}</h1>\n<p class=\"mt-2 text-base font-semibold text-white/85\">{}</p>\n</div>\n",
        html_escape(p.name),
        html_escape(p.title)
    ));
    out.push_str("</div>\n");

    out.push_str(&format!(
        "<p class=\"mt-6 max-w-3xl text-base leading-7 text-white/80\">{}</p>\n",
        html_escape(site.hero.tagline)
    ));

    out.push_str("<div class=\"mt-7 flex flex-wrap gap-3\">\n");
    out.push_str(&format!(
        "  {}\n",
        link_button(p.resume_pdf, "Download Resume", LinkKind::Download, BTN_SOLID)
    ));
    out.push_str(&format!(
        "  {}\n",
        link_button(p.cv_pdf, "Download CV", LinkKind::Download, BTN_GHOST)
    ));
    out.push_str(&format!(
        "  {}\n",
        link_button(&Anchor::Experience.href(), "View Experience", LinkKind::Local, BTN_GHOST)
    ));
    out.push_str(&format!(
        "  {}\n",
        link_button(&Anchor::Contact.href(), "Contact", LinkKind::Local, BTN_GHOST)
    ));
    out.push_str("</div>\n");

    out.push_str("</div>\n");
    out
}

fn render_highlights(groups: &[HighlightGroup]) -> String {
    if groups.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"mt-10 grid gap-6 md:grid-cols-2\">\n");
    for group in groups {
        let mut inner = String::new();
        inner.push_str(&format!(
            "<div class=\"flex items-center justify-between\">\n<div class=\"{}\">{}</div>\n{}\n</div>\n",
            CARD_TITLE,
            html_escape(group.label),
            tag_chip(group.chip)
        ));
        inner.push_str(&bullet_list(
            group.items,
            &format!("bg-{}-500", group.tone.palette()),
            LIST,
        ));
        out.push_str(&accent_card(group.tone, &inner));
    }
    out.push_str("</div>\n");
    out
}

fn render_section(site: &Portfolio, anchor: Anchor) -> String {
    match anchor {
        Anchor::About => section(anchor, Some(site.about.subtitle), &about_body(site)),
        Anchor::Experience => section(
            anchor,
            site.experience.subtitle,
            &experience_body(site.experience.entries),
        ),
        Anchor::Education => section(
            anchor,
            site.education.subtitle,
            &education_body(site.education.entries),
        ),
        Anchor::Skills => section(anchor, site.skills.subtitle, &skills_body(site.skills.entries)),
        Anchor::Languages => section(
            anchor,
            site.languages.subtitle,
            &languages_body(site.languages.entries),
        ),
        Anchor::Leadership => section(
            anchor,
            site.leadership.subtitle,
            &activity_card(Tone::Primary, site.leadership.entries),
        ),
        Anchor::Awards => section(
            anchor,
            site.awards.subtitle,
            &activity_card(Tone::Tertiary, site.awards.entries),
        ),
        Anchor::Publications => section(
            anchor,
            Some(site.scholarship.subtitle),
            &scholarship_body(&site.profile),
        ),
        Anchor::Activities => section(
            anchor,
            site.activities.subtitle,
            &activity_card(Tone::Secondary, site.activities.entries),
        ),
        Anchor::Contact => section(anchor, Some(site.contact.subtitle), &contact_body(site)),
    }
}

/// Dark side panel listing direct contact details.
fn contact_aside(heading: &str, rows: &str) -> String {
    format!(
        "<div class=\"rounded-2xl bg-slate-950 p-5 text-white shadow-sm\">\n<div class=\"text-xs font-extrabold uppercase tracking-wide text-white/70\">{}</div>\n<div class=\"mt-3 space-y-2 text-sm font-semibold\">\n{}</div>\n",
        html_escape(heading),
        rows
    )
}

fn email_link(email: &str) -> String {
    format!(
        "<a class=\"hover:underline\" href=\"{}\">{}</a>",
        html_escape(&mailto(email, None)),
        html_escape(email)
    )
}

fn about_body(site: &Portfolio) -> String {
    let p = &site.profile;
    let mut inner = String::from("<div class=\"grid gap-8 md:grid-cols-3\">\n<div class=\"md:col-span-2\">\n");
    for (i, para) in site.about.paragraphs.iter().enumerate() {
        let class = if i == 0 {
            "text-sm leading-7 text-slate-700"
        } else {
            "mt-4 text-sm leading-7 text-slate-700"
        };
        inner.push_str(&format!("<p class=\"{}\">{}</p>\n", class, html_escape(para)));
    }
    inner.push_str(&chip_row(site.about.focus_tags, "mt-6 flex flex-wrap gap-2"));
    inner.push_str("</div>\n");

    let rows = format!(
        "<div>{}</div>\n<div>{}</div>\n<div>{}</div>\n",
        html_escape(p.location),
        email_link(p.email),
        html_escape(p.phone)
    );
    let mut aside = contact_aside("Contact", &rows);
    aside.push_str("<div class=\"mt-5 grid gap-2\">\n");
    aside.push_str(&format!(
        "  {}\n",
        link_button(
            p.resume_pdf,
            "Download Resume",
            LinkKind::Download,
            "inline-flex items-center justify-center rounded-xl bg-gradient-to-r from-indigo-600 via-fuchsia-600 to-amber-500 px-4 py-2 text-sm font-extrabold text-white hover:opacity-95",
        )
    ));
    aside.push_str(&format!(
        "  {}\n",
        link_button(
            p.cv_pdf,
            "Download CV",
            LinkKind::Download,
            "inline-flex items-center justify-center rounded-xl bg-white/10 px-4 py-2 text-sm font-extrabold text-white ring-1 ring-white/20 hover:bg-white/15",
        )
    ));
    aside.push_str("</div>\n</div>\n");
    inner.push_str(&aside);
    inner.push_str("</div>\n");

    accent_card(Tone::Secondary, &inner)
}

fn experience_body(entries: &[ExperienceEntry]) -> String {
    let mut out = String::from("<div class=\"space-y-6\">\n");
    for (idx, role) in entries.iter().enumerate() {
        let tone = if idx % 2 == 0 {
            Tone::Primary
        } else {
            Tone::Quaternary
        };
        let mut inner = String::new();
        inner.push_str("<div class=\"flex flex-col gap-2 md:flex-row md:items-start md:justify-between\">\n<div>\n");
        inner.push_str(&format!(
            "<div class=\"text-lg font-extrabold text-slate-900\">{}</div>\n",
            html_escape(role.title)
        ));
        inner.push_str(&format!(
            "<div class=\"text-sm font-semibold text-slate-700\">{}</div>\n",
            html_escape(role.company)
        ));
        if let Some(loc) = role.shown_location() {
            inner.push_str(&format!(
                "<div class=\"text-sm text-slate-500\">{}</div>\n",
                html_escape(loc)
            ));
        }
        inner.push_str("</div>\n");
        inner.push_str(&format!(
            "<div class=\"text-sm font-bold text-slate-600\">{}</div>\n</div>\n",
            html_escape(role.dates)
        ));
        inner.push_str(&bullet_list(role.bullets, DOT, LIST));
        inner.push_str(&chip_row(role.tags, "mt-5 flex flex-wrap gap-2"));
        out.push_str(&accent_card(tone, &inner));
    }
    out.push_str("</div>\n");
    out
}

fn education_body(entries: &[EducationEntry]) -> String {
    let mut out = String::from("<div class=\"grid gap-6 md:grid-cols-2\">\n");
    for (idx, edu) in entries.iter().enumerate() {
        let tone = if idx % 2 == 0 {
            Tone::Quaternary
        } else {
            Tone::Primary
        };
        let mut inner = format!(
            "<div class=\"{}\">{}</div>\n<div class=\"text-sm font-semibold text-slate-600\">{}</div>\n",
            CARD_TITLE,
            html_escape(edu.institution),
            html_escape(edu.degree)
        );
        if !edu.details.is_empty() {
            inner.push_str(&bullet_list(edu.details, DOT, LIST));
        }
        out.push_str(&accent_card(tone, &inner));
    }
    out.push_str("</div>\n");
    out
}

fn skills_body(groups: &[SkillGroup]) -> String {
    let mut out = String::from("<div class=\"grid gap-6 md:grid-cols-2\">\n");
    for (idx, sg) in groups.iter().enumerate() {
        let tone = if idx % 2 == 0 {
            Tone::Tertiary
        } else {
            Tone::Secondary
        };
        let mut inner = format!("<div class=\"{}\">{}</div>\n", CARD_TITLE, html_escape(sg.group));
        inner.push_str(&bullet_list(sg.skills, DOT, LIST));
        out.push_str(&accent_card(tone, &inner));
    }
    out.push_str("</div>\n");
    out
}

fn languages_body(groups: &[LanguageGroup]) -> String {
    const ROTATION: [Tone; 3] = [Tone::Primary, Tone::Quaternary, Tone::Tertiary];
    let mut out = String::from("<div class=\"grid gap-6 md:grid-cols-3\">\n");
    for (idx, lang) in groups.iter().enumerate() {
        let mut inner = format!("<div class=\"{}\">{}</div>\n", CARD_TITLE, html_escape(lang.level));
        inner.push_str(&bullet_list(lang.items, DOT, LIST));
        out.push_str(&accent_card(ROTATION[idx % ROTATION.len()], &inner));
    }
    out.push_str("</div>\n");
    out
}

fn activity_card(tone: Tone, items: &[ActivityItem]) -> String {
    let mut list = String::from("<ul class=\"space-y-2 text-sm leading-6 text-slate-700\">\n");
    for item in items {
        let text = match item {
            ActivityItem::Plain(text) => html_escape(text),
            ActivityItem::Described { label, description } => format!(
                "<span class=\"font-bold text-slate-900\">{}</span>: {}",
                html_escape(label),
                html_escape(description)
            ),
        };
        list.push_str(&format!(
            "  <li class=\"flex gap-2\"><span class=\"mt-2 h-1.5 w-1.5 shrink-0 rounded-full {}\" aria-hidden=\"true\"></span><span>{}</span></li>\n",
            DOT, text
        ));
    }
    list.push_str("</ul>\n");
    accent_card(tone, &list)
}

fn scholarship_body(p: &Profile) -> String {
    let links = [
        (p.google_scholar_href, "Google Scholar", BTN_DARK),
        (p.research_gate_href, "ResearchGate", BTN_WHITE),
        (p.publications_href, "PubMed", BTN_WHITE),
        (p.linkedin_href, "LinkedIn", BTN_WHITE),
    ];
    let mut inner = String::from("<div class=\"flex flex-wrap gap-3\">\n");
    for (href, label, class) in links {
        inner.push_str(&format!(
            "  {}\n",
            link_button(href, label, LinkKind::External, class)
        ));
    }
    inner.push_str("</div>\n");
    accent_card(Tone::Quaternary, &inner)
}

fn contact_body(site: &Portfolio) -> String {
    let p = &site.profile;
    let mut inner = String::from("<div class=\"grid gap-6 md:grid-cols-3\">\n<div class=\"md:col-span-2\">\n");
    inner.push_str(&format!(
        "<p class=\"text-sm leading-7 text-slate-700\">{}</p>\n",
        html_escape(site.contact.blurb)
    ));
    inner.push_str("<div class=\"mt-5 flex flex-wrap gap-3\">\n");
    inner.push_str(&format!(
        "  {}\n",
        link_button(
            &mailto(p.email, Some(site.contact.mail_subject)),
            "Email Me",
            LinkKind::Local,
            BTN_GRADIENT,
        )
    ));
    inner.push_str(&format!(
        "  {}\n",
        link_button(p.linkedin_href, "Message on LinkedIn", LinkKind::External, BTN_WHITE)
    ));
    inner.push_str("</div>\n</div>\n");

    let rows = format!(
        "<div><span class=\"text-white/70\">Email:</span> {}</div>\n<div><span class=\"text-white/70\">Phone:</span> {}</div>\n<div><span class=\"text-white/70\">Location:</span> {}</div>\n",
        email_link(p.email),
        html_escape(p.phone),
        html_escape(p.location)
    );
    inner.push_str(&contact_aside("Direct", &rows));
    inner.push_str("</div>\n");
    inner.push_str("</div>\n");
    accent_card(Tone::Primary, &inner)
}

fn render_footer(site: &Portfolio, ctx: &RenderContext) -> String {
    let mut out = String::new();
    out.push_str("<footer class=\"mt-16 border-t border-slate-200 py-8 text-sm text-slate-600\">\n");
    out.push_str("<div class=\"flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between\">\n");
    out.push_str(&format!(
        "<div class=\"font-semibold\">© {} {}. All rights reserved.</div>\n",
        ctx.year,
        html_escape(site.profile.name)
    ));
    out.push_str("<div class=\"flex flex-wrap gap-4\">\n");
    for anchor in anchor::quick_links(site) {
        out.push_str(&format!(
            "  <a class=\"font-semibold hover:text-slate-900\" href=\"{}\">{}</a>\n",
            anchor.href(),
            html_escape(anchor.title())
        ));
    }
    out.push_str("</div>\n</div>\n</footer>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::decode_uri_component;

    const CTX: RenderContext = RenderContext { year: 2026 };

    fn render(site: &Portfolio) -> String {
        HtmlRenderer::default().render(site, &CTX).unwrap()
    }

    fn section_html<'a>(html: &'a str, id: &str) -> &'a str {
        let start = html.find(&format!("<section id=\"{}\"", id)).unwrap();
        let end = start + html[start..].find("</section>").unwrap();
        &html[start..end]
    }

    #[test]
    fn standalone_document() {
        let html = render(&PORTFOLIO);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("<title>Balachandar (Bala) Nedumaran, Ph.D.</title>"));
    }

    #[test]
    fn anchors_match_one_to_one() {
        let report = anchor::audit(&render(&PORTFOLIO));
        assert!(report.is_clean(), "{report}");
    }

    #[test]
    fn anchors_match_with_optional_areas() {
        let site = Portfolio {
            education: Area {
                subtitle: Some("Degrees"),
                entries: &[EducationEntry {
                    institution: "Example University",
                    degree: "Ph.D., 2012",
                    details: &["Dissertation on translation control"],
                }],
            },
            leadership: Area {
                subtitle: None,
                entries: &[ActivityItem::Described {
                    label: "Mentor",
                    description: "Trained junior researchers",
                }],
            },
            awards: Area {
                subtitle: None,
                entries: &[ActivityItem::Plain("Travel award")],
            },
            ..PORTFOLIO
        };
        let html = render(&site);
        assert!(anchor::audit(&html).is_clean());
        assert!(section_html(&html, "education").contains("Example University"));
        assert!(section_html(&html, "leadership")
            .contains("<span class=\"font-bold text-slate-900\">Mentor</span>: Trained junior researchers"));
        assert!(section_html(&html, "awards").contains("Travel award"));
    }

    #[test]
    fn empty_optional_areas_are_not_rendered() {
        let html = render(&PORTFOLIO);
        for id in ["education", "leadership", "awards"] {
            assert!(!html.contains(&format!("id=\"{}\"", id)));
            assert!(!html.contains(&format!("href=\"#{}\"", id)));
        }
    }

    #[test]
    fn sections_in_fixed_order() {
        let html = render(&PORTFOLIO);
        let positions: Vec<usize> = anchor::sections(&PORTFOLIO)
            .iter()
            .map(|a| html.find(&format!("<section id=\"{}\"", a.id())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn experience_in_source_order() {
        let html = render(&PORTFOLIO);
        let body = section_html(&html, "experience");
        let positions: Vec<usize> = [
            "Colgate-Palmolive",
            "Fate Therapeutics",
            "Catalent Pharma Solutions",
            "University of Colorado Anschutz Medical Campus",
        ]
        .iter()
        .map(|c| body.find(c).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn location_line_only_when_present() {
        let html = render(&PORTFOLIO);
        let body = section_html(&html, "experience");
        let location_lines = body.matches("<div class=\"text-sm text-slate-500\">").count();
        assert_eq!(location_lines, 3);
        assert!(body.contains("<div class=\"text-sm text-slate-500\">San Diego, CA</div>"));

        // Colgate card has no location line between its company and dates.
        let colgate = body.find("Colgate-Palmolive").unwrap();
        let dates = body.find("Apr 2023 – Aug 2025").unwrap();
        assert!(!body[colgate..dates].contains("text-slate-500"));
    }

    #[test]
    fn empty_location_is_treated_as_absent() {
        let entries: &[ExperienceEntry] = &[ExperienceEntry {
            company: "Lab",
            title: "Scientist",
            dates: "2020",
            location: Some(""),
            bullets: &[],
            tags: &[],
        }];
        let body = experience_body(entries);
        assert!(!body.contains("text-slate-500"));
        assert!(!body.contains("mt-5 flex flex-wrap gap-2"));
    }

    #[test]
    fn one_chip_per_tag() {
        let entries = &PORTFOLIO.experience.entries[1..2];
        let body = experience_body(entries);
        let chips = body.matches("rounded-full border border-slate-200").count();
        assert_eq!(chips, entries[0].tags.len());
        for tag in entries[0].tags {
            assert_eq!(body.matches(&format!(">{}</span>", html_escape(tag))).count(), 1);
        }
    }

    #[test]
    fn experience_cards_alternate_tones() {
        let body = experience_body(PORTFOLIO.experience.entries);
        let primary = body.matches(card_gradient(Tone::Primary)).count();
        let quaternary = body.matches(card_gradient(Tone::Quaternary)).count();
        assert_eq!((primary, quaternary), (2, 2));
    }

    #[test]
    fn footer_shows_render_year() {
        let html = HtmlRenderer::default()
            .render(&PORTFOLIO, &RenderContext { year: 2031 })
            .unwrap();
        assert!(html.contains("© 2031 Balachandar (Bala) Nedumaran, Ph.D.. All rights reserved."));
    }

    #[test]
    fn mail_subject_round_trips() {
        let html = render(&PORTFOLIO);
        let href = "href=\"mailto:piousbala@gmail.com?subject=";
        let start = html.find(href).unwrap() + href.len();
        let end = start + html[start..].find('"').unwrap();
        assert_eq!(&html[start..end], "Website%20inquiry");
        assert_eq!(decode_uri_component(&html[start..end]), "Website inquiry");
    }

    #[test]
    fn download_links_embed_paths_verbatim() {
        let html = render(&PORTFOLIO);
        assert!(html.contains(
            "<a href=\"/Balachandar Nedumaran-Industry-Scientist-Resume.pdf\" download"
        ));
        assert!(html.contains("<a href=\"/Balachandar-Nedumaran-Academia-CV.pdf\" download"));
        assert!(html.contains("<img src=\"/bala-profile.jpg\""));
    }

    #[test]
    fn scholarship_links_in_order() {
        let html = render(&PORTFOLIO);
        let body = section_html(&html, "publications");
        let positions: Vec<usize> = ["Google Scholar", "ResearchGate", "PubMed", "LinkedIn"]
            .iter()
            .map(|l| body.find(&format!(">{}</a>", l)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(body.matches("target=\"_blank\" rel=\"noreferrer\"").count(), 4);
        assert!(body.contains("citations?user=Hs2Ci7QAAAAJ&amp;hl=en"));
    }

    #[test]
    fn highlight_dots_follow_group_tone() {
        let html = render_highlights(PORTFOLIO.highlights);
        assert_eq!(html.matches("rounded-full bg-indigo-500").count(), 4);
        assert_eq!(html.matches("rounded-full bg-amber-500").count(), 6);
        assert!(html.contains(">Execution</span>"));
        assert!(html.contains(">Platforms</span>"));
    }

    #[test]
    fn no_highlights_no_grid() {
        assert_eq!(render_highlights(&[]), "");
    }

    #[test]
    fn stylesheets_linked_in_head() {
        let renderer = HtmlRenderer {
            stylesheets: vec!["/styles.css".to_string()],
        };
        let html = renderer.render(&PORTFOLIO, &CTX).unwrap();
        let head_end = html.find("</head>").unwrap();
        assert!(html[..head_end].contains("<link rel=\"stylesheet\" href=\"/styles.css\">"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(&PORTFOLIO), render(&PORTFOLIO));
    }
}
