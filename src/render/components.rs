//! Presentation components: small pure functions from content to markup.
//!
//! Each function returns a self-contained fragment. Text arguments are
//! escaped here; arguments named `inner` or `body` are already markup.

use crate::anchor::Anchor;
use crate::content::Tone;
use crate::escape::html_escape;

/// Utility classes for a badge of the given tone.
pub fn badge_classes(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "bg-indigo-500/15 text-indigo-50 ring-indigo-400/25",
        Tone::Secondary => "bg-fuchsia-500/15 text-fuchsia-50 ring-fuchsia-400/25",
        Tone::Tertiary => "bg-amber-500/15 text-amber-50 ring-amber-400/25",
        Tone::Quaternary => "bg-emerald-500/15 text-emerald-50 ring-emerald-400/25",
    }
}

/// Gradient stops for the border of an accent card.
pub fn card_gradient(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "from-indigo-600 via-sky-500 to-fuchsia-600",
        Tone::Secondary => "from-fuchsia-600 via-violet-600 to-indigo-600",
        Tone::Tertiary => "from-amber-500 via-orange-500 to-fuchsia-600",
        Tone::Quaternary => "from-emerald-500 via-teal-500 to-indigo-600",
    }
}

/// Rounded inline label tinted by `tone`.
pub fn tone_badge(tone: Tone, text: &str) -> String {
    format!(
        "<span class=\"inline-flex items-center rounded-full px-3 py-1 text-xs font-semibold ring-1 {} backdrop-blur\">{}</span>",
        badge_classes(tone),
        html_escape(text)
    )
}

/// Bordered inline label with a single fixed style.
pub fn tag_chip(text: &str) -> String {
    format!(
        "<span class=\"inline-flex items-center rounded-full border border-slate-200 bg-white/70 px-3 py-1 text-xs font-semibold text-slate-700 shadow-sm\">{}</span>",
        html_escape(text)
    )
}

/// Wrapping row of tag chips, or nothing when `tags` is empty.
pub fn chip_row(tags: &[&str], class: &str) -> String {
    if tags.iter().all(|t| t.trim().is_empty()) {
        return String::new();
    }
    let mut out = format!("<div class=\"{}\">", class);
    for tag in tags.iter().filter(|t| !t.trim().is_empty()) {
        out.push_str(&tag_chip(tag));
    }
    out.push_str("</div>\n");
    out
}

/// Titled, anchorable block. The subtitle paragraph is omitted when absent or empty.
pub fn section(anchor: Anchor, subtitle: Option<&str>, body: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<section id=\"{}\" class=\"scroll-mt-28\">\n",
        anchor.id()
    ));
    out.push_str("<div class=\"mb-6\">\n");
    out.push_str(&format!(
        "<h2 class=\"text-2xl font-extrabold tracking-tight text-slate-900\">{}</h2>\n",
        html_escape(anchor.title())
    ));
    if let Some(sub) = subtitle.filter(|s| !s.trim().is_empty()) {
        out.push_str(&format!(
            "<p class=\"mt-2 max-w-3xl text-slate-600\">{}</p>\n",
            html_escape(sub)
        ));
    }
    out.push_str("</div>\n");
    out.push_str(body);
    out.push_str("</section>\n");
    out
}

/// In-page navigation link.
pub fn nav_link(anchor: Anchor) -> String {
    format!(
        "<a href=\"{}\" class=\"text-sm font-semibold text-slate-700 hover:text-slate-900\">{}</a>",
        anchor.href(),
        html_escape(anchor.title())
    )
}

/// Gradient-bordered container around an opaque panel.
pub fn accent_card(tone: Tone, inner: &str) -> String {
    format!(
        "<div class=\"rounded-3xl bg-gradient-to-br {} p-[1px] shadow-[0_20px_60px_-30px_rgba(2,6,23,0.45)]\">\n<div class=\"rounded-3xl bg-white/90 p-7 shadow-sm backdrop-blur\">\n{}</div>\n</div>\n",
        card_gradient(tone),
        inner
    )
}

/// Bulleted list preserving item order. `dot` is the class of the bullet marker.
pub fn bullet_list(items: &[&str], dot: &str, class: &str) -> String {
    let mut out = format!("<ul class=\"{}\">\n", class);
    for item in items {
        out.push_str(&format!(
            "  <li class=\"flex gap-2\"><span class=\"mt-2 h-1.5 w-1.5 shrink-0 rounded-full {}\" aria-hidden=\"true\"></span><span>{}</span></li>\n",
            dot,
            html_escape(item)
        ));
    }
    out.push_str("</ul>\n");
    out
}

/// Kind of outbound or download link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Same-page or same-site navigation.
    Local,
    /// Static file fetched with the `download` attribute.
    Download,
    /// Off-site profile opened in a new tab.
    External,
}

/// Button-styled anchor element.
pub fn link_button(href: &str, label: &str, kind: LinkKind, class: &str) -> String {
    let extra = match kind {
        LinkKind::Local => "",
        LinkKind::Download => " download",
        LinkKind::External => " target=\"_blank\" rel=\"noreferrer\"",
    };
    format!(
        "<a href=\"{}\"{} class=\"{}\">{}</a>",
        html_escape(href),
        extra,
        class,
        html_escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_uses_tone_palette() {
        for tone in [Tone::Primary, Tone::Secondary, Tone::Tertiary, Tone::Quaternary] {
            let html = tone_badge(tone, "x");
            assert!(html.contains(&format!("bg-{}-500/15", tone.palette())), "{html}");
        }
    }

    #[test]
    fn badge_escapes_text() {
        assert!(tone_badge(Tone::Primary, "R&D").contains(">R&amp;D</span>"));
    }

    #[test]
    fn chip_is_fixed_style() {
        assert_eq!(
            tag_chip("ELISA"),
            "<span class=\"inline-flex items-center rounded-full border border-slate-200 bg-white/70 px-3 py-1 text-xs font-semibold text-slate-700 shadow-sm\">ELISA</span>"
        );
    }

    #[test]
    fn chip_row_empty_renders_nothing() {
        assert_eq!(chip_row(&[], "row"), "");
        assert_eq!(chip_row(&["", " "], "row"), "");
    }

    #[test]
    fn chip_row_one_chip_per_tag_in_order() {
        let html = chip_row(&["ddPCR", "SOPs", "GxP"], "row");
        assert_eq!(html.matches("<span").count(), 3);
        let d = html.find("ddPCR").unwrap();
        let s = html.find("SOPs").unwrap();
        let g = html.find("GxP").unwrap();
        assert!(d < s && s < g);
    }

    #[test]
    fn section_with_subtitle() {
        let html = section(Anchor::Skills, Some("Grouped"), "<p>body</p>\n");
        assert!(html.starts_with("<section id=\"skills\" class=\"scroll-mt-28\">"));
        assert!(html.contains(">Skills</h2>"));
        assert!(html.contains(">Grouped</p>"));
        assert!(html.ends_with("<p>body</p>\n</section>\n"));
    }

    #[test]
    fn section_without_subtitle() {
        let none = section(Anchor::About, None, "");
        let empty = section(Anchor::About, Some(""), "");
        assert_eq!(none, empty);
        assert!(!none.contains("<p"));
    }

    #[test]
    fn nav_link_targets_anchor() {
        let html = nav_link(Anchor::Publications);
        assert!(html.starts_with("<a href=\"#publications\""));
        assert!(html.ends_with(">Scholarship</a>"));
    }

    #[test]
    fn accent_card_wraps_inner() {
        let html = accent_card(Tone::Tertiary, "<p>x</p>\n");
        assert!(html.contains("from-amber-500 via-orange-500 to-fuchsia-600"));
        assert!(html.contains("<p>x</p>\n</div>\n</div>\n"));
    }

    #[test]
    fn bullet_list_preserves_order() {
        let html = bullet_list(&["one", "two", "three"], "bg-slate-900", "list");
        let items: Vec<usize> = ["one", "two", "three"]
            .iter()
            .map(|s| html.find(&format!("<span>{}</span>", s)).unwrap())
            .collect();
        assert!(items.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<li").count(), 3);
    }

    #[test]
    fn link_kinds() {
        let dl = link_button("/a b.pdf", "CV", LinkKind::Download, "btn");
        assert_eq!(dl, "<a href=\"/a b.pdf\" download class=\"btn\">CV</a>");
        let ext = link_button("https://x.test/?a=1&b=2", "X", LinkKind::External, "btn");
        assert!(ext.contains("href=\"https://x.test/?a=1&amp;b=2\""));
        assert!(ext.contains("target=\"_blank\" rel=\"noreferrer\""));
        let local = link_button("#contact", "Contact", LinkKind::Local, "btn");
        assert_eq!(local, "<a href=\"#contact\" class=\"btn\">Contact</a>");
    }
}
