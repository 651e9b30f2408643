//! GitHub-flavored markdown renderer: the same content as a plain resume.

use crate::anchor::{self, github_slug, Anchor};
use crate::content::*;
use crate::escape::mailto;
use crate::render::{RenderContext, Renderer};
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, site: &Portfolio, ctx: &RenderContext) -> Result<String> {
        let p = &site.profile;
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {}\n", p.name));
        lines.push(format!("**{}**\n", p.title));
        lines.push(format!(
            "{} · [{}]({}) · {}\n",
            p.location,
            p.email,
            mailto(p.email, None),
            p.phone
        ));
        lines.push(format!(
            "[Resume](<{}>) · [CV](<{}>) · [LinkedIn]({})\n",
            p.resume_pdf, p.cv_pdf, p.linkedin_href
        ));
        lines.push(format!("{}\n", site.hero.tagline));

        for group in site.highlights {
            lines.push(format!("**{}**\n", group.label));
            push_list(&mut lines, group.items);
        }

        let sections = anchor::sections(site);
        lines.push("## Index\n".to_string());
        for a in &sections {
            lines.push(format!("* [{}](#{})", a.title(), github_slug(a.title())));
        }
        lines.push(String::new());

        for a in &sections {
            render_section(&mut lines, site, *a);
        }

        lines.push("---\n".to_string());
        lines.push(format!("© {} {}. All rights reserved.", ctx.year, p.name));

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn push_list(lines: &mut Vec<String>, items: &[&str]) {
    for item in items {
        lines.push(format!("* {}", item));
    }
    lines.push(String::new());
}

fn push_subtitle(lines: &mut Vec<String>, subtitle: Option<&str>) {
    if let Some(sub) = subtitle.filter(|s| !s.trim().is_empty()) {
        lines.push(format!("{}\n", sub));
    }
}

fn push_activities(lines: &mut Vec<String>, items: &[ActivityItem]) {
    for item in items {
        match item {
            ActivityItem::Plain(text) => lines.push(format!("* {}", text)),
            ActivityItem::Described { label, description } => {
                lines.push(format!("* **{}**: {}", label, description))
            }
        }
    }
    lines.push(String::new());
}

fn render_section(lines: &mut Vec<String>, site: &Portfolio, a: Anchor) {
    lines.push(format!("## {}\n", a.title()));
    match a {
        Anchor::About => {
            push_subtitle(lines, Some(site.about.subtitle));
            for para in site.about.paragraphs {
                lines.push(format!("{}\n", para));
            }
            if !site.about.focus_tags.is_empty() {
                let tags: Vec<String> =
                    site.about.focus_tags.iter().map(|t| format!("`{}`", t)).collect();
                lines.push(format!("{}\n", tags.join(" ")));
            }
        }
        Anchor::Experience => {
            push_subtitle(lines, site.experience.subtitle);
            for role in site.experience.entries {
                lines.push(format!("### {}, {}\n", role.title, role.company));
                match role.shown_location() {
                    Some(loc) => lines.push(format!("*{}* · {}\n", role.dates, loc)),
                    None => lines.push(format!("*{}*\n", role.dates)),
                }
                push_list(lines, role.bullets);
                let tags: Vec<String> = role
                    .tags
                    .iter()
                    .filter(|t| !t.trim().is_empty())
                    .map(|t| format!("`{}`", t))
                    .collect();
                if !tags.is_empty() {
                    lines.push(format!("{}\n", tags.join(" ")));
                }
            }
        }
        Anchor::Education => {
            push_subtitle(lines, site.education.subtitle);
            for edu in site.education.entries {
                lines.push(format!("### {}\n", edu.institution));
                lines.push(format!("*{}*\n", edu.degree));
                if !edu.details.is_empty() {
                    push_list(lines, edu.details);
                }
            }
        }
        Anchor::Skills => {
            push_subtitle(lines, site.skills.subtitle);
            for sg in site.skills.entries {
                lines.push(format!("### {}\n", sg.group));
                push_list(lines, sg.skills);
            }
        }
        Anchor::Languages => {
            push_subtitle(lines, site.languages.subtitle);
            for lang in site.languages.entries {
                lines.push(format!("* **{}**: {}", lang.level, lang.items.join(", ")));
            }
            lines.push(String::new());
        }
        Anchor::Leadership => {
            push_subtitle(lines, site.leadership.subtitle);
            push_activities(lines, site.leadership.entries);
        }
        Anchor::Awards => {
            push_subtitle(lines, site.awards.subtitle);
            push_activities(lines, site.awards.entries);
        }
        Anchor::Publications => {
            let p = &site.profile;
            push_subtitle(lines, Some(site.scholarship.subtitle));
            lines.push(format!("* [Google Scholar]({})", p.google_scholar_href));
            lines.push(format!("* [ResearchGate]({})", p.research_gate_href));
            lines.push(format!("* [PubMed]({})", p.publications_href));
            lines.push(format!("* [LinkedIn]({})", p.linkedin_href));
            lines.push(String::new());
        }
        Anchor::Activities => {
            push_subtitle(lines, site.activities.subtitle);
            push_activities(lines, site.activities.entries);
        }
        Anchor::Contact => {
            let p = &site.profile;
            push_subtitle(lines, Some(site.contact.subtitle));
            lines.push(format!("{}\n", site.contact.blurb));
            lines.push(format!(
                "* Email: [{}]({})",
                p.email,
                mailto(p.email, Some(site.contact.mail_subject))
            ));
            lines.push(format!("* Phone: {}", p.phone));
            lines.push(format!("* Location: {}", p.location));
            lines.push(String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(site: &Portfolio, year: i32) -> String {
        MarkdownRenderer.render(site, &RenderContext { year }).unwrap()
    }

    #[test]
    fn starts_with_name_heading() {
        let md = render(&PORTFOLIO, 2026);
        assert!(md.starts_with("# Balachandar (Bala) Nedumaran, Ph.D.\n"));
    }

    #[test]
    fn index_links_match_headings() {
        let md = render(&PORTFOLIO, 2026);
        for a in anchor::sections(&PORTFOLIO) {
            assert!(md.contains(&format!("* [{}](#{})", a.title(), github_slug(a.title()))));
            assert!(md.contains(&format!("\n## {}\n", a.title())));
        }
        assert!(md.contains("* [Scholarship](#scholarship)"));
    }

    #[test]
    fn location_omitted_when_absent() {
        let md = render(&PORTFOLIO, 2026);
        assert!(md.contains("### Senior Scientist, Colgate-Palmolive (Hill’s Pet Nutrition)\n\n*Apr 2023 – Aug 2025*\n"));
        assert!(md.contains("*Apr 2022 – Mar 2023* · San Diego, CA\n"));
    }

    #[test]
    fn languages_grouped_by_level() {
        let md = render(&PORTFOLIO, 2026);
        assert!(md.contains("* **Basic**: Bengali, Malayalam, Kannada, Badaga"));
    }

    #[test]
    fn contact_mail_has_encoded_subject() {
        let md = render(&PORTFOLIO, 2026);
        assert!(md.contains("(mailto:piousbala@gmail.com?subject=Website%20inquiry)"));
    }

    #[test]
    fn resume_link_with_space_is_bracketed() {
        let md = render(&PORTFOLIO, 2026);
        assert!(md.contains("[Resume](</Balachandar Nedumaran-Industry-Scientist-Resume.pdf>)"));
    }

    #[test]
    fn footer_year() {
        assert!(render(&PORTFOLIO, 2027).trim_end().ends_with("© 2027 Balachandar (Bala) Nedumaran, Ph.D.. All rights reserved."));
    }

    #[test]
    fn described_items_are_bold_labelled() {
        let site = Portfolio {
            awards: Area {
                subtitle: Some("Recognition"),
                entries: &[ActivityItem::Described {
                    label: "Fellowship",
                    description: "Postdoctoral award",
                }],
            },
            ..PORTFOLIO
        };
        let md = render(&site, 2026);
        assert!(md.contains("## Awards\n\nRecognition\n\n* **Fellowship**: Postdoctoral award\n"));
        assert!(md.contains("* [Awards](#awards)"));
    }
}
