//! Content model: the literal dataset every renderer reads from.
//!
//! All values are `'static` constants. Nothing here is computed; order inside
//! every slice is authorial and renderers must preserve it.

use serde::Serialize;

/// Accent tone for badges and cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
}

impl Tone {
    /// Colour family the tone maps to in the utility-class palette.
    pub fn palette(self) -> &'static str {
        match self {
            Tone::Primary => "indigo",
            Tone::Secondary => "fuchsia",
            Tone::Tertiary => "amber",
            Tone::Quaternary => "emerald",
        }
    }
}

/// The complete page content.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub hero: Hero,
    pub highlights: &'static [HighlightGroup],
    pub about: About,
    pub experience: Area<ExperienceEntry>,
    pub education: Area<EducationEntry>,
    pub skills: Area<SkillGroup>,
    pub languages: Area<LanguageGroup>,
    pub leadership: Area<ActivityItem>,
    pub awards: Area<ActivityItem>,
    pub scholarship: Scholarship,
    pub activities: Area<ActivityItem>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin_href: &'static str,
    pub research_gate_href: &'static str,
    pub google_scholar_href: &'static str,
    pub publications_href: &'static str,
    /// Served path; must match the deployed file name exactly, spaces included.
    pub resume_pdf: &'static str,
    pub cv_pdf: &'static str,
    pub photo: &'static str,
    pub photo_alt: &'static str,
}

impl Profile {
    /// Static files the rendered page links to.
    pub fn asset_paths(&self) -> [&'static str; 3] {
        [self.photo, self.resume_pdf, self.cv_pdf]
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Badge {
    pub tone: Tone,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hero {
    pub badges: &'static [Badge],
    pub tagline: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HighlightGroup {
    pub label: &'static str,
    /// Short chip shown opposite the label.
    pub chip: &'static str,
    pub tone: Tone,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct About {
    pub subtitle: &'static str,
    pub paragraphs: &'static [&'static str],
    pub focus_tags: &'static [&'static str],
}

/// An ordered content area with its section subtitle.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Area<T: 'static> {
    pub subtitle: Option<&'static str>,
    pub entries: &'static [T],
}

impl<T: 'static> Area<T> {
    pub const EMPTY: Area<T> = Area {
        subtitle: None,
        entries: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub title: &'static str,
    pub dates: &'static str,
    pub location: Option<&'static str>,
    pub bullets: &'static [&'static str],
    pub tags: &'static [&'static str],
}

impl ExperienceEntry {
    /// Location to display, treating an empty string the same as absence.
    pub fn shown_location(&self) -> Option<&'static str> {
        self.location.filter(|l| !l.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillGroup {
    pub group: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageGroup {
    pub level: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum ActivityItem {
    Plain(&'static str),
    Described {
        label: &'static str,
        description: &'static str,
    },
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scholarship {
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contact {
    pub subtitle: &'static str,
    pub blurb: &'static str,
    /// Subject line pre-filled in the "Email Me" link.
    pub mail_subject: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Balachandar (Bala) Nedumaran, Ph.D.",
    title: "Senior Scientist | Cell & Molecular Biology | Analytical & Molecular Assays",
    location: "Aurora, CO",
    email: "piousbala@gmail.com",
    phone: "(720) 620-7554",
    linkedin_href: "https://www.linkedin.com/in/balachandar-nedumaran-2191b124/",
    research_gate_href: "https://www.researchgate.net/profile/Balachandar-Nedumaran?ev=hdr_xprf",
    google_scholar_href: "https://scholar.google.com/citations?user=Hs2Ci7QAAAAJ&hl=en",
    publications_href: "https://pubmed.ncbi.nlm.nih.gov/?term=balachandar+nedumaran",
    resume_pdf: "/Balachandar Nedumaran-Industry-Scientist-Resume.pdf",
    cv_pdf: "/Balachandar-Nedumaran-Academia-CV.pdf",
    photo: "/bala-profile.jpg",
    photo_alt: "Balachandar Nedumaran profile photo",
};

const HIGHLIGHTS: &[HighlightGroup] = &[
    HighlightGroup {
        label: "Core strengths",
        chip: "Execution",
        tone: Tone::Primary,
        items: &[
            "Analytical method development and execution (molecular, immunoassay, and cell/tissue-based assays)",
            "GxP/GMP readiness: SOPs, method transfers, qualification/verification/validation support",
            "Nucleic-acid analytics: ddPCR/qPCR, custom TaqMan arrays, mRNA-seq workflows",
            "Organoid and advanced cell culture experience (including 3D systems)",
        ],
    },
    HighlightGroup {
        label: "Key platforms",
        chip: "Platforms",
        tone: Tone::Tertiary,
        items: &[
            "ddPCR (Bio-Rad QX200)",
            "qPCR/RT-qPCR (TaqMan and SYBR)",
            "ELISA (single and multiplex)",
            "Nanostring nCounter",
            "Bioanalyzer / Fragment Analyzer",
            "Illumina NGS (e.g., NextSeq) and related library QC",
        ],
    },
];

const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Colgate-Palmolive (Hill’s Pet Nutrition)",
        title: "Senior Scientist",
        dates: "Apr 2023 – Aug 2025",
        location: None,
        bullets: &[
            "Developed and executed complex biological assays including ELISA, custom Nanostring panels, and mRNA sequencing to expand research capability.",
            "Cultured 3D organoids from necropsy tissues to generate translational insights into biological responses.",
            "Designed custom TaqMan Array Plates (40+ genes), enabling cross-functional collaboration and data sharing.",
            "Delivered actionable analytical readouts leveraging Bioanalyzer and Fragment Analyzer for nucleic-acid QC.",
        ],
        tags: &["ELISA", "Nanostring", "mRNA-seq", "3D organoids", "Bioanalyzer"],
    },
    ExperienceEntry {
        company: "Fate Therapeutics",
        title: "Molecular Assay Development Scientist (PCAD)",
        dates: "Apr 2022 – Mar 2023",
        location: Some("San Diego, CA"),
        bullets: &[
            "Developed and optimized identity and residual assays for cell therapy products aligned with GxP expectations.",
            "Designed and implemented ddPCR identity assays to improve method performance and reliability.",
            "Partnered with R&D, QC, and QA to transfer assays and support pilot testing activities for IND-facing programs.",
            "Authored SOPs and technical documentation; provided troubleshooting and data interpretation support.",
        ],
        tags: &["ddPCR", "SOPs", "Assay transfer", "IND support", "GxP"],
    },
    ExperienceEntry {
        company: "Catalent Pharma Solutions",
        title: "Sr. QC Scientist (QC Method Services)",
        dates: "Jun 2021 – Mar 2022",
        location: Some("Harmans, MD"),
        bullets: &[
            "Led QC method services for gene therapy programs with emphasis on ELISAs and ddPCR.",
            "Executed assays under GxP controls; supported qualification/verification/validation activities.",
            "Worked with Analytical Development and QA to streamline testing workflows and strengthen compliance posture.",
            "Supported structured investigations and documentation when required.",
        ],
        tags: &["cGMP", "ELISA", "ddPCR", "Quality systems"],
    },
    ExperienceEntry {
        company: "University of Colorado Anschutz Medical Campus",
        title: "Research Associate / Lab Manager",
        dates: "Jul 2019 – Jul 2021",
        location: Some("Denver, CO"),
        bullets: &[
            "Advanced stem cell biology research, including generation of insulin-producing 3D organoids from human embryonic stem cells.",
            "Applied translatomics approaches (ribosome profiling / ribo-tag IP deep sequencing) to identify translating RNAs and potential neoantigens.",
            "Managed day-to-day lab operations, compliance, and mentoring of junior researchers.",
        ],
        tags: &["Stem cells", "3D organoids", "Ribosome profiling", "Mentorship"],
    },
];

const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        group: "Molecular & Genomic Assays",
        skills: &[
            "ddPCR (identity, residual/purity assays)",
            "qPCR / RT-qPCR (TaqMan & SYBR)",
            "Custom TaqMan Array Plates / Cards",
            "RNA extraction (cells, tissues, complex matrices)",
            "NGS sample/library QC; mRNA-seq workflows",
            "Nanostring nCounter panel design/execution",
        ],
    },
    SkillGroup {
        group: "Immunoassays & Biochemistry",
        skills: &["ELISA (single & multiplex)", "Western blot", "Immunoprecipitation"],
    },
    SkillGroup {
        group: "Cell Biology",
        skills: &[
            "Mammalian cell culture (cell lines, primary cells)",
            "3D organoid culture",
            "Viral vectors (AAV, lentivirus, adenovirus): prep, transduction, titration",
        ],
    },
    SkillGroup {
        group: "GxP / Quality Systems",
        skills: &[
            "GMP/GxP execution mindset",
            "SOP writing and controlled documentation",
            "Assay transfer, qualification, verification, validation support",
            "Troubleshooting and structured investigations",
        ],
    },
];

const LANGUAGES: &[LanguageGroup] = &[
    LanguageGroup {
        level: "Proficient",
        items: &["English", "Tamil"],
    },
    LanguageGroup {
        level: "Intermediate",
        items: &["Hindi", "Korean"],
    },
    LanguageGroup {
        level: "Basic",
        items: &["Bengali", "Malayalam", "Kannada", "Badaga"],
    },
];

const ACTIVITIES: &[ActivityItem] = &[
    ActivityItem::Plain("Table Tennis"),
    ActivityItem::Plain("Pickleball"),
    ActivityItem::Plain("Volleyball"),
    ActivityItem::Plain("Javelin Throw"),
    ActivityItem::Plain("Hiking"),
    ActivityItem::Plain("Skiing"),
    ActivityItem::Plain("Cooking"),
];

/// The canonical content set the site is published with.
pub const PORTFOLIO: Portfolio = Portfolio {
    profile: PROFILE,
    hero: Hero {
        badges: &[
            Badge { tone: Tone::Primary, text: PROFILE.location },
            Badge { tone: Tone::Secondary, text: "GxP / GMP-ready analytics" },
            Badge { tone: Tone::Tertiary, text: "ddPCR · qPCR · ELISA · NGS" },
            Badge { tone: Tone::Quaternary, text: "Organoids · Translational biology" },
        ],
        tagline: "Senior Scientist with deep experience spanning analytical method development, ddPCR/qPCR, ELISA, custom gene-expression platforms (Nanostring), and NGS-oriented workflows. Known for reproducibility, crisp documentation, and cross-functional delivery.",
    },
    highlights: HIGHLIGHTS,
    about: About {
        subtitle: "I build and operationalize analytical methods that generate high-confidence biological insight — with emphasis on reproducibility, documentation, and cross-functional execution.",
        paragraphs: &[
            "My background spans industry and academic research, including GxP-aligned molecular assay development and QC support. I have extensive hands-on experience in ddPCR/qPCR, immunoassays, advanced cell culture and 3D organoid systems, and gene-expression platforms including Nanostring and NGS-oriented workflows.",
            "I enjoy translating complex assay outputs into clear, decision-ready narratives, and partnering closely with R&D, QC, and QA stakeholders to ensure methods are robust, transferable, and fit for purpose.",
        ],
        focus_tags: &["ddPCR", "qPCR", "ELISA", "Nanostring", "mRNA-seq", "Organoids", "Bioanalyzer"],
    },
    experience: Area {
        subtitle: Some("Selected roles emphasizing analytical method development, GxP execution, translational assay platforms, and cross-functional delivery."),
        entries: EXPERIENCE,
    },
    education: Area::EMPTY,
    skills: Area {
        subtitle: Some("Grouped capabilities aligned to analytical sciences, translational assay development, and GxP execution."),
        entries: SKILLS,
    },
    languages: Area {
        subtitle: Some("Communication strengths across multiple languages and proficiency levels."),
        entries: LANGUAGES,
    },
    leadership: Area::EMPTY,
    awards: Area::EMPTY,
    scholarship: Scholarship {
        subtitle: "Publication profiles and author search across major indexing platforms.",
    },
    activities: Area {
        subtitle: Some("Outside of work, I stay active and engaged through sports, outdoors, and cooking."),
        entries: ACTIVITIES,
    },
    contact: Contact {
        subtitle: "For roles, collaborations, consulting discussions, or speaking engagements.",
        blurb: "The fastest way to reach me is by email. I respond with availability and next steps promptly.",
        mail_subject: "Website inquiry",
    },
};
