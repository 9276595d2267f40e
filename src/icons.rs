//! Stroke icons drawn inline on a 24x24 grid, so the page ships no icon font.

pub const FAVICON: &str = "/favicon.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    ArrowRight,
    ChevronDown,
    Twitter,
    Instagram,
    Linkedin,
    Github,
}

impl IconName {
    pub const ALL: [IconName; 6] = [
        IconName::ArrowRight,
        IconName::ChevronDown,
        IconName::Twitter,
        IconName::Instagram,
        IconName::Linkedin,
        IconName::Github,
    ];

    /// SVG path data, one entry per `<path>`.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconName::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconName::ChevronDown => &["m6 9 6 6 6-6"],
            IconName::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            IconName::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconName::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            IconName::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
        }
    }
}
