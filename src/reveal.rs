use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    str::FromStr,
};

use thiserror::Error;

use crate::config::{validate_threshold, ConfigError, MotionConfig};

// Browsers report the ratio at the crossing itself slightly under the threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Hero,
    Work,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hero, Section::Work, Section::About, Section::Contact];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Work => "work",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown section: {0}")]
pub struct ParseSectionError(String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('#') {
            "hero" => Ok(Section::Hero),
            "work" => Ok(Section::Work),
            "about" => Ok(Section::About),
            "contact" => Ok(Section::Contact),
            other => Err(ParseSectionError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

/// One entry delivered by the intersection observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self::new(false, 0.0)
    }
}

pub type SectionVisibility = BTreeMap<Section, Visibility>;

/// Latches each observed section to `Revealed` the first time enough of it is on screen.
#[derive(Debug, Clone)]
pub struct VisibilityRevealer {
    threshold: f64,
    visibility: SectionVisibility,
    observed: BTreeSet<Section>,
    torn_down: bool,
}

impl VisibilityRevealer {
    pub fn new(threshold: f64) -> Result<Self, ConfigError> {
        validate_threshold(threshold)?;
        Ok(Self::with_threshold(threshold))
    }

    /// `MotionConfig` only holds thresholds that passed validation.
    pub fn from_config(config: &MotionConfig) -> Self {
        Self::with_threshold(config.reveal_threshold())
    }

    fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            visibility: Section::ALL
                .iter()
                .map(|s| (*s, Visibility::Hidden))
                .collect(),
            observed: BTreeSet::new(),
            torn_down: false,
        }
    }

    pub fn observe(&mut self, sections: impl IntoIterator<Item = Section>) {
        if self.torn_down {
            return;
        }
        self.observed.extend(sections);
    }

    /// Returns true only for the sample that flips `section` to `Revealed`.
    pub fn record(&mut self, section: Section, sample: IntersectionSample) -> bool {
        if self.torn_down || !self.observed.contains(&section) {
            return false;
        }
        if !sample.is_intersecting || sample.ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        let state = self.visibility.entry(section).or_default();
        if *state == Visibility::Revealed {
            return false;
        }
        *state = Visibility::Revealed;
        log::debug!("section {section} revealed at ratio {:.3}", sample.ratio);
        true
    }

    /// Unregisters every observed section. Safe to call more than once.
    pub fn teardown(&mut self) -> Vec<Section> {
        self.torn_down = true;
        let released = std::mem::take(&mut self.observed);
        if !released.is_empty() {
            log::debug!("stopped observing {} sections", released.len());
        }
        released.into_iter().collect()
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.visibility.get(&section) == Some(&Visibility::Revealed)
    }

    pub fn visibility(&self) -> &SectionVisibility {
        &self.visibility
    }

    pub fn is_observing(&self, section: Section) -> bool {
        self.observed.contains(&section)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
