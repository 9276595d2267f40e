use crate::{
    config::MotionConfig,
    reveal::{IntersectionSample, Section, SectionVisibility, VisibilityRevealer},
    scroll::{work_drift, HeroStyle, ScrollOffset, ScrollTracker},
};

/// Scroll and reveal state owned by one mounted portfolio page.
#[derive(Debug, Clone)]
pub struct PageMotion {
    config: MotionConfig,
    tracker: ScrollTracker,
    revealer: VisibilityRevealer,
}

impl PageMotion {
    pub fn mount(config: MotionConfig) -> Self {
        let mut revealer = VisibilityRevealer::from_config(&config);
        revealer.observe(Section::ALL);
        Self {
            config,
            tracker: ScrollTracker::attach(ScrollOffset::TOP),
            revealer,
        }
    }

    pub fn scroll(&mut self, offset: ScrollOffset) -> bool {
        self.tracker.on_scroll(offset)
    }

    pub fn intersect(&mut self, section: Section, sample: IntersectionSample) -> bool {
        self.revealer.record(section, sample)
    }

    pub fn teardown(&mut self) {
        self.tracker.teardown();
        self.revealer.teardown();
    }

    pub fn is_active(&self) -> bool {
        self.tracker.is_attached()
    }

    pub fn offset(&self) -> ScrollOffset {
        self.tracker.offset()
    }

    pub fn hero_style(&self) -> HeroStyle {
        HeroStyle::at(self.tracker.offset(), &self.config)
    }

    pub fn work_drift(&self) -> f64 {
        work_drift(self.tracker.offset(), &self.config)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealer.is_revealed(section)
    }

    pub fn visibility(&self) -> &SectionVisibility {
        self.revealer.visibility()
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_observes_every_section() {
        let mut motion = PageMotion::mount(MotionConfig::default());
        assert!(motion.is_active());
        assert_eq!(motion.offset(), ScrollOffset::TOP);
        for section in Section::ALL {
            assert!(!motion.is_revealed(section));
            assert!(motion.intersect(section, IntersectionSample::new(true, 0.5)));
        }
    }

    #[test]
    fn test_scroll_drives_hero_style() {
        let mut motion = PageMotion::mount(MotionConfig::default());
        assert_eq!(motion.hero_style().opacity, 1.0);
        assert!(motion.scroll(ScrollOffset::new(800)));
        let style = motion.hero_style();
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate_y, 240.0);
        assert_eq!(motion.work_drift(), 0.0);
    }

    #[test]
    fn test_custom_fade_distance() {
        let config = MotionConfig::default().with_fade_distance(200.0).unwrap();
        let mut motion = PageMotion::mount(config);
        motion.scroll(ScrollOffset::new(100));
        assert_eq!(motion.hero_style().opacity, 0.5);
    }

    #[test]
    fn test_late_signals_after_teardown_are_noops() {
        let mut motion = PageMotion::mount(MotionConfig::default());
        motion.scroll(ScrollOffset::new(120));
        motion.intersect(Section::Hero, IntersectionSample::new(true, 1.0));
        let visibility = motion.visibility().clone();

        motion.teardown();
        motion.teardown();
        assert!(!motion.is_active());

        assert!(!motion.scroll(ScrollOffset::new(900)));
        assert!(!motion.intersect(Section::Work, IntersectionSample::new(true, 1.0)));
        assert_eq!(motion.offset().px(), 120);
        assert_eq!(motion.visibility(), &visibility);
    }

    #[test]
    fn test_scrolling_leaves_reveal_flags_alone() {
        let mut motion = PageMotion::mount(MotionConfig::default());
        motion.intersect(Section::Work, IntersectionSample::new(true, 0.4));
        let flags: Vec<_> = Section::ALL.iter().map(|s| motion.is_revealed(*s)).collect();
        for px in (0..3000).step_by(50) {
            assert!(motion.scroll(ScrollOffset::new(px + 1)));
            let now: Vec<_> = Section::ALL.iter().map(|s| motion.is_revealed(*s)).collect();
            assert_eq!(now, flags);
        }
    }

    #[test]
    fn test_pages_do_not_share_state() {
        let mut first = PageMotion::mount(MotionConfig::default());
        let second = PageMotion::mount(MotionConfig::default());
        first.scroll(ScrollOffset::new(300));
        first.intersect(Section::About, IntersectionSample::new(true, 0.3));
        assert_eq!(second.offset(), ScrollOffset::TOP);
        assert!(!second.is_revealed(Section::About));
    }
}
