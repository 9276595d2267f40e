use crate::config::MotionConfig;

/// Vertical distance in whole pixels between the document top and the viewport top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScrollOffset(u32);

impl ScrollOffset {
    pub const TOP: Self = Self(0);

    pub fn new(px: u32) -> Self {
        Self(px)
    }

    /// Normalizes a raw `window.scrollY` reading. Overscroll bounce can report
    /// negative values and zoomed pages report fractional ones.
    pub fn from_pixels(px: f64) -> Self {
        if px.is_nan() || px <= 0.0 {
            return Self::TOP;
        }
        Self(px.round().min(u32::MAX as f64) as u32)
    }

    pub fn px(&self) -> u32 {
        self.0
    }

    fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroStyle {
    pub translate_y: f64,
    pub opacity: f64,
}

impl HeroStyle {
    pub fn at(offset: ScrollOffset, config: &MotionConfig) -> Self {
        let s = offset.as_f64();
        Self {
            translate_y: s * config.parallax_factor(),
            opacity: (1.0 - s / config.fade_distance()).clamp(0.0, 1.0),
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }

    pub fn opacity(&self) -> String {
        self.opacity.to_string()
    }
}

/// Drift applied to the work section while it approaches the viewport.
pub fn work_drift(offset: ScrollOffset, config: &MotionConfig) -> f64 {
    ((offset.as_f64() - config.work_anchor()) * -config.work_drift_factor()).max(0.0)
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    offset: ScrollOffset,
    attached: bool,
}

impl ScrollTracker {
    pub fn attach(initial: ScrollOffset) -> Self {
        Self {
            offset: initial,
            attached: true,
        }
    }

    /// Returns whether the stored offset changed.
    pub fn on_scroll(&mut self, offset: ScrollOffset) -> bool {
        if !self.attached {
            log::debug!("scroll signal after teardown ignored");
            return false;
        }
        if self.offset == offset {
            return false;
        }
        self.offset = offset;
        true
    }

    pub fn teardown(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(px: u32) -> HeroStyle {
        HeroStyle::at(ScrollOffset::new(px), &MotionConfig::default())
    }

    #[test]
    fn test_hero_style_at_top() {
        let s = style(0);
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.translate_y, 0.0);
        assert_eq!(s.transform(), "translateY(0px)");
    }

    #[test]
    fn test_hero_style_at_fade_distance() {
        let s = style(800);
        assert_eq!(s.opacity, 0.0);
        assert_eq!(s.translate_y, 240.0);
    }

    #[test]
    fn test_hero_opacity_clamped_past_fade_distance() {
        let s = style(2000);
        assert_eq!(s.opacity, 0.0);
        assert_eq!(s.translate_y, 600.0);
        assert_eq!(s.opacity(), "0");
    }

    #[test]
    fn test_hero_style_properties() {
        for px in (0..5000).step_by(37) {
            let s = style(px);
            let expected = (1.0 - px as f64 / 800.0).clamp(0.0, 1.0);
            assert!((s.opacity - expected).abs() < 1e-12, "opacity at {px}");
            assert!((0.0..=1.0).contains(&s.opacity));
            assert!((s.translate_y - px as f64 * 0.3).abs() < 1e-9, "translate at {px}");
        }
    }

    #[test]
    fn test_halfway_fade() {
        assert_eq!(style(400).opacity, 0.5);
    }

    #[test]
    fn test_work_drift() {
        let config = MotionConfig::default();
        assert_eq!(work_drift(ScrollOffset::TOP, &config), 20.0);
        assert_eq!(work_drift(ScrollOffset::new(200), &config), 10.0);
        assert_eq!(work_drift(ScrollOffset::new(400), &config), 0.0);
        assert_eq!(work_drift(ScrollOffset::new(1200), &config), 0.0);
    }

    #[test]
    fn test_offset_normalization() {
        assert_eq!(ScrollOffset::from_pixels(-35.0), ScrollOffset::TOP);
        assert_eq!(ScrollOffset::from_pixels(f64::NAN), ScrollOffset::TOP);
        assert_eq!(ScrollOffset::from_pixels(120.4).px(), 120);
        assert_eq!(ScrollOffset::from_pixels(120.6).px(), 121);
        assert_eq!(ScrollOffset::from_pixels(f64::INFINITY).px(), u32::MAX);
    }

    #[test]
    fn test_tracker_updates_until_teardown() {
        let mut tracker = ScrollTracker::attach(ScrollOffset::TOP);
        assert!(tracker.on_scroll(ScrollOffset::new(10)));
        assert!(!tracker.on_scroll(ScrollOffset::new(10)));
        assert_eq!(tracker.offset().px(), 10);

        tracker.teardown();
        tracker.teardown();
        assert!(!tracker.is_attached());
        assert!(!tracker.on_scroll(ScrollOffset::new(500)));
        assert_eq!(tracker.offset().px(), 10);
    }
}
