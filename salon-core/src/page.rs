//! Interaction state for the rest of the landing page: navigation, the mobile
//! menu, the FAQ accordion and the stat counters.

use serde::{Deserialize, Serialize};

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;
/// How far above a section's top edge it already counts as active.
pub const SECTION_OFFSET: f64 = 150.0;

pub fn navbar_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns true when the key press changed the menu.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.open = false;
            return true;
        }
        false
    }

    /// Keeps Tab focus inside the open menu. `at_first`/`at_last` say whether
    /// focus is on the menu's first or last link; the result is where focus
    /// should jump instead of leaving the menu.
    pub fn focus_wrap(
        &self,
        key: &str,
        shift: bool,
        at_first: bool,
        at_last: bool,
    ) -> Option<FocusWrap> {
        if !self.open || key != "Tab" {
            return None;
        }
        if shift && at_first {
            Some(FocusWrap::Last)
        } else if !shift && at_last {
            Some(FocusWrap::First)
        } else {
            None
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusWrap {
    First,
    Last,
}

/// At most one FAQ item is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section the viewport is in, for highlighting its nav link. Later
/// sections win when windows overlap.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - SECTION_OFFSET;
            scroll_y >= top && scroll_y < top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

/// How much of a stat counter must be on screen before it starts counting.
pub const STAT_VISIBLE_THRESHOLD: f64 = 0.5;

/// Where a stat counter is in its one-shot animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountUpPhase {
    /// Not yet scrolled into view; the final value is shown.
    #[default]
    Waiting,
    Running(u32),
    Done,
}

/// Frames of the stat counter animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountUp {
    pub target: f64,
    pub suffix: String,
    pub steps: u32,
}

impl CountUp {
    pub const DEFAULT_STEPS: u32 = 60;
    pub const DURATION_MS: u32 = 2000;

    /// Splits stat text like "500+" into its number and suffix.
    pub fn parse(text: &str) -> Option<Self> {
        let split = text
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(text.len());
        let (number, suffix) = text.split_at(split);
        let target = number.parse::<f64>().ok()?;

        Some(Self {
            target,
            suffix: suffix.to_string(),
            steps: Self::DEFAULT_STEPS,
        })
    }

    pub fn frame_interval_ms(&self) -> u32 {
        Self::DURATION_MS / self.steps.max(1)
    }

    pub fn is_last_frame(&self, frame: u32) -> bool {
        frame >= self.steps
    }

    /// Text for `frame` (1-based). Intermediate frames show the floored value;
    /// the last one shows the exact target.
    pub fn frame(&self, frame: u32) -> String {
        let current = self.target * f64::from(frame) / f64::from(self.steps.max(1));
        if self.is_last_frame(frame) || current >= self.target {
            self.final_text()
        } else {
            format!("{}{}", current.floor(), self.suffix)
        }
    }

    pub fn final_text(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }

    /// The counter became visible. Only a waiting counter starts; it never
    /// restarts after finishing.
    pub fn start(&self, phase: CountUpPhase) -> CountUpPhase {
        match phase {
            CountUpPhase::Waiting => CountUpPhase::Running(0),
            other => other,
        }
    }

    pub fn tick(&self, phase: CountUpPhase) -> CountUpPhase {
        match phase {
            CountUpPhase::Running(frame) if self.is_last_frame(frame + 1) => CountUpPhase::Done,
            CountUpPhase::Running(frame) => CountUpPhase::Running(frame + 1),
            other => other,
        }
    }

    pub fn text(&self, phase: CountUpPhase) -> String {
        match phase {
            CountUpPhase::Running(frame) => self.frame(frame),
            CountUpPhase::Waiting | CountUpPhase::Done => self.final_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn test_scroll_thresholds() {
        assert!(!navbar_is_scrolled(50.0));
        assert!(navbar_is_scrolled(51.0));
        assert!(!scroll_top_visible(400.0));
        assert!(scroll_top_visible(401.0));
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        assert!(!menu.on_key("Escape"));

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.aria_expanded(), "true");
        assert!(!menu.on_key("Enter"));
        assert!(menu.on_key("Escape"));
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn test_mobile_menu_traps_tab_focus() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.focus_wrap("Tab", false, false, true), None);

        menu.toggle();
        assert_eq!(menu.focus_wrap("Tab", false, false, true), Some(FocusWrap::First));
        assert_eq!(menu.focus_wrap("Tab", true, true, false), Some(FocusWrap::Last));
        assert_eq!(menu.focus_wrap("Tab", false, true, false), None);
        assert_eq!(menu.focus_wrap("Tab", true, false, true), None);
        assert_eq!(menu.focus_wrap("Enter", false, false, true), None);
    }

    #[test]
    fn test_faq_accordion_keeps_one_open() {
        let mut faq = FaqAccordion::default();
        faq.toggle(2);
        assert!(faq.is_open(2));

        faq.toggle(0);
        assert!(faq.is_open(0));
        assert!(!faq.is_open(2));

        faq.toggle(0);
        assert_eq!(faq.open_item(), None);
    }

    #[test]
    fn test_active_section() {
        let sections = vec![
            section("hizmetler", 600.0, 800.0),
            section("galeri", 1400.0, 700.0),
        ];

        assert_eq!(active_section(100.0, &sections), None);
        assert_eq!(active_section(450.0, &sections), Some("hizmetler"));
        assert_eq!(active_section(1250.0, &sections), Some("galeri"));
        assert_eq!(active_section(1950.0, &sections), None);
    }

    #[test]
    fn test_count_up_parse() {
        let stat = CountUp::parse("500+").unwrap();
        assert_eq!(stat.target, 500.0);
        assert_eq!(stat.suffix, "+");

        let rating = CountUp::parse("4.9").unwrap();
        assert_eq!(rating.suffix, "");

        assert_eq!(CountUp::parse("VIP"), None);
    }

    #[test]
    fn test_count_up_frames() {
        let stat = CountUp::parse("500+").unwrap();
        assert_eq!(stat.frame_interval_ms(), 33);
        assert_eq!(stat.frame(1), "8+");
        assert_eq!(stat.frame(30), "250+");
        assert_eq!(stat.frame(59), "491+");
        assert_eq!(stat.frame(60), "500+");
        assert!(stat.is_last_frame(60));
    }

    #[test]
    fn test_count_up_runs_once_after_becoming_visible() {
        let stat = CountUp::parse("500+").unwrap();
        let mut phase = CountUpPhase::default();

        assert_eq!(stat.tick(phase), CountUpPhase::Waiting);
        assert_eq!(stat.text(phase), "500+");

        phase = stat.start(phase);
        assert_eq!(phase, CountUpPhase::Running(0));
        assert_eq!(stat.text(phase), "0+");

        phase = stat.tick(phase);
        assert_eq!(stat.text(phase), "8+");
        assert_eq!(stat.start(phase), phase);

        for _ in 1..stat.steps {
            phase = stat.tick(phase);
        }
        assert_eq!(phase, CountUpPhase::Done);
        assert_eq!(stat.text(phase), "500+");
        assert_eq!(stat.start(phase), CountUpPhase::Done);
    }
}
