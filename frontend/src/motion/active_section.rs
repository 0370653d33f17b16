use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// The first section, in document order, whose band contains
/// `scroll_y + offset`. Keeps `previous` when nothing matches.
pub fn active_section(
    sections: &[SectionBounds],
    scroll_y: f64,
    offset: f64,
    previous: &'static str,
) -> &'static str {
    let position = scroll_y + offset;
    sections
        .iter()
        .find(|section| section.contains(position))
        .map(|section| section.id)
        .unwrap_or(previous)
}

/// Lets at most one pending animation-frame check exist at a time.
#[derive(Clone, Default)]
pub struct FrameGate {
    armed: Rc<Cell<bool>>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the caller should request a frame. False while one is pending.
    pub fn try_arm(&self) -> bool {
        !self.armed.replace(true)
    }

    pub fn release(&self) {
        self.armed.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "hero", top: 0.0, height: 800.0 },
            SectionBounds { id: "about", top: 800.0, height: 900.0 },
            SectionBounds { id: "services", top: 1700.0, height: 700.0 },
            SectionBounds { id: "contact", top: 3000.0, height: 600.0 },
        ]
    }

    #[test]
    fn band_position_includes_the_offset() {
        assert_eq!(active_section(&page(), 650.0, 100.0, "hero"), "hero");
        assert_eq!(active_section(&page(), 700.0, 100.0, "hero"), "about");
    }

    #[test]
    fn gap_between_sections_keeps_previous() {
        assert_eq!(active_section(&page(), 2500.0, 100.0, "services"), "services");
        assert_eq!(active_section(&[], 0.0, 100.0, "blog"), "blog");
    }

    #[test]
    fn overlapping_sections_resolve_to_the_first_in_order() {
        let sections = [
            SectionBounds { id: "portfolio", top: 0.0, height: 1000.0 },
            SectionBounds { id: "blog", top: 500.0, height: 1000.0 },
        ];
        assert_eq!(active_section(&sections, 600.0, 100.0, "hero"), "portfolio");
    }

    #[test]
    fn gate_allows_one_pending_frame() {
        let gate = FrameGate::new();
        let shared = gate.clone();
        assert!(gate.try_arm());
        assert!(!shared.try_arm());
        shared.release();
        assert!(gate.try_arm());
    }
}
