//! Page geometry: section offsets, scroll progress, navigation state.

/// Vertical layout of the page: each section's start row and height, in page
/// rows. Rebuilt whenever the terminal width changes section heights.
#[derive(Debug, Clone, Default)]
pub struct SectionLayout {
    offsets: Vec<u16>,
    heights: Vec<u16>,
    total: u16,
}

impl SectionLayout {
    pub fn new(heights: &[u16]) -> Self {
        let mut offsets = Vec::with_capacity(heights.len());
        let mut total: u16 = 0;
        for &height in heights {
            offsets.push(total);
            total = total.saturating_add(height);
        }
        Self {
            offsets,
            heights: heights.to_vec(),
            total,
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Start row of a section; out-of-range indexes land at the page bottom.
    pub fn offset_of(&self, index: usize) -> u16 {
        self.offsets.get(index).copied().unwrap_or(self.total)
    }

    pub fn height_of(&self, index: usize) -> u16 {
        self.heights.get(index).copied().unwrap_or(0)
    }

    /// Total page height in rows.
    pub fn total(&self) -> u16 {
        self.total
    }

    /// Highest valid scroll offset for a viewport.
    pub fn max_scroll(&self, viewport: u16) -> u16 {
        self.total.saturating_sub(viewport)
    }

    /// Index of the section containing a page row (the scrollspy). Rows past
    /// the end belong to the last section.
    pub fn section_at(&self, row: u16) -> usize {
        if self.offsets.is_empty() {
            return 0;
        }
        let mut current = 0;
        for (index, &offset) in self.offsets.iter().enumerate() {
            if offset <= row {
                current = index;
            } else {
                break;
            }
        }
        current
    }
}

/// Scroll progress in [0, 1]; a page that fits entirely reads as 0.
pub fn scroll_progress(scroll: u16, max_scroll: u16) -> f32 {
    if max_scroll == 0 {
        return 0.0;
    }
    (scroll.min(max_scroll) as f32 / max_scroll as f32).clamp(0.0, 1.0)
}

/// Whether the navigation bar should switch to its condensed (scrolled)
/// style.
pub fn is_condensed(scroll: u16, threshold: u16) -> bool {
    scroll > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_cumulative() {
        let layout = SectionLayout::new(&[10, 20, 5]);
        assert_eq!(layout.offset_of(0), 0);
        assert_eq!(layout.offset_of(1), 10);
        assert_eq!(layout.offset_of(2), 30);
        assert_eq!(layout.total(), 35);
        // Out of range clamps to the bottom
        assert_eq!(layout.offset_of(9), 35);
    }

    #[test]
    fn test_section_at_boundaries() {
        let layout = SectionLayout::new(&[10, 20, 5]);
        assert_eq!(layout.section_at(0), 0);
        assert_eq!(layout.section_at(9), 0);
        assert_eq!(layout.section_at(10), 1);
        assert_eq!(layout.section_at(29), 1);
        assert_eq!(layout.section_at(30), 2);
        assert_eq!(layout.section_at(200), 2);
    }

    #[test]
    fn test_max_scroll_saturates() {
        let layout = SectionLayout::new(&[10, 10]);
        assert_eq!(layout.max_scroll(15), 5);
        // Viewport taller than the page
        assert_eq!(layout.max_scroll(50), 0);
    }

    #[test]
    fn test_empty_layout() {
        let layout = SectionLayout::new(&[]);
        assert_eq!(layout.total(), 0);
        assert_eq!(layout.section_at(5), 0);
        assert_eq!(layout.max_scroll(10), 0);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0, 100), 0.0);
        assert!((scroll_progress(50, 100) - 0.5).abs() < 1e-6);
        assert_eq!(scroll_progress(100, 100), 1.0);
        // Over-scroll clamps rather than exceeding 1
        assert_eq!(scroll_progress(130, 100), 1.0);
        // Page fits in the viewport
        assert_eq!(scroll_progress(0, 0), 0.0);
    }

    #[test]
    fn test_condensed_threshold() {
        assert!(!is_condensed(0, 6));
        assert!(!is_condensed(6, 6));
        assert!(is_condensed(7, 6));
    }
}
