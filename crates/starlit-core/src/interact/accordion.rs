//! FAQ accordion state.

/// Exclusive-open accordion: at most one item is expanded at a time.
#[derive(Debug, Clone)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Toggle an item: opening it collapses whatever else was open, toggling
    /// the open item collapses everything. Out-of-range is ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut accordion = Accordion::new(4);
        assert_eq!(accordion.open(), None);
        accordion.toggle(1);
        assert!(accordion.is_open(1));
        accordion.toggle(1);
        assert_eq!(accordion.open(), None);
    }

    #[test]
    fn test_open_is_exclusive() {
        let mut accordion = Accordion::new(4);
        accordion.toggle(0);
        accordion.toggle(3);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(3));
        assert_eq!(accordion.open(), Some(3));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut accordion = Accordion::new(2);
        accordion.toggle(5);
        assert_eq!(accordion.open(), None);
        accordion.toggle(1);
        accordion.toggle(5);
        assert!(accordion.is_open(1));
    }
}
