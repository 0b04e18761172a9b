//! FAQ disclosure: at most one answer open.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqState {
    open: Option<usize>,
    len: usize,
}

impl FaqState {
    /// All questions collapsed.
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    /// Restore a client-held state; an out-of-range index means none open.
    pub fn with_open(len: usize, open: Option<usize>) -> Self {
        Self {
            open: open.filter(|&i| i < len),
            len,
        }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_open(&self, i: usize) -> bool {
        self.open == Some(i)
    }

    /// Close `i` if it is open, otherwise open it and close any other.
    pub fn toggle(&mut self, i: usize) {
        if i >= self.len {
            return;
        }
        self.open = if self.open == Some(i) { None } else { Some(i) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_question_scenario() {
        let mut faq = FaqState::new(4);
        assert_eq!(faq.open(), None);

        faq.toggle(1);
        assert_eq!(faq.open(), Some(1));
        faq.toggle(1);
        assert_eq!(faq.open(), None);

        faq.toggle(0);
        faq.toggle(3);
        assert_eq!(faq.open(), Some(3));
        assert!((0..4).filter(|&i| faq.is_open(i)).eq([3]));
    }

    #[test]
    fn test_out_of_range() {
        let mut faq = FaqState::with_open(3, Some(1));
        faq.toggle(3);
        assert_eq!(faq.open(), Some(1));
        assert_eq!(FaqState::with_open(3, Some(5)).open(), None);
    }
}
