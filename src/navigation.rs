//! Navigation controller
//!
//! Holds the index of the current step and exposes the three transitions the
//! guide supports: previous, next, and jump-to-step. The index always stays
//! within the catalog.

use tracing::debug;

use crate::error::{GuideError, GuideResult};
use crate::models::{Catalog, Step};

/// Bounded cursor over a [`Catalog`]
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    current: usize,
}

impl Navigator {
    /// Create a navigator positioned on the first step
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: 0,
        }
    }

    /// Create a navigator positioned on `index`
    pub fn starting_at(catalog: Catalog, index: usize) -> GuideResult<Self> {
        let mut navigator = Self::new(catalog);
        navigator.go_to_step(index)?;
        Ok(navigator)
    }

    /// The catalog being navigated
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Zero-based index of the current step
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The step currently shown
    pub fn current_step(&self) -> &'static Step {
        &self.catalog.steps()[self.current]
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Always false; see [`Catalog::is_empty`]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Whether "Previous" is enabled
    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    /// Whether "Next" is enabled
    pub fn can_go_next(&self) -> bool {
        self.current < self.catalog.last_index()
    }

    /// Whether step `index` is completed or current
    pub fn is_reached(&self, index: usize) -> bool {
        index <= self.current
    }

    /// Move back one step. Returns whether the index changed.
    pub fn go_to_previous(&mut self) -> bool {
        let target = self.current.saturating_sub(1);
        self.set(target)
    }

    /// Move forward one step. Returns whether the index changed.
    pub fn go_to_next(&mut self) -> bool {
        let target = (self.current + 1).min(self.catalog.last_index());
        self.set(target)
    }

    /// Jump directly to `index`
    ///
    /// An index outside the catalog is rejected and the current step is
    /// left unchanged.
    pub fn go_to_step(&mut self, index: usize) -> GuideResult<bool> {
        if index >= self.catalog.len() {
            return Err(GuideError::step_out_of_range(index, self.catalog.len()));
        }
        Ok(self.set(index))
    }

    /// Jump to the first step
    pub fn go_to_first(&mut self) -> bool {
        self.set(0)
    }

    /// Jump to the last step
    pub fn go_to_last(&mut self) -> bool {
        self.set(self.catalog.last_index())
    }

    fn set(&mut self, index: usize) -> bool {
        if index == self.current {
            return false;
        }
        debug!(from = self.current, to = index, "step changed");
        self.current = index;
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHORT: [Step; 2] = [
        Step {
            title: "1. One",
            icon: "a",
            content: "first",
            tips: &[],
        },
        Step {
            title: "2. Two",
            icon: "b",
            content: "second",
            tips: &["tip"],
        },
    ];

    #[test]
    fn test_starts_at_zero() {
        let nav = Navigator::default();
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.current_step().title, "1. Set Up");
        assert!(!nav.can_go_previous());
        assert!(nav.can_go_next());
    }

    #[test]
    fn test_go_to_step_each_index() {
        let mut nav = Navigator::default();
        for i in 0..nav.len() {
            nav.go_to_step(i).unwrap();
            assert_eq!(nav.current_index(), i);
            assert_eq!(nav.current_step(), &crate::models::STEPS[i]);
        }
    }

    #[test]
    fn test_go_to_step_out_of_range_keeps_state() {
        let mut nav = Navigator::default();
        nav.go_to_step(2).unwrap();

        let err = nav.go_to_step(5).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_previous_is_idempotent_at_start() {
        let mut nav = Navigator::default();
        for _ in 0..3 {
            assert!(!nav.go_to_previous());
            assert_eq!(nav.current_index(), 0);
            assert!(!nav.can_go_previous());
        }
    }

    #[test]
    fn test_next_is_idempotent_at_end() {
        let mut nav = Navigator::default();
        nav.go_to_step(4).unwrap();
        for _ in 0..3 {
            assert!(!nav.go_to_next());
            assert_eq!(nav.current_index(), 4);
            assert!(!nav.can_go_next());
        }
    }

    #[test]
    fn test_three_nexts_reach_ask_questions() {
        let mut nav = Navigator::default();
        for _ in 0..3 {
            assert!(nav.go_to_next());
        }
        assert_eq!(nav.current_index(), 3);
        assert_eq!(nav.current_step().title, "4. Ask Questions");
        assert!(nav.can_go_previous());
        assert!(nav.can_go_next());
    }

    #[test]
    fn test_jump_to_last_disables_next() {
        let mut nav = Navigator::default();
        nav.go_to_step(4).unwrap();
        assert_eq!(nav.current_step().title, "5. Practice Problems");
        assert!(!nav.can_go_next());
    }

    #[test]
    fn test_index_stays_in_bounds_for_mixed_sequence() {
        let mut nav = Navigator::default();
        let ops = [1, 1, 0, 2, 1, 1, 1, 1, 1, 0, 0, 3, 0, 0, 0, 0, 0, 0, 1];
        for (i, op) in ops.iter().enumerate() {
            match op {
                0 => {
                    nav.go_to_previous();
                }
                1 => {
                    nav.go_to_next();
                }
                2 => {
                    nav.go_to_step(i % nav.len()).unwrap();
                }
                _ => {
                    let _ = nav.go_to_step(i);
                }
            }
            assert!(nav.current_index() <= 4);
        }
    }

    #[test]
    fn test_is_reached() {
        let mut nav = Navigator::default();
        nav.go_to_step(2).unwrap();
        assert!(nav.is_reached(0));
        assert!(nav.is_reached(2));
        assert!(!nav.is_reached(3));
    }

    #[test]
    fn test_first_and_last() {
        let mut nav = Navigator::default();
        assert!(nav.go_to_last());
        assert_eq!(nav.current_index(), 4);
        assert!(nav.go_to_first());
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.go_to_first());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(&SHORT).unwrap();
        let mut nav = Navigator::starting_at(catalog, 1).unwrap();
        assert!(!nav.can_go_next());
        assert!(nav.go_to_previous());
        assert_eq!(nav.current_step().content, "first");
    }

    #[test]
    fn test_starting_at_out_of_range() {
        let err = Navigator::starting_at(Catalog::builtin(), 9).unwrap_err();
        assert!(err.is_out_of_range());
    }
}
