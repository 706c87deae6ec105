use std::rc::Rc;
use yew::Reducible;

/// Product of drag offset and release velocity above which a drag counts as
/// a swipe. Tuning value, not a contract.
pub const SWIPE_THRESHOLD: f64 = 10_000.0;

/// Index state machine shared by the hero carousel, the lifestyle slider and
/// the lightbox. Holds a position into a fixed, non-empty image sequence and
/// wraps around at both ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    len: usize,
}

/// Operations components dispatch through `use_reducer`.
pub enum NavigatorAction {
    Advance,
    Retreat,
    JumpTo(usize),
    Reset(usize),
}

impl Navigator {
    /// `len` is the length of the image sequence; sequences are curated at
    /// configuration time and guaranteed non-empty.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "image sequence must be non-empty");
        Self { index: 0, len }
    }

    pub fn starting_at(len: usize, start: usize) -> Self {
        let mut nav = Self::new(len);
        nav.reset(start);
        nav
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Out-of-range input is a caller bug, not a recoverable condition.
    pub fn jump_to(&mut self, i: usize) {
        assert!(i < self.len, "index {} out of range for {} images", i, self.len);
        self.index = i;
    }

    /// Re-seeds the position when the lightbox transitions from closed to
    /// open, regardless of where it was left last time.
    pub fn reset(&mut self, start: usize) {
        self.jump_to(start);
    }
}

impl Reducible for Navigator {
    type Action = NavigatorAction;

    fn reduce(self: Rc<Self>, action: NavigatorAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavigatorAction::Advance => next.advance(),
            NavigatorAction::Retreat => next.retreat(),
            NavigatorAction::JumpTo(i) => next.jump_to(i),
            NavigatorAction::Reset(start) => next.reset(start),
        }
        next.into()
    }
}

/// Direction a finished drag resolved to, if it cleared the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Advance,
    Retreat,
}

/// Classifies a finished horizontal drag. Fast flicks over a short distance
/// and slow drags over a long one both qualify; anything below the threshold
/// is discarded with no index change.
pub fn classify_swipe(offset_x: f64, velocity_x: f64) -> Option<Swipe> {
    let momentum = offset_x.abs() * velocity_x;
    if momentum < -SWIPE_THRESHOLD {
        Some(Swipe::Advance)
    } else if momentum > SWIPE_THRESHOLD {
        Some(Swipe::Retreat)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_len_times_wraps_back_to_start() {
        for len in 1..8 {
            let mut nav = Navigator::starting_at(len, len / 2);
            let start = nav.index();
            for _ in 0..len {
                nav.advance();
            }
            assert_eq!(nav.index(), start);
        }
    }

    #[test]
    fn retreat_then_advance_is_identity() {
        for start in 0..5 {
            let mut nav = Navigator::starting_at(5, start);
            nav.retreat();
            nav.advance();
            assert_eq!(nav.index(), start);
            nav.advance();
            nav.retreat();
            assert_eq!(nav.index(), start);
        }
    }

    #[test]
    fn retreat_wraps_to_last_image() {
        let mut nav = Navigator::new(11);
        nav.retreat();
        assert_eq!(nav.index(), 10);
    }

    #[test]
    fn jump_to_ignores_prior_state() {
        let mut nav = Navigator::new(4);
        nav.advance();
        nav.advance();
        nav.jump_to(1);
        assert_eq!(nav.index(), 1);
        nav.jump_to(3);
        assert_eq!(nav.index(), 3);
    }

    #[test]
    fn reset_seeds_the_lightbox_position() {
        let mut nav = Navigator::new(11);
        nav.advance();
        nav.advance();
        nav.reset(7);
        assert_eq!(nav.index(), 7);
        nav.reset(0);
        assert_eq!(nav.index(), 0);
    }

    #[test]
    #[should_panic]
    fn jump_out_of_range_panics() {
        Navigator::new(4).jump_to(4);
    }

    #[test]
    #[should_panic]
    fn empty_sequence_is_rejected_at_construction() {
        Navigator::new(0);
    }

    #[test]
    fn sub_threshold_drag_is_discarded() {
        assert_eq!(classify_swipe(0.0, 0.0), None);
        assert_eq!(classify_swipe(-50.0, -100.0), None);
        assert_eq!(classify_swipe(120.0, 80.0), None);
    }

    #[test]
    fn fast_left_drag_advances_fast_right_drag_retreats() {
        assert_eq!(classify_swipe(-200.0, -80.0), Some(Swipe::Advance));
        assert_eq!(classify_swipe(250.0, 90.0), Some(Swipe::Retreat));
    }

    #[test]
    fn slow_wide_mouse_drag_clears_the_threshold_too() {
        // 400px over roughly a second, the pace of a desktop pointer drag
        assert_eq!(classify_swipe(-400.0, -400.0), Some(Swipe::Advance));
        assert_eq!(classify_swipe(400.0, 400.0), Some(Swipe::Retreat));
    }

    #[test]
    fn reducer_mirrors_the_plain_operations() {
        let nav: Rc<Navigator> = Rc::new(Navigator::new(3));
        let nav = nav.reduce(NavigatorAction::Advance);
        assert_eq!(nav.index(), 1);
        let nav = nav.reduce(NavigatorAction::Retreat);
        assert_eq!(nav.index(), 0);
        let nav = nav.reduce(NavigatorAction::Reset(2));
        assert_eq!(nav.index(), 2);
    }
}
