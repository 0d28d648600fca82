// Round-robin index over the hero background images.
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    // stays at 0 when there is nothing to cycle
    pub fn advance(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            len: self.len,
        }
    }

    pub fn current<'a>(&self, items: &'a [String]) -> Option<&'a str> {
        items.get(self.index).map(String::as_str)
    }
}

// setInterval takes an i32 timeout; longer intervals saturate.
pub fn timer_timeout(interval_ms: u32) -> i32 {
    i32::try_from(interval_ms).unwrap_or(i32::MAX)
}

pub enum CarouselAction {
    Advance,
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::Advance => Rc::new(self.advance()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Carousel, timer_timeout};

    #[test]
    fn wraps_after_last_image() {
        let c = Carousel::new(3);
        let seq: Vec<usize> = std::iter::successors(Some(c), |c| Some(c.advance()))
            .take(5)
            .map(|c| c.index)
            .collect();
        assert_eq!(seq, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let c = Carousel::new(0).advance().advance();
        assert_eq!(c.index, 0);
        assert_eq!(c.current(&[]), None);
    }

    #[test]
    fn reducer_advances() {
        use super::CarouselAction;
        use std::rc::Rc;
        use yew::Reducible;
        let c = Rc::new(Carousel::new(2)).reduce(CarouselAction::Advance);
        assert_eq!(c.index, 1);
    }

    #[test]
    fn current_picks_indexed_item() {
        let items = vec!["one.jpg".to_string(), "two.jpg".to_string()];
        assert_eq!(Carousel::new(2).advance().current(&items), Some("two.jpg"));
    }

    #[test]
    fn timeout_saturates_instead_of_wrapping() {
        assert_eq!(timer_timeout(5000), 5000);
        assert_eq!(timer_timeout(i32::MAX as u32), i32::MAX);
        assert_eq!(timer_timeout(u32::MAX), i32::MAX);
    }
}
