// image carousel cursor
//
// the length is fixed when the carousel is created and is never zero, so every
// reachable index is valid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel {
            len: len.max(1),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    // a single image has nothing to navigate to
    pub fn is_navigable(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) -> bool {
        if !self.is_navigable() {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.is_navigable() {
            return false;
        }
        self.index = (self.index + self.len - 1) % self.len;
        true
    }

    // indicator clicks; out of range indices clamp to the last image
    pub fn go_to(&mut self, index: usize) -> bool {
        let index = index.min(self.len - 1);
        let changed = index != self.index;
        self.index = index;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_treated_as_single() {
        let c = Carousel::new(0);
        assert_eq!(c.len(), 1);
        assert!(!c.is_navigable());
    }

    #[test]
    fn single_image_never_moves() {
        let mut c = Carousel::new(1);
        assert!(!c.next());
        assert!(!c.previous());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut c = Carousel::new(3);
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.previous();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn n_steps_is_a_full_cycle() {
        for n in 2..7 {
            let mut c = Carousel::new(n);
            c.go_to(n / 2);
            let start = c.index();
            for _ in 0..n {
                c.next();
            }
            assert_eq!(c.index(), start);

            c.next();
            c.previous();
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn go_to_clamps() {
        let mut c = Carousel::new(4);
        assert!(c.go_to(2));
        assert!(!c.go_to(2));
        c.go_to(99);
        assert_eq!(c.index(), 3);
    }
}
