use crate::streamable::Streamable;

/// Yields clones of one value `max_count` times, then ends.
#[derive(Clone, Debug)]
pub struct CountingStreamable<T> {
    value: T,
    max_count: usize,
    count: usize,
}

impl<T: Clone> CountingStreamable<T> {
    pub fn new(value: T, max_count: usize) -> Self {
        Self { value, max_count, count: 0 }
    }

    /// Number of elements produced so far.
    pub fn produced(&self) -> usize {
        self.count
    }
}

impl<T: Clone> Streamable for CountingStreamable<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.count == self.max_count {
            return None;
        }
        self.count += 1;
        Some(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_value_max_count_times() {
        let mut s = CountingStreamable::new(3.0_f32, 10);
        for _ in 0..10 {
            assert_eq!(s.next(), Some(3.0));
        }
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
        assert_eq!(s.produced(), 10);
    }

    #[test]
    fn zero_count_is_empty() {
        let mut s = CountingStreamable::new("x", 0);
        assert_eq!(s.next(), None);
    }
}
