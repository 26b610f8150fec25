//! Powerset generators based on combining integers or sets.

use std::collections::VecDeque;

type Combine<T> = fn(&T, &T) -> T;

/// Breadth-first walk over the combinations of `start` with `other`.
///
/// Each queued entry pairs a combination with the offset of the first element
/// of `other` it may still absorb, so the remaining suffixes are never copied.
#[derive(Clone, Debug)]
pub struct Combinations<T> {
    start: Option<T>,
    other: Vec<T>,
    current: Option<(T, usize)>,
    queue: VecDeque<(T, usize)>,
    combine: Combine<T>,
}

impl<T: Clone> Combinations<T> {
    fn new(start: T, other: Vec<T>, exclude_start: bool, combine: Combine<T>) -> Self {
        Self {
            start: (!exclude_start).then(|| start.clone()),
            other,
            current: Some((start, 0)),
            queue: VecDeque::new(),
            combine,
        }
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(start) = self.start.take() {
            return Some(start);
        }
        loop {
            if let Some((current, next)) = self.current.as_mut() {
                if let Some(first) = self.other.get(*next) {
                    let result = (self.combine)(current, first);
                    *next += 1;
                    if *next < self.other.len() {
                        self.queue.push_back((result.clone(), *next));
                    }
                    return Some(result);
                }
            }
            self.current = Some(self.queue.pop_front()?);
        }
    }
}

/// Yield all unions of `start` with `other` in shortlex order.
pub fn shortlex<T>(start: T, other: impl IntoIterator<Item = T>, exclude_start: bool) -> Combinations<T>
where
    T: Clone + core::ops::BitOr<Output = T>,
{
    let other = other.into_iter().collect();
    Combinations::new(start, other, exclude_start, |a, b| a.clone() | b.clone())
}

/// Yield all intersections of `end` with `other` in reverse shortlex order.
pub fn reverse_shortlex<T>(end: T, other: impl IntoIterator<Item = T>, exclude_end: bool) -> Combinations<T>
where
    T: Clone + core::ops::BitAnd<Output = T>,
{
    let other = other.into_iter().collect();
    Combinations::new(end, other, exclude_end, |a, b| a.clone() & b.clone())
}
