//! Home page arrangement.
//!
//! The editorial grid shows ten articles in four slots:
//!
//! ```text
//! +---------+---------+      +---------+---------+
//! |         | s1 | s1 |      | s2 | s2 |         |
//! | hero 1  |----+----|      |----+----| hero 2  |
//! |         | s1 | s1 |      | s2 | s2 |         |
//! +---------+---------+      +---------+---------+
//!   A[0]     A[1..=4]          A[5..=8]    A[9]
//! ```

pub mod filter;
pub mod sort;

pub use filter::quick_filter;
pub use sort::{sort_by_published_at, SortOrder};

pub const SECONDARY_GROUP_SIZE: usize = 4;

/// Number of articles the grid can place.
pub const EDITORIAL_CAPACITY: usize = 2 + 2 * SECONDARY_GROUP_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editorial<'a, T> {
    pub hero1: Option<&'a T>,
    pub secondary1: &'a [T],
    pub secondary2: &'a [T],
    pub hero2: Option<&'a T>,
}

impl<'a, T> Editorial<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.hero1.is_none()
    }

    /// Slots in reading order: hero 1, first grid, second grid, hero 2.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.hero1
            .into_iter()
            .chain(self.secondary1.iter())
            .chain(self.secondary2.iter())
            .chain(self.hero2)
    }

    pub fn len(&self) -> usize {
        self.hero1.iter().count()
            + self.secondary1.len()
            + self.secondary2.len()
            + self.hero2.iter().count()
    }
}

/// Split `items` into the editorial slots. Anything past the tenth item is
/// not placed.
pub fn partition<T>(items: &[T]) -> Editorial<'_, T> {
    let first = 1.min(items.len());
    let second = (first + SECONDARY_GROUP_SIZE).min(items.len());
    let third = (second + SECONDARY_GROUP_SIZE).min(items.len());

    Editorial {
        hero1: items.first(),
        secondary1: &items[first..second],
        secondary2: &items[second..third],
        hero2: items.get(third),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_partition_empty() {
        let items: Vec<usize> = Vec::new();
        let layout = partition(&items);
        assert!(layout.is_empty());
        assert!(layout.secondary1.is_empty());
        assert!(layout.secondary2.is_empty());
        assert_eq!(layout.hero2, None);
        assert_eq!(layout.len(), 0);
    }

    #[test]
    fn test_partition_exact_cut_points() {
        let items = numbers(10);
        let layout = partition(&items);
        assert_eq!(layout.hero1, Some(&0));
        assert_eq!(layout.secondary1, &[1, 2, 3, 4]);
        assert_eq!(layout.secondary2, &[5, 6, 7, 8]);
        assert_eq!(layout.hero2, Some(&9));
    }

    #[test]
    fn test_partition_ignores_overflow() {
        let items = numbers(25);
        let layout = partition(&items);
        assert_eq!(layout.hero2, Some(&9));
        assert_eq!(layout.len(), EDITORIAL_CAPACITY);
    }

    #[test]
    fn test_partition_short_inputs() {
        let items = numbers(3);
        let layout = partition(&items);
        assert_eq!(layout.hero1, Some(&0));
        assert_eq!(layout.secondary1, &[1, 2]);
        assert!(layout.secondary2.is_empty());
        assert_eq!(layout.hero2, None);

        let items = numbers(7);
        let layout = partition(&items);
        assert_eq!(layout.secondary1, &[1, 2, 3, 4]);
        assert_eq!(layout.secondary2, &[5, 6]);
        assert_eq!(layout.hero2, None);

        let items = numbers(9);
        let layout = partition(&items);
        assert_eq!(layout.secondary2, &[5, 6, 7, 8]);
        assert_eq!(layout.hero2, None);
    }

    #[test]
    fn test_partition_covers_prefix_without_repeats() {
        for n in 0..=15 {
            let items = numbers(n);
            let layout = partition(&items);
            let placed: Vec<usize> = layout.iter().copied().collect();
            let expected: Vec<usize> = (0..n.min(EDITORIAL_CAPACITY)).collect();
            assert_eq!(placed, expected, "n = {}", n);
            if n >= 1 {
                assert_eq!(layout.hero1, Some(&0));
            }
        }
    }
}
