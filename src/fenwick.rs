//! Fenwick tree (binary indexed tree) with point updates and prefix sums.
//!
//! # Layout
//!
//! Two arrays of length `size`:
//! - `values[i]`: the logical value at index `i` (net of all deltas).
//! - `tree[p - 1]`: for the 1-based position `p`, the sum of the
//!   `lowbit(p)` logical values ending at index `p - 1`.
//!
//! An update at index `i` touches position `p = i + 1` and its ancestors
//! `p + lowbit(p)`, ...; a prefix query for `n` touches `n` and its
//! predecessors `n - lowbit(n)`, ... Both chains have at most
//! $\lceil \log_2(size + 1) \rceil$ links.

use std::fmt;
use std::mem;
use std::ops::{AddAssign, Index};

use num_traits::Zero;

use crate::error::{Error, Result};

/// Lowest set bit of `i` (`i & -i` in two's complement).
#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Indexed prefix-sum container over an additive numeric type `T`.
///
/// Overflow follows `T`'s own `AddAssign`: primitive integers panic in
/// debug builds and wrap in release builds, floats round.
#[derive(Clone)]
pub struct Fenwick<T> {
    values: Vec<T>,
    tree: Vec<T>,
}

impl<T> Default for Fenwick<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            tree: Vec::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Fenwick<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fenwick")
            .field("size", &self.values.len())
            .field("values", &self.values)
            .finish()
    }
}

impl<T> Fenwick<T> {
    /// Largest size whose arrays `Vec` can represent.
    ///
    /// This also keeps `pos + lowbit(pos)` from overflowing during updates.
    pub fn max_size() -> usize {
        isize::MAX as usize / mem::size_of::<T>().max(1)
    }

    fn check_size(size: usize) -> Result<()> {
        if size > Self::max_size() {
            return Err(Error::InvalidSize(size));
        }
        Ok(())
    }

    fn check_index(&self, idx: usize) -> Result<()> {
        if idx >= self.values.len() {
            return Err(Error::IndexOutOfRange {
                index: idx,
                size: self.values.len(),
            });
        }
        Ok(())
    }

    /// Return the number of addressable elements.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Alias of [`Fenwick::size`].
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Return true if the container has size 0.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The logical values, one per index.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        (self.values.capacity() + self.tree.capacity()) * mem::size_of::<T>()
    }
}

impl<T> Fenwick<T>
where
    T: Zero + Copy + AddAssign,
{
    /// Create a zero-filled container with `size` elements.
    pub fn new(size: usize) -> Result<Self> {
        Self::check_size(size)?;
        log::debug!("fenwick: new size={size}");
        Ok(Self {
            values: vec![T::zero(); size],
            tree: vec![T::zero(); size],
        })
    }

    /// Build a container holding `values` in O(n).
    ///
    /// Equivalent to `new(values.len())` followed by `add(i, values[i])`
    /// for every index.
    pub fn from_values(values: &[T]) -> Result<Self> {
        let n = values.len();
        Self::check_size(n)?;
        let mut tree = values.to_vec();
        for pos in 1..=n {
            let parent = pos + lowbit(pos);
            if parent <= n {
                let v = tree[pos - 1];
                tree[parent - 1] += v;
            }
        }
        log::debug!("fenwick: built from {n} values");
        Ok(Self {
            values: values.to_vec(),
            tree,
        })
    }

    /// Reallocate to `size` elements, discarding all previous contents.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        Self::check_size(size)?;
        log::debug!("fenwick: resize {} -> {size}", self.values.len());
        self.values.clear();
        self.values.resize(size, T::zero());
        self.tree.clear();
        self.tree.resize(size, T::zero());
        Ok(())
    }

    /// Return the logical value at `idx`.
    pub fn get(&self, idx: usize) -> Result<T> {
        self.check_index(idx)?;
        Ok(self.values[idx])
    }

    /// Borrow a read/increment view of the element at `idx`.
    ///
    /// The view holds the container mutably, so it cannot outlive the next
    /// `resize`.
    pub fn entry(&mut self, idx: usize) -> Result<Entry<'_, T>> {
        self.check_index(idx)?;
        Ok(Entry { parent: self, idx })
    }

    /// Add `delta` to the element at `idx`. O(log size).
    pub fn add(&mut self, idx: usize, delta: T) -> Result<()> {
        self.check_index(idx)?;
        self.apply_delta(idx, delta);
        Ok(())
    }

    // Callers have checked `idx < size`.
    fn apply_delta(&mut self, idx: usize, delta: T) {
        log::trace!("fenwick: delta at {idx}");
        self.values[idx] += delta;

        let n = self.tree.len();
        let mut pos = idx + 1;
        while pos <= n {
            self.tree[pos - 1] += delta;
            pos += lowbit(pos);
        }
    }

    /// Sum of the first `min(n, size)` values. O(log size).
    ///
    /// `sum(0)` is zero and touches no nodes.
    pub fn sum(&self, n: usize) -> T {
        let mut n = n.min(self.tree.len());
        let mut ret = T::zero();
        while n > 0 {
            ret += self.tree[n - 1];
            n -= lowbit(n);
        }
        ret
    }

    /// Sum of all values.
    pub fn total(&self) -> T {
        self.sum(self.tree.len())
    }
}

impl<T> Index<usize> for Fenwick<T> {
    type Output = T;

    /// Panics with `IndexOutOfRange` when `idx >= size`, like slice indexing.
    fn index(&self, idx: usize) -> &T {
        match self.values.get(idx) {
            Some(v) => v,
            None => panic!(
                "{}",
                Error::IndexOutOfRange {
                    index: idx,
                    size: self.values.len(),
                }
            ),
        }
    }
}

/// Transient view of one element of a [`Fenwick`].
///
/// Reads the logical value and applies deltas through the parent.
pub struct Entry<'a, T> {
    parent: &'a mut Fenwick<T>,
    idx: usize,
}

impl<T> Entry<'_, T>
where
    T: Zero + Copy + AddAssign,
{
    /// The index this view is bound to.
    pub fn index(&self) -> usize {
        self.idx
    }

    /// Current logical value at this index.
    pub fn read(&self) -> T {
        self.parent.values[self.idx]
    }

    /// Add `delta` to this element, updating every covering prefix sum.
    pub fn apply_delta(&mut self, delta: T) -> &mut Self {
        self.parent.apply_delta(self.idx, delta);
        self
    }
}

impl<T> AddAssign<T> for Entry<'_, T>
where
    T: Zero + Copy + AddAssign,
{
    fn add_assign(&mut self, delta: T) {
        self.apply_delta(delta);
    }
}

impl<T> fmt::Debug for Entry<'_, T>
where
    T: Zero + Copy + AddAssign + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("idx", &self.idx)
            .field("value", &self.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_update_sums() {
        let mut fw = Fenwick::<i64>::new(8).unwrap();
        fw.add(3, 5).unwrap();
        assert_eq!(fw.sum(0), 0);
        assert_eq!(fw.sum(3), 0);
        assert_eq!(fw.sum(4), 5);
        assert_eq!(fw.sum(8), 5);

        fw.add(3, -2).unwrap();
        assert_eq!(fw.get(3).unwrap(), 3);
        assert_eq!(fw.sum(4), 3);
    }

    #[test]
    fn test_sequential_fill() {
        let mut fw = Fenwick::<i64>::new(5).unwrap();
        for (i, d) in (1..=5).enumerate() {
            fw.add(i, d).unwrap();
        }
        assert_eq!(fw.sum(5), 15);
        assert_eq!(fw.sum(3), 6);
        assert_eq!(fw.total(), 15);
    }

    #[test]
    fn test_sum_clamps_to_size() {
        let fw = Fenwick::<i64>::new(4).unwrap();
        assert_eq!(fw.sum(100), fw.sum(4));
        assert_eq!(fw.sum(100), 0);
    }

    #[test]
    fn test_resize_discards() {
        let mut fw = Fenwick::<i64>::new(3).unwrap();
        fw.add(1, 7).unwrap();
        fw.resize(6).unwrap();
        assert_eq!(fw.size(), 6);
        assert_eq!(fw.sum(3), 0);
        assert_eq!(fw.total(), 0);
        assert_eq!(fw.values(), &[0; 6]);
    }

    #[test]
    fn test_out_of_range() {
        let mut fw = Fenwick::<i64>::new(4).unwrap();
        assert_eq!(
            fw.entry(4).unwrap_err(),
            Error::IndexOutOfRange { index: 4, size: 4 }
        );
        assert!(fw.get(4).is_err());
        assert!(fw.add(4, 1).is_err());
        assert_eq!(fw.total(), 0);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_index_operator_panics() {
        let fw = Fenwick::<i64>::new(2).unwrap();
        let _ = fw[2];
    }

    #[test]
    fn test_invalid_size() {
        let too_big = Fenwick::<u64>::max_size() + 1;
        assert_eq!(
            Fenwick::<u64>::new(too_big).unwrap_err(),
            Error::InvalidSize(too_big)
        );
        let mut fw = Fenwick::<u64>::new(2).unwrap();
        assert!(fw.resize(too_big).is_err());
        assert_eq!(fw.size(), 2);
    }

    #[test]
    fn test_entry_view() {
        let mut fw = Fenwick::<i32>::new(6).unwrap();
        {
            let mut e = fw.entry(2).unwrap();
            e += 4;
            e.apply_delta(1).apply_delta(-2);
            assert_eq!(e.read(), 3);
            assert_eq!(e.index(), 2);
        }
        assert_eq!(fw[2], 3);
        assert_eq!(fw.sum(2), 0);
        assert_eq!(fw.sum(3), 3);
    }

    #[test]
    fn test_empty_container() {
        let fw = Fenwick::<i64>::default();
        assert!(fw.is_empty());
        assert_eq!(fw.sum(0), 0);
        assert_eq!(fw.sum(10), 0);

        let mut fw = Fenwick::<i64>::new(0).unwrap();
        assert!(fw.entry(0).is_err());
        fw.resize(2).unwrap();
        fw.add(1, 9).unwrap();
        assert_eq!(fw.total(), 9);
    }

    #[test]
    fn test_from_values_matches_updates() {
        let data = [3i64, -1, 4, 1, -5, 9, 2, 6, 5, 3, 5];
        let built = Fenwick::from_values(&data).unwrap();
        let mut updated = Fenwick::new(data.len()).unwrap();
        for (i, &v) in data.iter().enumerate() {
            updated.add(i, v).unwrap();
        }
        for n in 0..=data.len() {
            assert_eq!(built.sum(n), updated.sum(n));
            assert_eq!(built.sum(n), data[..n].iter().sum::<i64>());
        }
        assert_eq!(built.values(), &data);
    }

    #[test]
    fn test_float_elements() {
        let mut fw = Fenwick::<f64>::new(4).unwrap();
        fw.add(0, 0.5).unwrap();
        fw.add(3, 0.25).unwrap();
        assert_eq!(fw.sum(1), 0.5);
        assert_eq!(fw.sum(4), 0.75);
    }
}
