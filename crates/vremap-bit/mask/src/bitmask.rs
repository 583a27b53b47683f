use std::marker::PhantomData;

use crate::{Bitable, Iter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitmask<T: Bitable>(pub u64, PhantomData<T>);

impl<T: Bitable> Bitmask<T> {
    /// Create a new bitmask from a slice of values.
    pub fn new(values: &[T]) -> Self {
        let mut bits = 0;
        for value in values {
            bits |= value.bit();
        }
        Self(bits, PhantomData)
    }

    /// Create an empty bitmask.
    pub const fn empty() -> Self {
        Self(0, PhantomData)
    }

    /// Create a bitmask holding every value of `T`.
    pub const fn all() -> Self {
        let bits = if T::COUNT >= 64 {
            u64::MAX
        } else {
            (1u64 << T::COUNT) - 1
        };
        Self(bits, PhantomData)
    }

    /// Create a new bitmask from a value.
    pub const fn from_value(value: u64) -> Self {
        Self(value, PhantomData)
    }

    /// Raw bits of the bitmask.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if the bitmask contains a specific value.
    #[inline]
    pub fn contains(&self, bit: T) -> bool {
        (self.0 & bit.bit()) != 0
    }

    /// Insert a value. Returns `false` when it was already present.
    #[inline]
    pub fn insert(&mut self, bit: T) -> bool {
        let was_absent = !self.contains(bit);
        self.0 |= bit.bit();
        was_absent
    }

    /// Remove a value. Returns `false` when it was not present.
    #[inline]
    pub fn remove(&mut self, bit: T) -> bool {
        let was_present = self.contains(bit);
        self.0 &= !bit.bit();
        was_present
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Check if the bitmask is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if the bitmask is subset of another bitmask.
    #[inline]
    pub fn is_subset(&self, other: &Bitmask<T>) -> bool {
        self.0 & other.0 == self.0
    }

    /// Check if the bitmask is superset of another bitmask.
    #[inline]
    pub fn is_superset(&self, other: &Bitmask<T>) -> bool {
        other.is_subset(self)
    }

    /// Check if the two bitmasks share at least one value.
    #[inline]
    pub fn intersects(&self, other: &Bitmask<T>) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub fn union(&self, other: &Bitmask<T>) -> Self {
        Self(self.0 | other.0, PhantomData)
    }

    #[inline]
    #[must_use]
    pub fn intersection(&self, other: &Bitmask<T>) -> Self {
        Self(self.0 & other.0, PhantomData)
    }

    /// Count the number of bits set in the bitmask.
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the contained values in ordinal order.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.0)
    }
}

impl<T: Bitable> Default for Bitmask<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Bitable> FromIterator<T> for Bitmask<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut mask = Self::empty();
        for value in iter {
            mask.insert(value);
        }
        mask
    }
}

impl<T: Bitable> IntoIterator for Bitmask<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter::new(self.0)
    }
}

impl<T: Bitable> IntoIterator for &Bitmask<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter::new(self.0)
    }
}
