use std::marker::PhantomData;

use crate::Bitable;

/// Iterator over the values of a bitmask in ordinal order.
#[derive(Debug, Clone)]
pub struct Iter<T: Bitable> {
    bits: u64,
    _marker: PhantomData<T>,
}

impl<T: Bitable> Iter<T> {
    pub(crate) const fn new(bits: u64) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }
}

impl<T: Bitable> Iterator for Iter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        while self.bits != 0 {
            let index = self.bits.trailing_zeros();
            self.bits &= self.bits - 1;
            // Raw values built with `from_value` may carry bits past COUNT.
            if let Some(value) = T::from_index(index) {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.bits.count_ones() as usize))
    }
}
