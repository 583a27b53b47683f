mod bitmask;
mod iter;

pub use bitmask::Bitmask;
pub use iter::Iter;

/// A closed set of values that can be packed into a `u64` bitmask.
///
/// Usually implemented with `#[derive(Bit)]` from `vremap-bit-derive`.
pub trait Bitable: Copy + Sized {
    /// Number of distinct values. Never more than 64.
    const COUNT: usize;

    /// Ordinal of the value, in `0..COUNT`.
    fn index(&self) -> u32;

    /// Inverse of [`Bitable::index`].
    fn from_index(index: u32) -> Option<Self>;

    #[inline]
    fn bit(&self) -> u64 {
        1u64 << self.index()
    }
}
