use std::fmt;
use std::marker::PhantomData;

use crate::Bitable;

/// A set of flags packed into one byte, as it arrives on the wire.
///
/// Bits that do not correspond to any `T` are kept as-is, so a mask read
/// from a device round-trips through [`Bitmask::value`] unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitmask<T: Bitable>(u8, PhantomData<T>);

impl<T: Bitable> Bitmask<T> {
    /// Create a new bitmask from a slice of values.
    pub fn new(values: &[T]) -> Self {
        let mut bits = 0;
        for value in values {
            bits |= value.bit();
        }
        Self(bits, PhantomData)
    }

    /// Create a bitmask from a raw byte.
    pub const fn from_value(value: u8) -> Self {
        Self(value, PhantomData)
    }

    /// Raw byte.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Check if the bitmask contains a specific value.
    #[inline]
    pub fn contains(&self, bit: T) -> bool {
        (self.0 & bit.bit()) != 0
    }

    /// Insert a value to the bitmask.
    #[inline]
    pub fn insert(&mut self, bit: T) {
        self.0 |= bit.bit();
    }
}

impl<T: Bitable> fmt::Debug for Bitmask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitmask({:#04x})", self.0)
    }
}
