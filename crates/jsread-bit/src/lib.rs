mod bitmask;

pub use bitmask::Bitmask;

/// A single flag that occupies a fixed bit of an 8-bit field.
pub trait Bitable: Copy {
    fn bit(&self) -> u8;
}
