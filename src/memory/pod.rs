//! Marker trait bounding which types may cross the process boundary

/// Plain-old-data types that can be rebuilt from raw bytes read out of a
/// foreign address space.
///
/// # Safety
///
/// Implementors must guarantee that every bit pattern of the type's size is
/// a valid value, and that the type has no padding, pointers to owned data,
/// or drop logic. Reading such a type from another process's memory is then
/// just a byte copy. This is why `bool` and `char` are deliberately absent:
/// they have invalid bit patterns.
pub unsafe trait Pod: Copy + 'static {}

macro_rules! impl_pod {
    ($($ty:ty),* $(,)?) => {
        $(unsafe impl Pod for $ty {})*
    };
}

impl_pod!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// Arrays of plain data are plain data
unsafe impl<T: Pod, const N: usize> Pod for [T; N] {}
