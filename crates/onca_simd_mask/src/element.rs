use core::mem::size_of;
use static_assertions::const_assert_eq;

use crate::{
    lanes::{LaneCount, lane_count},
    backend::{MaskImpl, ScalarMask},
    tier::{Avx, Avx2},
};

mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Element types a mask can be created for.
///
/// The element size decides the lane count, and with it the mask implementation.
/// Elements wider than 8 bytes do not fit the vector backend and are handled one lane at a time by [`ScalarMask`].
pub trait MaskElement : Sealed + Copy + 'static {
    /// Mask implementation used for this element type
    type Impl : MaskImpl<Avx> + MaskImpl<Avx2>;
}

macro_rules! impl_element {
    { $($ty:ty => $lanes:literal),* } => {
        $(
            impl Sealed for $ty {}

            const_assert_eq!(lane_count(size_of::<$ty>()), $lanes);

            impl MaskElement for $ty {
                type Impl = LaneCount<$lanes>;
            }
        )*
    };
}
impl_element!{
    i8    => 32,
    u8    => 32,
    i16   => 16,
    u16   => 16,
    i32   => 8,
    u32   => 8,
    f32   => 8,
    i64   => 4,
    u64   => 4,
    f64   => 4,
    isize => 4,
    usize => 4
}

macro_rules! impl_scalar_element {
    { $($ty:ty),* } => {
        $(
            impl Sealed for $ty {}

            impl MaskElement for $ty {
                type Impl = ScalarMask;
            }
        )*
    };
}
impl_scalar_element!{ i128, u128 }
