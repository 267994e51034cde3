use core::arch::x86_64::*;
use static_assertions::assert_eq_size;

use crate::{
    flags::LoadStoreFlags,
    lanes::{LaneCount, SupportedLaneCount, VECTOR_BYTES},
    tier::Tier,
};
use super::{MaskImpl, MaskLayout, sealed::Sealed};

mod cast;
use cast::AvxCast;

mod avx;
mod avx2;

assert_eq_size!(__m256, [u8; VECTOR_BYTES]);
assert_eq_size!(__m256d, [u8; VECTOR_BYTES]);
assert_eq_size!(__m256i, [u8; VECTOR_BYTES]);

macro_rules! impl_layout {
    { $($lanes:literal => $member:ty),* } => {
        $(
            impl Sealed for LaneCount<$lanes> {}

            impl MaskLayout for LaneCount<$lanes> {
                const LANES : usize = $lanes;

                type Member = $member;
                type Bools = <Self as SupportedLaneCount>::Bools;
                type BoolArray = <Self as SupportedLaneCount>::BoolArray;

                fn is_well_formed(v: $member) -> bool {
                    let bytes : [u8; VECTOR_BYTES] = v.avx_cast();
                    bytes.chunks_exact(Self::LANE_BYTES).all(|lane| {
                        (lane[0] == 0 || lane[0] == 0xFF) && lane.iter().all(|&b| b == lane[0])
                    })
                }

                #[inline]
                unsafe fn get(v: &$member, lane: usize) -> bool {
                    debug_assert!(lane < $lanes);
                    let bytes : [u8; VECTOR_BYTES] = (*v).avx_cast();
                    *bytes.get_unchecked(lane * Self::LANE_BYTES) != 0
                }

                #[inline]
                unsafe fn set(v: &mut $member, lane: usize, value: bool) {
                    debug_assert!(lane < $lanes);
                    let mut bytes : [u8; VECTOR_BYTES] = (*v).avx_cast();
                    let start = lane * Self::LANE_BYTES;
                    bytes.get_unchecked_mut(start..start + Self::LANE_BYTES).fill(if value { 0xFF } else { 0 });
                    *v = bytes.avx_cast();
                }
            }
        )*
    };
}
impl_layout!{
    4  => __m256d,
    8  => __m256,
    16 => __m256i,
    32 => __m256i
}

impl<K : Tier> MaskImpl<K> for LaneCount<4> {
    #[inline]
    unsafe fn broadcast(x: bool) -> __m256d {
        avx::broadcast_4(x)
    }

    #[inline]
    unsafe fn load<F : LoadStoreFlags>(mem: *const u8) -> __m256d {
        avx::load_4::<F>(mem)
    }

    #[inline]
    unsafe fn store<F : LoadStoreFlags>(v: __m256d, mem: *mut u8) {
        if K::AVX2 {
            avx2::store_4::<F>(v, mem)
        } else {
            avx::store_4::<F>(v, mem)
        }
    }

    #[inline]
    unsafe fn negate(v: __m256d) -> __m256d {
        avx::negate(v)
    }

    #[inline]
    unsafe fn equals(x: __m256d, y: __m256d) -> bool {
        avx::equals_4(x, y)
    }
}

impl<K : Tier> MaskImpl<K> for LaneCount<8> {
    #[inline]
    unsafe fn broadcast(x: bool) -> __m256 {
        avx::broadcast_8(x)
    }

    #[inline]
    unsafe fn load<F : LoadStoreFlags>(mem: *const u8) -> __m256 {
        avx::load_8::<F>(mem)
    }

    #[inline]
    unsafe fn store<F : LoadStoreFlags>(v: __m256, mem: *mut u8) {
        avx::store_8::<F>(v, mem)
    }

    #[inline]
    unsafe fn negate(v: __m256) -> __m256 {
        avx::negate(v)
    }

    #[inline]
    unsafe fn equals(x: __m256, y: __m256) -> bool {
        avx::equals_8(x, y)
    }
}

impl<K : Tier> MaskImpl<K> for LaneCount<16> {
    #[inline]
    unsafe fn broadcast(x: bool) -> __m256i {
        if K::AVX2 {
            avx2::broadcast_16(x)
        } else {
            avx::broadcast_16(x)
        }
    }

    #[inline]
    unsafe fn load<F : LoadStoreFlags>(mem: *const u8) -> __m256i {
        if K::AVX2 {
            avx2::load_16::<F>(mem)
        } else {
            avx::load_16::<F>(mem)
        }
    }

    #[inline]
    unsafe fn store<F : LoadStoreFlags>(v: __m256i, mem: *mut u8) {
        avx::store_16::<F>(v, mem)
    }

    #[inline]
    unsafe fn negate(v: __m256i) -> __m256i {
        avx::negate(v)
    }

    #[inline]
    unsafe fn equals(x: __m256i, y: __m256i) -> bool {
        if K::AVX2 {
            avx2::equals_bytes(x, y)
        } else {
            avx::equals_bytes(x, y)
        }
    }
}

impl<K : Tier> MaskImpl<K> for LaneCount<32> {
    #[inline]
    unsafe fn broadcast(x: bool) -> __m256i {
        if K::AVX2 {
            avx2::broadcast_32(x)
        } else {
            avx::broadcast_32(x)
        }
    }

    #[inline]
    unsafe fn load<F : LoadStoreFlags>(mem: *const u8) -> __m256i {
        if K::AVX2 {
            avx2::load_32::<F>(mem)
        } else {
            avx::load_32::<F>(mem)
        }
    }

    #[inline]
    unsafe fn store<F : LoadStoreFlags>(v: __m256i, mem: *mut u8) {
        avx::store_32::<F>(v, mem)
    }

    #[inline]
    unsafe fn negate(v: __m256i) -> __m256i {
        avx::negate(v)
    }

    #[inline]
    unsafe fn equals(x: __m256i, y: __m256i) -> bool {
        if K::AVX2 {
            avx2::equals_bytes(x, y)
        } else {
            avx::equals_bytes(x, y)
        }
    }
}
