use core::{arch::x86_64::*, ptr};

use crate::flags::LoadStoreFlags;
use super::super::{
    cast::*,
    avx::{load_128, bools_to_mask_128},
};

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn broadcast_16(x: bool) -> __m256i {
    _mm256_set1_epi16(i16::mask_bool(x))
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn broadcast_32(x: bool) -> __m256i {
    _mm256_set1_epi8(i8::mask_bool(x))
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn load_16<F : LoadStoreFlags>(mem: *const u8) -> __m256i {
    // Sign extension widens 0xFF to 0xFFFF
    _mm256_cvtepi8_epi16(bools_to_mask_128(load_128::<F>(mem)))
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn load_32<F : LoadStoreFlags>(mem: *const u8) -> __m256i {
    let bytes = if F::ALIGNED {
        _mm256_load_si256(mem as *const __m256i)
    } else {
        _mm256_loadu_si256(mem as *const __m256i)
    };
    _mm256_cmpgt_epi8(_mm256_min_epu8(bytes, _mm256_set1_epi8(1)), _mm256_setzero_si256())
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn store_4<F : LoadStoreFlags>(v: __m256d, mem: *mut u8) {
    let bits = _mm256_movemask_epi8(v.avx_cast()) & 0x0101_0101;
    ptr::write_unaligned(mem as *mut i32, bits);
}
