use core::{arch::x86_64::*, ptr};

use crate::flags::LoadStoreFlags;
use super::super::cast::*;
use super::mask_ops::movemask_epi8;

//==============================================================================================================================
// Broadcast

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn broadcast_4(x: bool) -> __m256d {
    _mm256_set1_pd(f64::mask_bool(x))
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn broadcast_8(x: bool) -> __m256 {
    _mm256_set1_ps(f32::mask_bool(x))
}

// No 256-bit integer splat without AVX2, but a float splat moves the same bits
#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn broadcast_16(x: bool) -> __m256i {
    _mm256_set1_ps(mask_bool_x2_f32(x)).avx_cast()
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn broadcast_32(x: bool) -> __m256i {
    _mm256_set1_ps(mask_bool_x4_f32(x)).avx_cast()
}

//==============================================================================================================================
// Load

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn load_128<F : LoadStoreFlags>(mem: *const u8) -> __m128i {
    if F::ALIGNED {
        _mm_load_si128(mem as *const __m128i)
    } else {
        _mm_loadu_si128(mem as *const __m128i)
    }
}

/// Turn 16 boolean bytes into 16 all ones/all zeros bytes
///
/// Bytes are clamped to 1 first, so values with the sign bit set still compare greater than 0.
#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn bools_to_mask_128(bytes: __m128i) -> __m128i {
    _mm_cmpgt_epi8(_mm_min_epu8(bytes, _mm_set1_epi8(1)), _mm_setzero_si128())
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn load_4<F : LoadStoreFlags>(mem: *const u8) -> __m256d {
    let word = ptr::read_unaligned(mem as *const i32);
    // Byte `i` ends up on its own in 32-bit lane `i`
    let k = _mm_min_epu8(_mm_set1_epi32(word), _mm_set1_epi8(1));
    let k = _mm_and_si128(k, _mm_setr_epi32(0x1, 0x100, 0x10000, 0x1000000));
    let k = _mm_cmpgt_epi32(k, _mm_setzero_si128());
    concat(_mm_unpacklo_epi32(k, k), _mm_unpackhi_epi32(k, k)).avx_cast()
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn load_8<F : LoadStoreFlags>(mem: *const u8) -> __m256 {
    let quad = ptr::read_unaligned(mem as *const i64);
    let k = _mm_min_epu8(_mm_cvtsi64_si128(quad), _mm_set1_epi8(1));
    let k = _mm_cmpgt_epi16(_mm_unpacklo_epi8(k, k), _mm_setzero_si128());
    concat(_mm_unpacklo_epi16(k, k), _mm_unpackhi_epi16(k, k)).avx_cast()
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn load_16<F : LoadStoreFlags>(mem: *const u8) -> __m256i {
    let k = bools_to_mask_128(load_128::<F>(mem));
    concat(_mm_unpacklo_epi8(k, k), _mm_unpackhi_epi8(k, k))
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn load_32<F : LoadStoreFlags>(mem: *const u8) -> __m256i {
    let lo = bools_to_mask_128(load_128::<F>(mem));
    let hi = bools_to_mask_128(load_128::<F>(mem.add(16)));
    concat(lo, hi)
}

//==============================================================================================================================
// Store

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn store_128<F : LoadStoreFlags>(v: __m128i, mem: *mut u8) {
    if F::ALIGNED {
        _mm_store_si128(mem as *mut __m128i, v)
    } else {
        _mm_storeu_si128(mem as *mut __m128i, v)
    }
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn store_4<F : LoadStoreFlags>(v: __m256d, mem: *mut u8) {
    // Keep the sign bit of the first byte of every 8 byte lane
    let bits = movemask_epi8(v.avx_cast()) & 0x0101_0101;
    ptr::write_unaligned(mem as *mut i32, bits);
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn store_8<F : LoadStoreFlags>(v: __m256, mem: *mut u8) {
    let k : __m256i = v.avx_cast();
    let k = _mm_srli_epi16::<15>(_mm_packs_epi16(lo128(k), hi128(k)));
    let k = _mm_packs_epi16(k, _mm_setzero_si128());
    ptr::write_unaligned(mem as *mut i64, _mm_cvtsi128_si64(k));
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn store_16<F : LoadStoreFlags>(v: __m256i, mem: *mut u8) {
    let bools = _mm_and_si128(_mm_set1_epi8(1), _mm_packs_epi16(lo128(v), hi128(v)));
    store_128::<F>(bools, mem);
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn store_32<F : LoadStoreFlags>(v: __m256i, mem: *mut u8) {
    let ones : __m256 = _mm256_set1_epi32(0x0101_0101).avx_cast();
    let bools : __m256i = _mm256_and_ps(v.avx_cast(), ones).avx_cast();
    if F::ALIGNED {
        _mm256_store_si256(mem as *mut __m256i, bools)
    } else {
        _mm256_storeu_si256(mem as *mut __m256i, bools)
    }
}
