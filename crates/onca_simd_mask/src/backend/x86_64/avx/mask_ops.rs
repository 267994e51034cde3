use core::arch::x86_64::*;

use super::super::cast::*;

/// Sign bit of every byte, AVX has no 256-bit integer movemask so both halves are done separately
#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn movemask_epi8(a: __m256i) -> i32 {
    _mm_movemask_epi8(lo128(a)) | (_mm_movemask_epi8(hi128(a)) << 16)
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn negate<M>(v: M) -> M
    where M : AvxCast<__m256>,
          __m256 : AvxCast<M>
{
    let ones : __m256 = _mm256_set1_epi32(-1).avx_cast();
    _mm256_xor_ps(v.avx_cast(), ones).avx_cast()
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn equals_4(x: __m256d, y: __m256d) -> bool {
    _mm256_movemask_pd(x) == _mm256_movemask_pd(y)
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn equals_8(x: __m256, y: __m256) -> bool {
    _mm256_movemask_ps(x) == _mm256_movemask_ps(y)
}

/// Equality for 1 and 2 byte lanes
#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn equals_bytes(x: __m256i, y: __m256i) -> bool {
    movemask_epi8(x) == movemask_epi8(y)
}
