use core::arch::x86_64::*;

/// Equality for 1 and 2 byte lanes
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn equals_bytes(x: __m256i, y: __m256i) -> bool {
    _mm256_movemask_epi8(x) == _mm256_movemask_epi8(y)
}
