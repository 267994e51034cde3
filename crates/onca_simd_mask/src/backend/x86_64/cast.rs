use core::arch::x86_64::*;

/// Bit-preserving reinterpretation between 256-bit values.
///
/// All reinterpretation between register types in the backend goes through this trait.
pub(crate) trait AvxCast<T> : Copy {
    fn avx_cast(self) -> T;
}

macro_rules! impl_avx_cast {
    { $($from:ty => [$($to:ty),*]),* } => {
        $($(
            impl AvxCast<$to> for $from {
                #[inline(always)]
                fn avx_cast(self) -> $to {
                    // SAFETY: all types are 32 bytes wide and every bit pattern is valid for them
                    unsafe { core::mem::transmute(self) }
                }
            }
        )*)*
    };
}
impl_avx_cast!{
    __m256   => [__m256, __m256d, __m256i, [u8; 32]],
    __m256d  => [__m256, __m256d, __m256i, [u8; 32]],
    __m256i  => [__m256, __m256d, __m256i, [u8; 32]],
    [u8; 32] => [__m256, __m256d, __m256i]
}

/// Lane pattern of a mask bool: all bits set for `true`, all bits cleared for `false`
pub(crate) trait MaskBool : Copy {
    fn mask_bool(x: bool) -> Self;
}

macro_rules! impl_mask_bool_int {
    { $($ty:ty),* } => {
        $(
            impl MaskBool for $ty {
                #[inline(always)]
                fn mask_bool(x: bool) -> Self {
                    if x { -1 } else { 0 }
                }
            }
        )*
    };
}
impl_mask_bool_int!{ i8, i16, i32, i64 }

impl MaskBool for f32 {
    #[inline(always)]
    fn mask_bool(x: bool) -> Self {
        f32::from_bits(i32::mask_bool(x) as u32)
    }
}

impl MaskBool for f64 {
    #[inline(always)]
    fn mask_bool(x: bool) -> Self {
        f64::from_bits(i64::mask_bool(x) as u64)
    }
}

/// 32-bit float holding the 16-bit mask pattern in both halves
#[inline(always)]
pub(crate) fn mask_bool_x2_f32(x: bool) -> f32 {
    f32::from_bits(i16::mask_bool(x) as u16 as u32 * 0x0001_0001)
}

/// 32-bit float holding the 8-bit mask pattern in all 4 bytes
#[inline(always)]
pub(crate) fn mask_bool_x4_f32(x: bool) -> f32 {
    f32::from_bits(i8::mask_bool(x) as u8 as u32 * 0x0101_0101)
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn lo128(a: __m256i) -> __m128i {
    _mm256_castsi256_si128(a)
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn hi128(a: __m256i) -> __m128i {
    _mm256_extractf128_si256::<1>(a)
}

/// Join 2 halves into a full register
#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn concat(lo: __m128i, hi: __m128i) -> __m256i {
    _mm256_insertf128_si256::<1>(_mm256_castsi128_si256(lo), hi)
}
