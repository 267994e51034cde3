use core::mem::size_of;

use onca_simd_mask::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn member_bytes<M : Copy>(member: &M) -> Vec<u8> {
    // SAFETY: `member` is a plain register value, valid for `size_of::<M>()` bytes
    unsafe { core::slice::from_raw_parts(member as *const M as *const u8, size_of::<M>()) }.to_vec()
}

/// Run the same operations through both tiers and compare the results bit for bit
fn check_tiers<T : MaskElement>(avx: Capability<Avx>, avx2: Capability<Avx2>) {
    for value in [false, true] {
        let a = Mask::<T, Avx>::splat(avx, value);
        let b = Mask::<T, Avx2>::splat(avx2, value);
        assert_eq!(member_bytes(&a.to_member()), member_bytes(&b.to_member()));
    }

    let mut rng = StdRng::seed_from_u64(0x71e2);
    for _ in 0..256 {
        let mut bools = Bools::<T>::default();
        rng.fill(bools.as_mut());

        let a = Mask::<T, Avx>::from_bools(avx, &bools);
        let b = Mask::<T, Avx2>::from_bools(avx2, &bools);
        assert_eq!(member_bytes(&a.to_member()), member_bytes(&b.to_member()));
        assert_eq!(a.to_bools(), b.to_bools());
        assert_eq!(member_bytes(&(!a).to_member()), member_bytes(&(!b).to_member()));

        let mut other = Bools::<T>::default();
        rng.fill(other.as_mut());
        let c = Mask::<T, Avx>::from_bools(avx, &other);
        let d = Mask::<T, Avx2>::from_bools(avx2, &other);
        assert_eq!(a == c, b == d);
    }
}

#[test]
fn tier_independence() {
    let (Some(avx), Some(avx2)) = (Capability::<Avx>::detect(), Capability::<Avx2>::detect()) else { return };

    check_tiers::<i8>(avx, avx2);
    check_tiers::<u8>(avx, avx2);
    check_tiers::<i16>(avx, avx2);
    check_tiers::<u16>(avx, avx2);
    check_tiers::<i32>(avx, avx2);
    check_tiers::<f32>(avx, avx2);
    check_tiers::<i64>(avx, avx2);
    check_tiers::<f64>(avx, avx2);
}

#[test]
fn detection_is_stable() {
    let tier = CapabilityTier::detect();
    for _ in 0..8 {
        assert_eq!(CapabilityTier::detect(), tier);
    }

    assert_eq!(Capability::<Avx>::detect().is_some(), tier.is_some());
    assert_eq!(Capability::<Avx2>::detect().is_some(), tier == Some(CapabilityTier::Avx2));
    if let Some(cap) = Capability::<Avx2>::detect() {
        assert_eq!(cap.tier(), CapabilityTier::Avx2);
    }
}

#[test]
fn tier_ordering() {
    assert!(CapabilityTier::Avx2.supports(CapabilityTier::Avx));
    assert!(CapabilityTier::Avx2.supports(CapabilityTier::Avx2));
    assert!(CapabilityTier::Avx.supports(CapabilityTier::Avx));
    assert!(!CapabilityTier::Avx.supports(CapabilityTier::Avx2));

    assert!(!Avx::AVX2);
    assert!(Avx2::AVX2);
}

#[test]
fn lane_counts() {
    assert_eq!(lane_count(1), 32);
    assert_eq!(lane_count(8), 4);
    assert_eq!(LaneCount::<16>::LANE_BYTES, 2);

    assert_eq!(Mask::<u8, Avx>::LANES, 32);
    assert_eq!(Mask::<i16, Avx>::LANES, 16);
    assert_eq!(Mask::<f32, Avx>::LANES, 8);
    assert_eq!(Mask::<u64, Avx2>::LANES, 4);
    assert_eq!(Mask::<u128, Avx2>::LANES, 1);
}
