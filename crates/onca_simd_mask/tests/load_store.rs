use onca_simd_mask::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_bools<T : MaskElement>(rng: &mut StdRng) -> Bools<T> {
    let mut bools = Bools::<T>::default();
    for byte in bools.as_mut() {
        *byte = if rng.gen_bool(0.5) { 0 } else { rng.gen() };
    }
    bools
}

fn normalize<T : MaskElement>(bools: &Bools<T>) -> Bools<T> {
    let mut normalized = *bools;
    for byte in normalized.as_mut() {
        *byte = (*byte != 0) as u8;
    }
    normalized
}

fn check_round_trip<T, K>(cap: Capability<K>)
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
    let mut rng = StdRng::seed_from_u64(0x6d61_736b);
    for _ in 0..256 {
        let bools = random_bools::<T>(&mut rng);
        let mask = Mask::<T, K>::from_bools(cap, &bools);
        assert_eq!(mask.to_bools(), normalize::<T>(&bools));
    }

    // Every byte value on its own, including the ones with the sign bit set
    for value in 0..=255u8 {
        let mut bools = Bools::<T>::default();
        bools.as_mut()[0] = value;
        let mask = Mask::<T, K>::from_bools(cap, &bools);
        assert_eq!(mask.test(0), value != 0, "byte {value:#04x}");
        assert_eq!(mask.to_bools(), normalize::<T>(&bools));
    }
}

fn check_broadcast<T, K>(cap: Capability<K>)
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
    for value in [false, true] {
        let mask = Mask::<T, K>::splat(cap, value);
        assert!(<T::Impl as MaskLayout>::is_well_formed(mask.to_member()));

        let bools = mask.to_bools();
        assert!(bools.as_ref().iter().all(|&byte| byte == value as u8));
        assert_eq!(Mask::<T, K>::from_bools(cap, &bools), mask);
    }
}

fn check_array<T, K>(cap: Capability<K>)
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
    let mut rng = StdRng::seed_from_u64(0xa77a);
    for _ in 0..64 {
        let mut array = BoolArray::<T>::default();
        for value in array.as_mut() {
            *value = rng.gen();
        }
        let mask = Mask::<T, K>::from_array(cap, array);
        assert_eq!(mask.to_array(), array);
        for (lane, &value) in array.as_ref().iter().enumerate() {
            assert_eq!(mask.test(lane), value);
        }
    }
}

fn check_aligned<T, K>(cap: Capability<K>)
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
    let mut rng = StdRng::seed_from_u64(0xa119);
    for _ in 0..64 {
        let bools = VectorAlignedBools(random_bools::<T>(&mut rng));
        let aligned = Mask::<T, K>::load_aligned(cap, &bools);
        let unaligned = Mask::<T, K>::from_bools(cap, &bools.0);
        assert_eq!(aligned, unaligned);

        let mut stored = VectorAlignedBools(Bools::<T>::default());
        aligned.store_aligned(&mut stored);
        assert_eq!(stored.0, normalize::<T>(&bools.0));
    }
}

fn check_masked_load<T, K>(cap: Capability<K>)
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
    let mut rng = StdRng::seed_from_u64(0x10ad);
    for _ in 0..64 {
        let merge = Mask::<T, K>::from_bools(cap, &random_bools::<T>(&mut rng));
        let mask = Mask::<T, K>::from_bools(cap, &random_bools::<T>(&mut rng));
        let bools = random_bools::<T>(&mut rng);
        let loaded = Mask::<T, K>::from_bools(cap, &bools);

        let mut result = merge;
        result.masked_load(mask, &bools);

        for lane in 0..Mask::<T, K>::LANES {
            let expected = if mask.test(lane) { loaded.test(lane) } else { merge.test(lane) };
            assert_eq!(result.test(lane), expected);
        }
        assert!(<T::Impl as MaskLayout>::is_well_formed(result.to_member()));
    }
}

fn check_masked_store<T, K>(cap: Capability<K>)
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
    let mut rng = StdRng::seed_from_u64(0x5707e);
    for _ in 0..64 {
        let v = Mask::<T, K>::from_bools(cap, &random_bools::<T>(&mut rng));
        let keep = Mask::<T, K>::from_bools(cap, &random_bools::<T>(&mut rng));
        let initial = random_bools::<T>(&mut rng);

        let mut mem = initial;
        v.masked_store(&mut mem, keep);

        for lane in 0..Mask::<T, K>::LANES {
            let expected = if keep.test(lane) { v.test(lane) as u8 } else { initial.as_ref()[lane] };
            assert_eq!(mem.as_ref()[lane], expected);
        }
    }
}

macro_rules! for_each_element {
    ($check:ident, $tier:ty, $cap:expr) => {
        $check::<i8   , $tier>($cap);
        $check::<u8   , $tier>($cap);
        $check::<i16  , $tier>($cap);
        $check::<u16  , $tier>($cap);
        $check::<i32  , $tier>($cap);
        $check::<u32  , $tier>($cap);
        $check::<f32  , $tier>($cap);
        $check::<i64  , $tier>($cap);
        $check::<u64  , $tier>($cap);
        $check::<f64  , $tier>($cap);
        $check::<usize, $tier>($cap);
        $check::<i128 , $tier>($cap);
        $check::<u128 , $tier>($cap);
    };
}

macro_rules! impl_test {
    { $($name:ident => $check:ident),* } => {
        $(
            #[test]
            fn $name() {
                if let Some(cap) = Capability::<Avx>::detect() {
                    for_each_element!($check, Avx, cap);
                }
                if let Some(cap) = Capability::<Avx2>::detect() {
                    for_each_element!($check, Avx2, cap);
                }
            }
        )*
    };
}

impl_test!{
    round_trip  => check_round_trip,
    broadcast   => check_broadcast,
    array       => check_array,
    aligned     => check_aligned,
    masked_load => check_masked_load,
    masked_store => check_masked_store
}

#[test]
fn masked_load_4_lanes() {
    let Some(cap) = Capability::<Avx>::detect() else { return };

    let mut merge = Mask::<f64, Avx>::splat(cap, false);
    let mask = Mask::<f64, Avx>::from_array(cap, [true, false, true, false]);
    merge.masked_load(mask, &[1, 0, 1, 1]);

    assert_eq!(merge.to_array(), [true, false, true, false]);
}

#[test]
fn masked_store_4_lanes() {
    let Some(cap) = Capability::<Avx>::detect() else { return };

    let v = Mask::<u64, Avx>::from_array(cap, [true, true, false, false]);
    let keep = Mask::<u64, Avx>::from_array(cap, [true, false, false, true]);
    let mut mem = [9u8; 4];
    v.masked_store(&mut mem, keep);

    assert_eq!(mem, [1, 9, 9, 0]);
}

#[test]
fn load_store_lane_order() {
    let Some(cap) = Capability::<Avx>::detect() else { return };

    let mask = Mask::<i32, Avx>::from_bools(cap, &[0, 1, 0, 0, 200, 0, 1, 0x80]);
    assert_eq!(mask.to_array(), [false, true, false, false, true, false, true, true]);
    assert_eq!(mask.to_bools(), [0, 1, 0, 0, 1, 0, 1, 1]);

    let mut bools = [0u8; 32];
    bools[31] = 1;
    bools[5] = 0xFF;
    let mask = Mask::<u8, Avx>::from_bools(cap, &bools);
    for lane in 0..32 {
        assert_eq!(mask.test(lane), lane == 5 || lane == 31);
    }
}

#[test]
fn scalar_fallback() {
    let Some(cap) = Capability::<Avx>::detect() else { return };

    assert_eq!(Mask::<i128, Avx>::LANES, 1);

    let mask = Mask::<i128, Avx>::from_bools(cap, &[7]);
    assert_eq!(mask.to_bools(), [1]);
    assert!(mask.all());
    assert!(!(!mask).any());

    let mut mem = [9u8];
    (!mask).masked_store(&mut mem, Mask::splat(cap, false));
    assert_eq!(mem, [9]);
    (!mask).masked_store(&mut mem, Mask::splat(cap, true));
    assert_eq!(mem, [0]);
}
