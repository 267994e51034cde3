use crate::{
    flags::LoadStoreFlags,
    lanes::{LaneCount, SupportedLaneCount},
    tier::Tier,
};
use super::{MaskImpl, MaskLayout, sealed::Sealed};

/// Single lane mask, used for element types too wide for the vector registers
pub struct ScalarMask;

impl Sealed for ScalarMask {}

impl MaskLayout for ScalarMask {
    const LANES : usize = 1;

    type Member = bool;
    type Bools = <LaneCount<1> as SupportedLaneCount>::Bools;
    type BoolArray = <LaneCount<1> as SupportedLaneCount>::BoolArray;

    fn is_well_formed(_v: bool) -> bool {
        true
    }

    #[inline]
    unsafe fn get(v: &bool, lane: usize) -> bool {
        debug_assert_eq!(lane, 0);
        *v
    }

    #[inline]
    unsafe fn set(v: &mut bool, lane: usize, value: bool) {
        debug_assert_eq!(lane, 0);
        *v = value;
    }
}

impl<K : Tier> MaskImpl<K> for ScalarMask {
    #[inline]
    unsafe fn broadcast(x: bool) -> bool {
        x
    }

    #[inline]
    unsafe fn load<F : LoadStoreFlags>(mem: *const u8) -> bool {
        *mem != 0
    }

    #[inline]
    unsafe fn store<F : LoadStoreFlags>(v: bool, mem: *mut u8) {
        *mem = v as u8;
    }

    #[inline]
    unsafe fn negate(v: bool) -> bool {
        !v
    }

    #[inline]
    unsafe fn equals(x: bool, y: bool) -> bool {
        x == y
    }
}
