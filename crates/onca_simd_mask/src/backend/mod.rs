use core::fmt::Debug;

use crate::{
    flags::LoadStoreFlags,
    tier::Tier,
};

pub(crate) mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Register layout of a mask implementation
pub trait MaskLayout : Sealed {
    /// Number of lanes
    const LANES : usize;

    /// In-register representation, each lane holds either all ones (`true`) or all zeros (`false`)
    type Member : Copy;

    /// Boolean buffer, 1 byte per lane, 0 is `false` and any other value is `true`
    type Bools : Copy + Default + AsRef<[u8]> + AsMut<[u8]> + Debug + PartialEq;

    /// Boolean buffer as `bool`s
    type BoolArray : Copy + Default + AsRef<[bool]> + AsMut<[bool]> + Debug + PartialEq;

    /// Check that every lane is either all ones or all zeros
    fn is_well_formed(v: Self::Member) -> bool;

    /// Get the value of a lane
    ///
    /// # Safety
    /// `lane` must be less than `LANES`
    unsafe fn get(v: &Self::Member, lane: usize) -> bool;

    /// Set the value of a lane
    ///
    /// # Safety
    /// `lane` must be less than `LANES`
    unsafe fn set(v: &mut Self::Member, lane: usize, value: bool);
}

/// Mask operations, using the instructions available in tier `K`
///
/// # Safety
/// All functions require the current machine to support tier `K`.
/// Pointers passed to loads and stores must be valid for `LANES` bytes, and aligned to the width of the access when `F` is `VectorAligned`.
pub trait MaskImpl<K : Tier> : MaskLayout {
    /// Set all lanes to `x`
    unsafe fn broadcast(x: bool) -> Self::Member;

    /// Load a boolean buffer
    unsafe fn load<F : LoadStoreFlags>(mem: *const u8) -> Self::Member;

    /// Store the mask as a boolean buffer, each byte will be either 0 or 1
    unsafe fn store<F : LoadStoreFlags>(v: Self::Member, mem: *mut u8);

    /// Flip every lane
    unsafe fn negate(v: Self::Member) -> Self::Member;

    /// Check if both masks have the same value in every lane
    unsafe fn equals(x: Self::Member, y: Self::Member) -> bool;

    /// Load the lanes set in `mask` from a boolean buffer, all other lanes of `merge` are kept
    unsafe fn masked_load(merge: &mut Self::Member, mask: Self::Member, mem: *const u8) {
        for i in 0..Self::LANES {
            if Self::get(&mask, i) {
                Self::set(merge, i, *mem.add(i) != 0);
            }
        }
    }

    /// Store the lanes set in `keep` to a boolean buffer, all other bytes are left untouched
    unsafe fn masked_store(v: Self::Member, mem: *mut u8, keep: Self::Member) {
        for i in 0..Self::LANES {
            if Self::get(&keep, i) {
                *mem.add(i) = Self::get(&v, i) as u8;
            }
        }
    }
}

mod scalar;
pub use scalar::ScalarMask;

mod x86_64;
