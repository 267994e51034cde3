use core::{
    fmt::Debug,
    marker::PhantomData,
    ops::Not,
};

use crate::{
    backend::{MaskImpl, MaskLayout},
    element::MaskElement,
    flags::{ElementAligned, VectorAligned, VectorAlignedBools},
    tier::{Capability, DefaultTier, Tier},
};

/// In-register representation of a mask for `T`
pub type MaskMember<T> = <<T as MaskElement>::Impl as MaskLayout>::Member;

/// Boolean buffer of a mask for `T`, 1 byte per lane
pub type Bools<T> = <<T as MaskElement>::Impl as MaskLayout>::Bools;

/// Boolean buffer of a mask for `T`, as `bool`s
pub type BoolArray<T> = <<T as MaskElement>::Impl as MaskLayout>::BoolArray;

/// A mask with 1 lane per element of a 256-bit vector of `T`, using the instructions of tier `K`.
///
/// Creating a mask requires a [`Capability`] for `K`, so an existing mask proves the machine can run its operations.
pub struct Mask<T, K = DefaultTier>
    where T : MaskElement,
          K : Tier
{
    member  : MaskMember<T>,
    _marker : PhantomData<(T, K)>,
}

impl<T, K> Copy for Mask<T, K>
    where T : MaskElement,
          K : Tier
{
}

impl<T, K> Clone for Mask<T, K>
    where T : MaskElement,
          K : Tier
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K> Mask<T, K>
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
    /// Number of lanes in the mask
    pub const LANES : usize = <T::Impl as MaskLayout>::LANES;

    #[inline]
    fn wrap(member: MaskMember<T>) -> Self {
        Self { member, _marker: PhantomData }
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(<T::Impl as MaskLayout>::is_well_formed(self.member), "mask lanes must be either all ones or all zeros");
    }

    /// Construct a mask by setting all lanes to the given value
    #[inline]
    #[must_use]
    pub fn splat(_cap: Capability<K>, value: bool) -> Self {
        // SAFETY: `_cap` proves support for `K`
        Self::wrap(unsafe { <T::Impl as MaskImpl<K>>::broadcast(value) })
    }

    /// Load a mask from a boolean buffer, any non-zero byte is `true`
    #[inline]
    #[must_use]
    pub fn from_bools(_cap: Capability<K>, bools: &Bools<T>) -> Self {
        // SAFETY: `_cap` proves support for `K`, `bools` holds 1 byte per lane
        let mask = Self::wrap(unsafe { <T::Impl as MaskImpl<K>>::load::<ElementAligned>(bools.as_ref().as_ptr()) });
        mask.debug_check();
        mask
    }

    /// Load a mask from a vector aligned boolean buffer, any non-zero byte is `true`
    #[inline]
    #[must_use]
    pub fn load_aligned(_cap: Capability<K>, bools: &VectorAlignedBools<Bools<T>>) -> Self {
        // SAFETY: `_cap` proves support for `K`, `VectorAlignedBools` is aligned to the full vector width
        let mask = Self::wrap(unsafe { <T::Impl as MaskImpl<K>>::load::<VectorAligned>(bools.0.as_ref().as_ptr()) });
        mask.debug_check();
        mask
    }

    /// Convert an array of bools to a mask
    #[inline]
    #[must_use]
    pub fn from_array(cap: Capability<K>, array: BoolArray<T>) -> Self {
        let mut bools = Bools::<T>::default();
        for (byte, &value) in bools.as_mut().iter_mut().zip(array.as_ref()) {
            *byte = value as u8;
        }
        Self::from_bools(cap, &bools)
    }

    /// Create a mask from the lane-wise equality of 2 vectors of elements
    ///
    /// # Panics
    /// Panics if `a` or `b` does not contain exactly `LANES` elements
    #[must_use]
    pub fn lanes_eq(cap: Capability<K>, a: &[T], b: &[T]) -> Self
        where T : PartialEq
    {
        assert_eq!(a.len(), Self::LANES, "lhs must have 1 element per lane");
        assert_eq!(b.len(), Self::LANES, "rhs must have 1 element per lane");

        let mut bools = Bools::<T>::default();
        for ((byte, x), y) in bools.as_mut().iter_mut().zip(a).zip(b) {
            *byte = (x == y) as u8;
        }
        Self::from_bools(cap, &bools)
    }

    /// Store the mask into a boolean buffer, every byte will be either 0 or 1
    #[inline]
    pub fn store(self, bools: &mut Bools<T>) {
        // SAFETY: the mask was created with a capability for `K`, `bools` holds 1 byte per lane
        unsafe { <T::Impl as MaskImpl<K>>::store::<ElementAligned>(self.member, bools.as_mut().as_mut_ptr()) }
    }

    /// Store the mask into a vector aligned boolean buffer, every byte will be either 0 or 1
    #[inline]
    pub fn store_aligned(self, bools: &mut VectorAlignedBools<Bools<T>>) {
        // SAFETY: the mask was created with a capability for `K`, `VectorAlignedBools` is aligned to the full vector width
        unsafe { <T::Impl as MaskImpl<K>>::store::<VectorAligned>(self.member, bools.0.as_mut().as_mut_ptr()) }
    }

    /// Convert the mask to a boolean buffer
    #[inline]
    #[must_use]
    pub fn to_bools(self) -> Bools<T> {
        let mut bools = Bools::<T>::default();
        self.store(&mut bools);
        bools
    }

    /// Convert the mask to an array of bools
    #[must_use]
    pub fn to_array(self) -> BoolArray<T> {
        let bools = self.to_bools();
        let mut array = BoolArray::<T>::default();
        for (value, &byte) in array.as_mut().iter_mut().zip(bools.as_ref()) {
            *value = byte != 0;
        }
        array
    }

    /// Overwrite the lanes set in `mask` with the values in `bools`, the other lanes keep their value
    #[inline]
    pub fn masked_load(&mut self, mask: Self, bools: &Bools<T>) {
        // SAFETY: the masks were created with a capability for `K`, `bools` holds 1 byte per lane
        unsafe { <T::Impl as MaskImpl<K>>::masked_load(&mut self.member, mask.member, bools.as_ref().as_ptr()) }
    }

    /// Store the lanes set in `keep` into `bools`, the bytes of all other lanes are left untouched
    #[inline]
    pub fn masked_store(self, bools: &mut Bools<T>, keep: Self) {
        // SAFETY: the masks were created with a capability for `K`, `bools` holds 1 byte per lane
        unsafe { <T::Impl as MaskImpl<K>>::masked_store(self.member, bools.as_mut().as_mut_ptr(), keep.member) }
    }

    /// Test the value of the specific lane
    ///
    /// # Safety
    /// `lane` must be less than `LANES`
    #[inline]
    #[must_use]
    pub unsafe fn test_unchecked(&self, lane: usize) -> bool {
        <T::Impl as MaskLayout>::get(&self.member, lane)
    }

    /// Test the value of the specific lane
    ///
    /// # Panics
    /// Panics if `lane` is greater or equal to the number of lanes in the mask
    #[inline]
    #[must_use]
    pub fn test(&self, lane: usize) -> bool {
        assert!(lane < Self::LANES, "lane index out of range");
        // SAFETY: bounds checked above
        unsafe { self.test_unchecked(lane) }
    }

    /// Set the value of the specific lane
    ///
    /// # Safety
    /// `lane` must be less than `LANES`
    #[inline]
    pub unsafe fn set_unchecked(&mut self, lane: usize, value: bool) {
        <T::Impl as MaskLayout>::set(&mut self.member, lane, value)
    }

    /// Set the value of the specific lane
    ///
    /// # Panics
    /// Panics if `lane` is greater or equal to the number of lanes in the mask
    #[inline]
    pub fn set(&mut self, lane: usize, value: bool) {
        assert!(lane < Self::LANES, "lane index out of range");
        // SAFETY: bounds checked above
        unsafe { self.set_unchecked(lane, value) }
    }

    /// Returns true if any lane is set, or false otherwise
    #[inline]
    #[must_use]
    pub fn any(self) -> bool {
        self != Self::splat(self.capability(), false)
    }

    /// Returns true if all lanes are set, or false otherwise
    #[inline]
    #[must_use]
    pub fn all(self) -> bool {
        self == Self::splat(self.capability(), true)
    }

    /// Get the capability the mask was created with
    #[inline]
    pub fn capability(&self) -> Capability<K> {
        // SAFETY: a mask can only be created with a capability for `K`
        unsafe { Capability::new_unchecked() }
    }

    /// Get the in-register representation of the mask
    #[inline]
    #[must_use]
    pub fn to_member(self) -> MaskMember<T> {
        self.member
    }

    /// Create a mask from its in-register representation
    ///
    /// # Safety
    /// The current machine must support tier `K`, and every lane of `member` must be either all ones or all zeros
    #[inline]
    #[must_use]
    pub unsafe fn from_member_unchecked(member: MaskMember<T>) -> Self {
        let mask = Self::wrap(member);
        mask.debug_check();
        mask
    }
}

impl<T, K> Not for Mask<T, K>
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.debug_check();
        // SAFETY: the mask was created with a capability for `K`
        Self::wrap(unsafe { <T::Impl as MaskImpl<K>>::negate(self.member) })
    }
}

impl<T, K> PartialEq for Mask<T, K>
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.debug_check();
        other.debug_check();
        // SAFETY: the masks were created with a capability for `K`
        unsafe { <T::Impl as MaskImpl<K>>::equals(self.member, other.member) }
    }
}

impl<T, K> Eq for Mask<T, K>
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
}

impl<T, K> Debug for Mask<T, K>
    where T : MaskElement,
          K : Tier,
          T::Impl : MaskImpl<K>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.to_array().as_ref()).finish()
    }
}
