mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Memory alignment guarantee for a mask load or store
pub trait LoadStoreFlags : Sealed {
    /// Whether the memory is aligned to the width of the access
    const ALIGNED : bool;
}

/// Memory is only guaranteed to be aligned to the element, i.e. 1 byte for a boolean buffer
#[derive(Clone, Copy, Default, Debug)]
pub struct ElementAligned;

/// Memory is aligned to the width of the access (16 or 32 bytes)
#[derive(Clone, Copy, Default, Debug)]
pub struct VectorAligned;

impl Sealed for ElementAligned {}
impl Sealed for VectorAligned {}

impl LoadStoreFlags for ElementAligned {
    const ALIGNED : bool = false;
}

impl LoadStoreFlags for VectorAligned {
    const ALIGNED : bool = true;
}

/// Boolean buffer aligned to the full vector width, allows masks to use aligned loads and stores
#[repr(C, align(32))]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct VectorAlignedBools<B>(pub B);
