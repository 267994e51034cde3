mod sealed {
    pub trait Sealed {}
}
use core::fmt::Debug;

use sealed::Sealed;
use static_assertions::const_assert_eq;

/// Width of the vector register in bytes
pub const VECTOR_BYTES : usize = 32;

/// Number of lanes a vector register holds for elements of `elem_size` bytes
pub const fn lane_count(elem_size: usize) -> usize {
    VECTOR_BYTES / elem_size
}

const_assert_eq!(lane_count(1), 32);
const_assert_eq!(lane_count(2), 16);
const_assert_eq!(lane_count(4), 8);
const_assert_eq!(lane_count(8), 4);

/// Lane count tag, used to select the mask implementation for a given number of lanes
pub struct LaneCount<const LANES: usize>;

impl<const LANES: usize> LaneCount<LANES> {
    /// Number of bytes in a single lane of a full vector register
    pub const LANE_BYTES : usize = VECTOR_BYTES / LANES;
}

impl<const LANES: usize> Sealed for LaneCount<LANES> {}

pub trait SupportedLaneCount : Sealed {
    /// Boolean buffer, 1 byte per lane
    type Bools : Copy + Default + AsRef<[u8]> + AsMut<[u8]> + Debug + PartialEq;
    /// Boolean buffer as `bool`s
    type BoolArray : Copy + Default + AsRef<[bool]> + AsMut<[bool]> + Debug + PartialEq;
}

macro_rules! impl_lane_count {
    { $($lanes:literal),* } => {
        $(
            impl SupportedLaneCount for LaneCount<$lanes> {
                type Bools = [u8; $lanes];
                type BoolArray = [bool; $lanes];
            }
        )*
    };
}
impl_lane_count!{ 1, 4, 8, 16, 32 }
