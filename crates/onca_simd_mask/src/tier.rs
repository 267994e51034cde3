use core::{
    fmt::Debug,
    marker::PhantomData,
    num::NonZeroUsize,
};
use once_cell::race::OnceNonZeroUsize;

mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Instruction set tiers the mask backend can run on
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilityTier {
    /// AVX: 256-bit float operations, integer operations limited to 128-bit
    Avx,
    /// AVX + AVX2: 256-bit integer operations
    Avx2,
}

impl CapabilityTier {
    /// Get the best tier supported by the current machine, `None` if AVX is not available.
    ///
    /// Detection only happens on the first call, the result stays fixed for the rest of the process.
    pub fn detect() -> Option<CapabilityTier> {
        static DETECTED : OnceNonZeroUsize = OnceNonZeroUsize::new();

        let raw = DETECTED.get_or_init(|| {
            let tier = detect_uncached();
            log::debug!("resolved SIMD mask capability tier: {tier:?}");
            Self::encode(tier)
        });
        Self::decode(raw)
    }

    /// Check if code written for `other` can run on a machine supporting `self`
    pub fn supports(self, other: CapabilityTier) -> bool {
        self >= other
    }

    fn encode(tier: Option<CapabilityTier>) -> NonZeroUsize {
        let offset = match tier {
            None                       => 0,
            Some(CapabilityTier::Avx)  => 1,
            Some(CapabilityTier::Avx2) => 2,
        };
        NonZeroUsize::MIN.saturating_add(offset)
    }

    fn decode(raw: NonZeroUsize) -> Option<CapabilityTier> {
        match raw.get() {
            2 => Some(CapabilityTier::Avx),
            3 => Some(CapabilityTier::Avx2),
            _ => None,
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        fn detect_uncached() -> Option<CapabilityTier> {
            if std::is_x86_feature_detected!("avx2") {
                Some(CapabilityTier::Avx2)
            } else if std::is_x86_feature_detected!("avx") {
                Some(CapabilityTier::Avx)
            } else {
                None
            }
        }
    } else {
        // Without `std` there is no cpuid cache to query, so only trust what the binary was compiled for
        fn detect_uncached() -> Option<CapabilityTier> {
            if cfg!(target_feature = "avx2") {
                Some(CapabilityTier::Avx2)
            } else if cfg!(target_feature = "avx") {
                Some(CapabilityTier::Avx)
            } else {
                None
            }
        }
    }
}

/// Type-level capability tier, selects the instruction sequences a mask is built with
pub trait Tier : Sealed + Copy + Default + Debug + 'static {
    const KIND : CapabilityTier;
    /// Whether AVX2 instructions may be used
    const AVX2 : bool = matches!(Self::KIND, CapabilityTier::Avx2);
}

/// AVX only tier
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Avx;

/// AVX2 tier
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Avx2;

impl Sealed for Avx {}
impl Sealed for Avx2 {}

impl Tier for Avx {
    const KIND : CapabilityTier = CapabilityTier::Avx;
}

impl Tier for Avx2 {
    const KIND : CapabilityTier = CapabilityTier::Avx2;
}

cfg_if::cfg_if! {
    if #[cfg(target_feature = "avx2")] {
        /// Tier the crate was compiled for
        pub type DefaultTier = Avx2;
    } else {
        /// Tier the crate was compiled for
        pub type DefaultTier = Avx;
    }
}

/// Proof that the current machine supports the instructions of tier `K`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capability<K : Tier>(PhantomData<K>);

impl<K : Tier> Capability<K> {
    /// Get the capability if the current machine supports tier `K`
    pub fn detect() -> Option<Self> {
        match CapabilityTier::detect() {
            Some(tier) if tier.supports(K::KIND) => Some(Self(PhantomData)),
            detected => {
                log::trace!("refused {:?} capability, machine supports {detected:?}", K::KIND);
                None
            }
        }
    }

    /// Create the capability without checking the machine
    ///
    /// # Safety
    /// The current machine must support all instructions of tier `K`
    #[inline]
    pub const unsafe fn new_unchecked() -> Self {
        Self(PhantomData)
    }

    /// Get the tier this capability proves
    #[inline]
    pub const fn tier(self) -> CapabilityTier {
        K::KIND
    }
}
