//! SIMD mask backend for 256-bit x86_64 registers (AVX, optionally AVX2)
//!
//! A mask stores 1 boolean per lane of a 256-bit vector, with each lane holding either all ones (`true`) or all zeros (`false`).
//! This crate converts between that in-register form and a boolean buffer in memory (1 byte per lane), for lanes of 1, 2, 4 and 8 bytes.
//!
//! - The element type decides the lane count at compile time, see [`MaskElement`]
//! - The capability tier decides which instruction sequences are used, see [`Tier`]. It never changes results
//! - Element types wider than 8 bytes fall back to a single lane [`ScalarMask`]
//!
//! The tier should be resolved once at startup with [`CapabilityTier::detect`] or [`Capability::detect`],
//! and the matching `Mask<T, Avx>` or `Mask<T, Avx2>` instantiation used afterwards.
//!
//! Only little-endian x86_64 is supported.
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(target_arch = "x86_64"))]
compile_error!("Only x86_64 is supported");

mod lanes;
mod element;
mod flags;
mod tier;
mod mask;

mod backend;

pub use lanes::*;
pub use element::*;
pub use flags::*;
pub use tier::*;
pub use mask::*;

pub use backend::{MaskLayout, MaskImpl, ScalarMask};
