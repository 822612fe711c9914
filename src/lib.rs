#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

#[doc = include_str!("../README.md")]
#[cfg(all(doctest, feature = "std"))]
pub struct ReadmeDoctests;

extern crate alloc;

mod class;
mod classified;
mod classify;
pub mod constants;
mod options;
mod squeeze;
mod unit;

mod private {
    /// Used to mark traits as sealed to prevent implements from others outside of this crate
    pub trait Sealed {}
}

pub use class::*;
pub use classified::*;
pub use classify::*;
pub use options::*;
pub use squeeze::*;
pub use unit::*;
