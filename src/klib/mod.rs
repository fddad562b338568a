//! Kernel Library (KLib).
//!
//! Utilitários agnósticos de hardware para uso interno do Kernel.

pub mod lfsr;

#[cfg(feature = "self_test")]
pub mod test_framework;

pub use lfsr::{lfsr_next, Lfsr};
