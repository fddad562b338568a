//! System Definitions (ABI).
//!
//! Contém as constantes e tipos que definem a interface entre o Kernel e o Mundo.

pub mod error;

pub use error::{Errno, DEV_FAILURE};
