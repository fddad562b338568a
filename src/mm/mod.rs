//! # Memory Management Subsystem (MM)
//!
//! Aqui fica apenas o acesso a buffers externos (`uaccess`), usado pelos
//! drivers de caractere para copiar dados de/para o chamador.

pub mod uaccess;

pub use uaccess::{CopyIn, CopyOut, KernelBuffer, KernelSlice, UserBuffer};
