//! Forge Random - /dev/random determinístico para o kernel Forge.
//!
//! Driver de caractere que expõe um LFSR de 8 bits pela interface
//! read/write de arquivos de dispositivo.
//!
//! - `klib::lfsr`: gerador (função pura de 8 bits)
//! - `fs::devfs::devices::random`: dispositivo (seed + lock, init/read/write)
//! - `fs::devfs::registry`: tabela de dispositivos (devsw)
//! - `mm::uaccess`: primitivas de cópia injetadas (usuário/kernel)
//! - `sync`: spinlock nomeado
//! - `core::logging`: macros de log zero-overhead

#![cfg_attr(not(test), no_std)]

// Habilitar alocação dinâmica (necessário para Arc)
extern crate alloc;

pub mod core; // Logging
pub mod fs; // DevFS e dispositivos
pub mod klib; // Utilitários internos (LFSR)
pub mod mm; // Acesso a buffers externos
pub mod sync; // Primitivas de sincronização
pub mod sys; // Definições de sistema (Errno)

pub use crate::fs::devfs::{DevFS, RandomDevice};
