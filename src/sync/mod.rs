//! # Synchronization Primitives
//!
//! Primitivas de sincronização para ambiente SMP.
//!
//! ## Regras
//!
//! - **Spinlock**: seções curtas e limitadas, nunca dormir com o lock adquirido
//! - **Ordem de Lock**: Sempre adquirir na mesma ordem para evitar deadlock
//!
//! Estruturas globais sem estado de driver (tabela de dispositivos, sink de
//! log) usam diretamente `spin::RwLock` / `spin::Once`.

/// Spinlock (busy-wait, não dorme)
pub mod spinlock;

pub use spinlock::{Spinlock, SpinlockGuard};
