//! Spinlock - bloqueio com busy-wait

use core::cell::UnsafeCell;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{AtomicBool, Ordering};

/// Spinlock nomeado - usa busy-wait, NÃO pode dormir
///
/// A aquisição bloqueia o contexto chamador até o lock ficar livre (sem
/// timeout, sem cancelamento). A liberação é feita pelo drop do guard, então
/// todo caminho de saída da seção crítica libera o lock.
///
/// # Quando usar
///
/// - Seções críticas MUITO curtas e limitadas
/// - Quando não pode chamar scheduler
///
/// O nome serve apenas para diagnóstico (logs, debug).
pub struct Spinlock<T> {
    name: &'static str,
    locked: AtomicBool,
    data: UnsafeCell<T>,
}

// SAFETY: Spinlock protege acesso com lock atômico
unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send> Sync for Spinlock<T> {}

impl<T> Spinlock<T> {
    /// Cria novo spinlock
    pub const fn new(name: &'static str, data: T) -> Self {
        Self {
            name,
            locked: AtomicBool::new(false),
            data: UnsafeCell::new(data),
        }
    }

    /// Nome de diagnóstico
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Adquire o lock
    pub fn lock(&self) -> SpinlockGuard<'_, T> {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            // Espera passiva até parecer livre, evita martelar a cache line
            while self.locked.load(Ordering::Relaxed) {
                core::hint::spin_loop();
            }
        }

        SpinlockGuard { lock: self }
    }

    /// Tenta adquirir sem bloquear
    pub fn try_lock(&self) -> Option<SpinlockGuard<'_, T>> {
        if self
            .locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
        {
            Some(SpinlockGuard { lock: self })
        } else {
            None
        }
    }

    /// Verifica se o lock está adquirido (apenas diagnóstico, pode mudar logo depois)
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    /// Consome o lock e devolve o dado protegido
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }
}

/// Guard do spinlock - libera ao sair do escopo
pub struct SpinlockGuard<'a, T> {
    lock: &'a Spinlock<T>,
}

impl<T> Deref for SpinlockGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: Lock está adquirido
        unsafe { &*self.lock.data.get() }
    }
}

impl<T> DerefMut for SpinlockGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: Lock está adquirido
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<T> Drop for SpinlockGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.locked.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_lock_name() {
        let lock = Spinlock::new("rand", 0u8);
        assert_eq!(lock.name(), "rand");
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let lock = Spinlock::new("test", 1u32);
        {
            let mut guard = lock.lock();
            *guard += 1;
            assert!(lock.is_locked());
            assert!(lock.try_lock().is_none());
        }
        assert!(!lock.is_locked());
        assert_eq!(*lock.lock(), 2);
        assert_eq!(lock.into_inner(), 2);
    }

    #[test]
    fn test_guard_releases_on_early_return() {
        fn bump_until(lock: &Spinlock<u32>, limit: u32) -> u32 {
            let mut guard = lock.lock();
            for _ in 0..10 {
                if *guard >= limit {
                    return *guard;
                }
                *guard += 1;
            }
            *guard
        }

        let lock = Spinlock::new("test", 0u32);
        assert_eq!(bump_until(&lock, 3), 3);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_mutual_exclusion_between_threads() {
        const THREADS: usize = 4;
        const ITERS: usize = 10_000;

        let lock = Arc::new(Spinlock::new("counter", 0usize));
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let lock = Arc::clone(&lock);
                thread::spawn(move || {
                    for _ in 0..ITERS {
                        // Leitura e escrita separadas: só é correto com exclusão
                        let mut guard = lock.lock();
                        let value = *guard;
                        *guard = value + 1;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(*lock.lock(), THREADS * ITERS);
    }
}
