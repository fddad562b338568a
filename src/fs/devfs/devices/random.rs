//! /dev/random - Gerador pseudo-aleatório determinístico (LFSR de 8 bits)
//!
//! Todo o estado do dispositivo é um único byte de seed, protegido por um
//! spinlock nomeado `"rand"`. Cada operação adquire o lock uma vez, faz um
//! trabalho limitado e libera o lock em qualquer caminho de saída.
//!
//! # Contrato
//!
//! - `read(dst, n)`: produz `min(n, 8)` bytes, avançando o LFSR antes de cada
//!   byte. A primeira falha de cópia encerra a leitura; o retorno é o número
//!   de bytes copiados e o seed avançou exatamente essa quantidade de passos.
//! - `write(src, 1)`: substitui o seed pelo byte lido de `src` (reseed, não
//!   mistura). Qualquer outro tamanho retorna `-1` sem tocar no lock.
//!
//! **NÃO** é um gerador seguro. O objetivo é uma sequência reprodutível:
//! logo após `init`, o seed vale `0x2A`.

use alloc::sync::Arc;

use crate::fs::devfs::char_device::CharDevice;
use crate::fs::devfs::device::{Device, DeviceNumber, DeviceType};
use crate::fs::devfs::registry::DeviceRegistry;
use crate::fs::devfs::DEV_RANDOM;
use crate::klib::lfsr::lfsr_next;
use crate::mm::uaccess::{CopyIn, CopyOut};
use crate::sync::Spinlock;
use crate::sys::{Errno, DEV_FAILURE};

/// Seed logo após a inicialização
pub const RANDOM_INITIAL_SEED: u8 = 0x2A;

/// Máximo de bytes produzidos por chamada de `read`
pub const RANDOM_MAX_READ: usize = 8;

/// Nome do lock (diagnóstico)
pub const RANDOM_LOCK_NAME: &str = "rand";

/// /dev/random device
pub struct RandomDevice {
    dev: DeviceNumber,
    seed: Spinlock<u8>,
}

impl RandomDevice {
    /// Cria o dispositivo com o seed inicial, sem registrá-lo
    pub const fn new() -> Self {
        Self {
            dev: DEV_RANDOM,
            seed: Spinlock::new(RANDOM_LOCK_NAME, RANDOM_INITIAL_SEED),
        }
    }

    /// Inicializa o dispositivo e registra seus slots `read`/`write` no devsw.
    ///
    /// Deve rodar uma única vez, antes de qualquer leitura/escrita.
    pub fn init(registry: &DeviceRegistry) -> Result<Arc<Self>, Errno> {
        let device = Arc::new(Self::new());
        let handle: Arc<dyn CharDevice> = device.clone();
        registry.register(handle)?;

        crate::kinfo!("(Random) /dev/random registrado, seed=", RANDOM_INITIAL_SEED);
        Ok(device)
    }

    /// Nome de diagnóstico do lock do seed
    pub fn lock_name(&self) -> &'static str {
        self.seed.name()
    }

    /// Snapshot do seed atual
    pub fn seed(&self) -> u8 {
        *self.seed.lock()
    }

    /// Produz até 8 bytes pseudo-aleatórios em `dst`.
    ///
    /// Retorna quantos bytes foram copiados (0 se o primeiro já falhou).
    pub fn read(&self, dst: &mut dyn CopyOut, requested: usize) -> usize {
        let n = requested.min(RANDOM_MAX_READ);
        let mut seed = self.seed.lock();

        let mut copied = 0;
        while copied < n {
            let next = lfsr_next(*seed);
            if dst.copy_out(copied, &[next]).is_err() {
                crate::kdebug!("(Random) read: falha de cópia no offset=", copied);
                break;
            }
            *seed = next;
            copied += 1;
        }
        drop(seed);

        crate::ktrace!("(Random) read: bytes=", copied);
        copied
    }

    /// Reseed com exatamente 1 byte de `src`.
    ///
    /// Retorna `1` em sucesso, `-1` se `count != 1`, ou o errno negativo da
    /// cópia (o seed fica inalterado nesse caso).
    pub fn write(&self, src: &dyn CopyIn, count: usize) -> isize {
        if count != 1 {
            crate::ktrace!("(Random) write: tamanho inválido=", count);
            return DEV_FAILURE;
        }

        let mut seed = self.seed.lock();
        let mut byte = [0u8; 1];
        match src.copy_in(0, &mut byte) {
            Ok(copied) => {
                *seed = byte[0];
                crate::kdebug!("(Random) reseed=", byte[0]);
                copied as isize
            }
            Err(err) => {
                crate::kdebug!("(Random) write: falha de cópia, errno=", err.as_usize());
                err.as_isize()
            }
        }
    }
}

impl Device for RandomDevice {
    fn name(&self) -> &str {
        "random"
    }

    fn device_type(&self) -> DeviceType {
        DeviceType::Character
    }

    fn device_number(&self) -> DeviceNumber {
        self.dev
    }
}

impl CharDevice for RandomDevice {
    fn read(&self, dst: &mut dyn CopyOut, n: usize) -> isize {
        RandomDevice::read(self, dst, n) as isize
    }

    fn write(&self, src: &dyn CopyIn, n: usize) -> isize {
        RandomDevice::write(self, src, n)
    }
}

impl Default for RandomDevice {
    fn default() -> Self {
        Self::new()
    }
}
