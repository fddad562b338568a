//! DevFS - Device Filesystem
//!
//! Sistema de arquivos para dispositivos (/dev).
//!
//! # Módulos
//!
//! - `device` - Trait Device e tipos base
//! - `char_device` - Dispositivos de caractere (slots read/write do devsw)
//! - `registry` - Tabela de dispositivos (devsw)
//! - `operations` - Flags de abertura
//! - `devices/*` - Implementações específicas
//!
//! # Fluxo
//!
//! ```text
//! DevFS::open("random") ──► DeviceFile ──► DeviceRegistry::read/write
//!                                               │
//!                                               ▼
//!                                     RandomDevice (lock + LFSR)
//! ```

pub mod char_device;
pub mod device;
pub mod operations;
pub mod registry;

pub mod devices {
    pub mod random;

    pub use random::RandomDevice;
}

// Re-exports públicos
pub use char_device::CharDevice;
pub use device::{Device, DeviceNumber, DeviceType};
pub use devices::RandomDevice;
pub use operations::OpenFlags;
pub use registry::DeviceRegistry;

use crate::mm::uaccess::{CopyIn, CopyOut};
use crate::sys::Errno;

// Constantes de dispositivos (major/minor numbers do Linux)
// Referência: https://www.kernel.org/doc/Documentation/admin-guide/devices.txt

/// /dev/random - gerador pseudo-aleatório (LFSR)
pub const DEV_RANDOM: DeviceNumber = DeviceNumber::new(1, 8);

/// Prefixo aceito em `open`
const DEV_PREFIX: &str = "/dev/";

/// DevFS - Device Filesystem
pub struct DevFS {
    /// Registro de dispositivos
    registry: DeviceRegistry,
}

impl DevFS {
    /// Cria uma nova instância de DevFS com os dispositivos essenciais
    pub fn new() -> Self {
        let devfs = Self {
            registry: DeviceRegistry::new(),
        };

        devfs.register_essential_devices();

        devfs
    }

    /// Registra dispositivos essenciais do kernel
    fn register_essential_devices(&self) {
        if let Err(err) = RandomDevice::init(&self.registry) {
            crate::kerror!("(DevFS) Falha ao registrar /dev/random, errno=", err.as_usize());
        }
    }

    /// Tabela de dispositivos
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Abre um dispositivo por nome (`random` ou `/dev/random`)
    pub fn open(&self, path: &str, flags: OpenFlags) -> Result<DeviceFile<'_>, Errno> {
        let name = path.strip_prefix(DEV_PREFIX).unwrap_or(path);
        let dev = self.registry.lookup(name).ok_or(Errno::ENOENT)?;

        crate::ktrace!("(DevFS) open dev=", dev.as_u64());
        Ok(DeviceFile {
            registry: &self.registry,
            dev,
            flags,
        })
    }
}

impl Default for DevFS {
    fn default() -> Self {
        Self::new()
    }
}

/// Arquivo de dispositivo aberto
///
/// Guarda apenas o device number e as flags; cada operação é roteada pela
/// tabela de dispositivos.
pub struct DeviceFile<'a> {
    registry: &'a DeviceRegistry,
    dev: DeviceNumber,
    flags: OpenFlags,
}

impl DeviceFile<'_> {
    pub fn device_number(&self) -> DeviceNumber {
        self.dev
    }

    pub fn flags(&self) -> OpenFlags {
        self.flags
    }

    /// `read(fd, buf, n)`
    pub fn read(&self, dst: &mut dyn CopyOut, n: usize) -> isize {
        if !self.flags.can_read() {
            return Errno::EBADF.as_isize();
        }
        self.registry.read(self.dev, dst, n)
    }

    /// `write(fd, buf, n)`
    pub fn write(&self, src: &dyn CopyIn, n: usize) -> isize {
        if !self.flags.can_write() {
            return Errno::EBADF.as_isize();
        }
        self.registry.write(self.dev, src, n)
    }
}
