//! Device Registry - Tabela de dispositivos (devsw)
//!
//! Roteia as operações `read`/`write` de um arquivo de dispositivo para o
//! driver registrado sob o mesmo `DeviceNumber`.
//!
//! O lock da tabela só é mantido durante a busca: a chamada ao driver roda
//! com um `Arc` clonado, fora do lock.

use alloc::sync::Arc;
use spin::RwLock;

use super::char_device::CharDevice;
use super::device::DeviceNumber;
use crate::mm::uaccess::{CopyIn, CopyOut};
use crate::sys::Errno;

/// Número máximo de dispositivos
pub const MAX_DEVICES: usize = 16;

// Entrada no registro de dispositivos
struct DeviceEntry {
    dev: DeviceNumber,
    device: Arc<dyn CharDevice>,
}

/// Registro de dispositivos
pub struct DeviceRegistry {
    devices: RwLock<[Option<DeviceEntry>; MAX_DEVICES]>,
}

impl DeviceRegistry {
    /// Cria um novo registro
    pub const fn new() -> Self {
        const NONE: Option<DeviceEntry> = None;
        Self {
            devices: RwLock::new([NONE; MAX_DEVICES]),
        }
    }

    /// Registra um dispositivo sob o seu device number
    pub fn register(&self, device: Arc<dyn CharDevice>) -> Result<(), Errno> {
        let dev = device.device_number();
        let mut devices = self.devices.write();

        if devices.iter().flatten().any(|entry| entry.dev == dev) {
            crate::kwarn!("(DevFS) Device number já registrado, major=", dev.major);
            return Err(Errno::EEXIST);
        }

        let slot = devices
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or(Errno::ENOSPC)?;
        *slot = Some(DeviceEntry { dev, device });

        crate::ktrace!("(DevFS) Registrado dev=", dev.as_u64());
        Ok(())
    }

    /// Remove um dispositivo, devolvendo o handle registrado
    pub fn unregister(&self, dev: DeviceNumber) -> Result<Arc<dyn CharDevice>, Errno> {
        let mut devices = self.devices.write();
        let slot = devices
            .iter_mut()
            .find(|slot| slot.as_ref().map_or(false, |entry| entry.dev == dev))
            .ok_or(Errno::ENODEV)?;

        slot.take()
            .map(|entry| entry.device)
            .ok_or(Errno::ENODEV)
    }

    /// Busca um dispositivo por nome
    pub fn lookup(&self, name: &str) -> Option<DeviceNumber> {
        self.devices
            .read()
            .iter()
            .flatten()
            .find(|entry| entry.device.name() == name)
            .map(|entry| entry.dev)
    }

    /// Busca um dispositivo por device number
    pub fn lookup_by_dev(&self, dev: DeviceNumber) -> Option<Arc<dyn CharDevice>> {
        self.devices
            .read()
            .iter()
            .flatten()
            .find(|entry| entry.dev == dev)
            .map(|entry| Arc::clone(&entry.device))
    }

    /// Número de dispositivos registrados
    pub fn count(&self) -> usize {
        self.devices.read().iter().flatten().count()
    }

    /// Despacha `read` para o slot do dispositivo
    pub fn read(&self, dev: DeviceNumber, dst: &mut dyn CopyOut, n: usize) -> isize {
        match self.lookup_by_dev(dev) {
            Some(device) => device.read(dst, n),
            None => Errno::ENODEV.as_isize(),
        }
    }

    /// Despacha `write` para o slot do dispositivo
    pub fn write(&self, dev: DeviceNumber, src: &dyn CopyIn, n: usize) -> isize {
        match self.lookup_by_dev(dev) {
            Some(device) => device.write(src, n),
            None => Errno::ENODEV.as_isize(),
        }
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
