//! Character Device - Dispositivos de caractere
//!
//! Os métodos deste trait são os slots `read`/`write` do devsw: recebem a
//! capability de cópia e o tamanho pedido, e devolvem o inteiro da ABI
//! (bytes transferidos, ou errno negativo).

use super::device::Device;
use crate::mm::uaccess::{CopyIn, CopyOut};
use crate::sys::Errno;

/// Trait para dispositivos de caractere
pub trait CharDevice: Device {
    /// Lê até `n` bytes do dispositivo para `dst`
    fn read(&self, _dst: &mut dyn CopyOut, _n: usize) -> isize {
        Errno::ENOSYS.as_isize()
    }

    /// Escreve `n` bytes de `src` no dispositivo
    fn write(&self, _src: &dyn CopyIn, _n: usize) -> isize {
        Errno::ENOSYS.as_isize()
    }
}
