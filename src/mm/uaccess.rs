//! # User/Kernel Access (uaccess)
//!
//! Primitivas de cópia entre o kernel e um buffer externo que pode estar no
//! espaço de usuário ou no próprio kernel.
//!
//! Os drivers de caractere recebem o destino/origem como uma capability
//! injetada (`&mut dyn CopyOut` / `&dyn CopyIn`) em vez de um endereço cru.
//! Isso permite testar o driver no host com buffers em memória.
//!
//! ## Contrato
//! - A cópia é tudo-ou-nada por chamada: ou todos os bytes pedidos são
//!   copiados (`Ok(n)`), ou nenhum (`Err(Errno::EFAULT)`).
//! - Cópias de 1 byte são atômicas do ponto de vista do chamador.
//! - Nunca entra em pânico por endereço ruim; falha com `EFAULT`.

use crate::sys::Errno;

/// Fim (exclusivo) do espaço de endereçamento de usuário (canonical lower half).
pub const USER_SPACE_END: usize = 0x0000_8000_0000_0000;

/// Destino de cópia (kernel → externo)
pub trait CopyOut {
    /// Copia `bytes` para o destino na posição `offset`.
    fn copy_out(&mut self, offset: usize, bytes: &[u8]) -> Result<usize, Errno>;
}

/// Origem de cópia (externo → kernel)
pub trait CopyIn {
    /// Copia `bytes.len()` bytes da origem, a partir de `offset`, para `bytes`.
    fn copy_in(&self, offset: usize, bytes: &mut [u8]) -> Result<usize, Errno>;
}

/// Verifica que `[offset, offset + count)` cabe em `len`.
#[inline]
fn check_range(len: usize, offset: usize, count: usize) -> Result<usize, Errno> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(end),
        _ => Err(Errno::EFAULT),
    }
}

// =============================================================================
// BUFFERS DE KERNEL
// =============================================================================

/// Buffer de destino no espaço do kernel.
///
/// Qualquer byte além do fim do slice é tratado como endereço inválido.
pub struct KernelBuffer<'a> {
    buf: &'a mut [u8],
}

impl<'a> KernelBuffer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl CopyOut for KernelBuffer<'_> {
    fn copy_out(&mut self, offset: usize, bytes: &[u8]) -> Result<usize, Errno> {
        let end = check_range(self.buf.len(), offset, bytes.len())?;
        self.buf[offset..end].copy_from_slice(bytes);
        Ok(bytes.len())
    }
}

/// Buffer de origem no espaço do kernel.
pub struct KernelSlice<'a> {
    buf: &'a [u8],
}

impl<'a> KernelSlice<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }
}

impl CopyIn for KernelSlice<'_> {
    fn copy_in(&self, offset: usize, bytes: &mut [u8]) -> Result<usize, Errno> {
        let end = check_range(self.buf.len(), offset, bytes.len())?;
        bytes.copy_from_slice(&self.buf[offset..end]);
        Ok(bytes.len())
    }
}

// =============================================================================
// BUFFER DE USUÁRIO
// =============================================================================

/// Região `[addr, addr + len)` no espaço de usuário.
///
/// Ponteiro nulo, região que cruza [`USER_SPACE_END`] e acesso além de `len`
/// falham com `EFAULT` antes de qualquer dereferência.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserBuffer {
    addr: usize,
    len: usize,
}

impl UserBuffer {
    /// Cria a referência para a região de usuário.
    ///
    /// # Safety
    ///
    /// Toda região dentro de `[addr, addr + len)` que passa nas verificações de
    /// limite deve estar mapeada (e gravável, se usada como destino) no espaço
    /// de endereçamento atual durante o uso deste buffer.
    pub const unsafe fn new(addr: usize, len: usize) -> Self {
        Self { addr, len }
    }

    pub const fn addr(&self) -> usize {
        self.addr
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Endereço efetivo de `[offset, offset + count)` após validação
    fn validate(&self, offset: usize, count: usize) -> Result<usize, Errno> {
        if self.addr == 0 {
            return Err(Errno::EFAULT);
        }
        let end = check_range(self.len, offset, count)?;
        match self.addr.checked_add(end) {
            Some(last) if last <= USER_SPACE_END => Ok(self.addr + offset),
            _ => Err(Errno::EFAULT),
        }
    }
}

impl CopyOut for UserBuffer {
    fn copy_out(&mut self, offset: usize, bytes: &[u8]) -> Result<usize, Errno> {
        let dst = self.validate(offset, bytes.len())?;
        // SAFETY: região validada; mapeamento garantido pelo contrato de `new`
        unsafe {
            core::ptr::copy_nonoverlapping(bytes.as_ptr(), dst as *mut u8, bytes.len());
        }
        Ok(bytes.len())
    }
}

impl CopyIn for UserBuffer {
    fn copy_in(&self, offset: usize, bytes: &mut [u8]) -> Result<usize, Errno> {
        let src = self.validate(offset, bytes.len())?;
        // SAFETY: região validada; mapeamento garantido pelo contrato de `new`
        unsafe {
            core::ptr::copy_nonoverlapping(src as *const u8, bytes.as_mut_ptr(), bytes.len());
        }
        Ok(bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_buffer_copy_out() {
        let mut raw = [0u8; 4];
        let mut dst = KernelBuffer::new(&mut raw);
        assert_eq!(dst.copy_out(0, &[0xAA]), Ok(1));
        assert_eq!(dst.copy_out(3, &[0xBB]), Ok(1));
        assert_eq!(dst.copy_out(4, &[0xCC]), Err(Errno::EFAULT));
        assert_eq!(dst.copy_out(3, &[1, 2]), Err(Errno::EFAULT));
        assert_eq!(raw, [0xAA, 0, 0, 0xBB]);
    }

    #[test]
    fn test_kernel_slice_copy_in() {
        let src = KernelSlice::new(&[7, 8]);
        let mut byte = [0u8; 1];
        assert_eq!(src.copy_in(1, &mut byte), Ok(1));
        assert_eq!(byte, [8]);
        assert_eq!(src.copy_in(2, &mut byte), Err(Errno::EFAULT));
        assert_eq!(src.copy_in(usize::MAX, &mut byte), Err(Errno::EFAULT));
        assert_eq!(byte, [8]);
    }

    #[test]
    fn test_user_buffer_rejects_null() {
        let mut dst = unsafe { UserBuffer::new(0, 8) };
        assert_eq!(dst.copy_out(0, &[1]), Err(Errno::EFAULT));
        let mut byte = [0u8; 1];
        assert_eq!(dst.copy_in(0, &mut byte), Err(Errno::EFAULT));
    }

    #[test]
    fn test_user_buffer_rejects_kernel_half() {
        let mut dst = unsafe { UserBuffer::new(USER_SPACE_END, 1) };
        assert_eq!(dst.copy_out(0, &[1]), Err(Errno::EFAULT));

        let mut crossing = unsafe { UserBuffer::new(USER_SPACE_END - 1, 2) };
        assert_eq!(crossing.copy_out(1, &[1]), Err(Errno::EFAULT));

        let mut wrapping = unsafe { UserBuffer::new(usize::MAX, 2) };
        assert_eq!(wrapping.copy_out(0, &[1]), Err(Errno::EFAULT));
    }

    #[test]
    fn test_user_buffer_round_trip_on_mapped_memory() {
        let mut raw = [0u8; 2];
        let addr = raw.as_mut_ptr() as usize;
        if addr.checked_add(raw.len()).map_or(true, |end| end > USER_SPACE_END) {
            // Plataforma com endereços do host fora da metade baixa
            return;
        }

        let mut user = unsafe { UserBuffer::new(addr, raw.len()) };
        assert_eq!(user.copy_out(1, &[0x5A]), Ok(1));
        assert_eq!(user.copy_out(2, &[0x5A]), Err(Errno::EFAULT));

        let mut byte = [0u8; 1];
        assert_eq!(user.copy_in(1, &mut byte), Ok(1));
        assert_eq!(byte, [0x5A]);
        assert_eq!(raw, [0, 0x5A]);
    }
}
