//! # Standard Error Codes (Errno)
//!
//! Códigos de erro retornados pelo kernel e pelos drivers.
//! Segue a numeração POSIX/Linux para facilitar compatibilidade.
//!
//! ## Convenções
//! - Internamente as APIs retornam `Result<T, Errno>` e propagam com `?`.
//! - Na fronteira do devsw (slots `read`/`write`) o erro vira um `isize`
//!   negativo via [`Errno::as_isize`].
//! - [`DEV_FAILURE`] é o sentinela genérico (`-1`) usado quando a operação é
//!   rejeitada antes de qualquer acesso ao dispositivo.

/// Falha genérica de um slot do devsw (requisição malformada).
pub const DEV_FAILURE: isize = -1;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    EPERM = 1,    // Operation not permitted
    ENOENT = 2,   // No such file or directory
    EIO = 5,      // I/O error
    ENXIO = 6,    // No such device or address
    EBADF = 9,    // Bad file number
    EFAULT = 14,  // Bad address
    EBUSY = 16,   // Device or resource busy
    EEXIST = 17,  // File exists
    ENODEV = 19,  // No such device
    EINVAL = 22,  // Invalid argument
    ENOSPC = 28,  // No space left on device
    ENOSYS = 38,  // Function not implemented
}

impl Errno {
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// Formato de retorno do devsw/syscall (negativo)
    pub fn as_isize(self) -> isize {
        -(self as i32) as isize
    }

    /// Recupera o erro a partir de um retorno negativo
    pub fn from_code(code: isize) -> Option<Self> {
        if code >= 0 {
            return None;
        }
        match code.checked_neg()? {
            1 => Some(Self::EPERM),
            2 => Some(Self::ENOENT),
            5 => Some(Self::EIO),
            6 => Some(Self::ENXIO),
            9 => Some(Self::EBADF),
            14 => Some(Self::EFAULT),
            16 => Some(Self::EBUSY),
            17 => Some(Self::EEXIST),
            19 => Some(Self::ENODEV),
            22 => Some(Self::EINVAL),
            28 => Some(Self::ENOSPC),
            38 => Some(Self::ENOSYS),
            _ => None,
        }
    }

    /// Nome curto para logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EPERM => "EPERM",
            Self::ENOENT => "ENOENT",
            Self::EIO => "EIO",
            Self::ENXIO => "ENXIO",
            Self::EBADF => "EBADF",
            Self::EFAULT => "EFAULT",
            Self::EBUSY => "EBUSY",
            Self::EEXIST => "EEXIST",
            Self::ENODEV => "ENODEV",
            Self::EINVAL => "EINVAL",
            Self::ENOSPC => "ENOSPC",
            Self::ENOSYS => "ENOSYS",
        }
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_abi_value() {
        assert_eq!(Errno::EFAULT.as_isize(), -14);
        assert_eq!(Errno::ENODEV.as_isize(), -19);
        assert_eq!(Errno::EPERM.as_usize(), 1);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Errno::from_code(-14), Some(Errno::EFAULT));
        assert_eq!(Errno::from_code(Errno::EBADF.as_isize()), Some(Errno::EBADF));
        assert_eq!(Errno::from_code(0), None);
        assert_eq!(Errno::from_code(1), None);
        assert_eq!(Errno::from_code(-999), None);
        assert_eq!(Errno::from_code(isize::MIN), None);
    }

    #[test]
    fn test_generic_failure_is_minus_one() {
        assert_eq!(DEV_FAILURE, -1);
        assert_eq!(Errno::from_code(DEV_FAILURE), Some(Errno::EPERM));
    }
}
