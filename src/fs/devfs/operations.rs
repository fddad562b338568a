//! Device Operations - Flags de abertura de dispositivos

use bitflags::bitflags;

bitflags! {
    /// Flags para abertura de dispositivos (numeração POSIX).
    ///
    /// O modo de acesso ocupa os 2 bits baixos: `RDONLY` é o valor vazio.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        /// Apenas escrita
        const WRONLY = 0o1;
        /// Leitura e escrita
        const RDWR = 0o2;
        /// Non-blocking (aceito; os dispositivos daqui nunca bloqueiam por dados)
        const NONBLOCK = 0o4000;
    }
}

impl OpenFlags {
    /// Apenas leitura
    pub const RDONLY: Self = Self::empty();

    /// Máscara do modo de acesso
    const ACCMODE: u32 = 0o3;

    /// Verifica se tem flag de leitura
    pub const fn can_read(&self) -> bool {
        let mode = self.bits() & Self::ACCMODE;
        mode == 0o0 || mode == 0o2
    }

    /// Verifica se tem flag de escrita
    pub const fn can_write(&self) -> bool {
        let mode = self.bits() & Self::ACCMODE;
        mode == 0o1 || mode == 0o2
    }
}
