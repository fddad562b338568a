//! Sistema de Arquivos.
//!
//! Submódulos:
//! - `devfs`: Dispositivos virtuais (/dev).

pub mod devfs;


#[cfg(test)]
mod tests;
