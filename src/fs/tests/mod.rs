//! Testes para o módulo Filesystem
//!
//! # Como Executar os Testes
//!
//! ```bash
//! # Todos os testes de filesystem
//! cargo test --lib fs::tests
//!
//! # Um módulo específico
//! cargo test --lib fs::tests::random
//! ```
//!
//! # Estrutura dos Testes
//!
//! - `devfs.rs` - Tabela de dispositivos e tipos base
//! - `random.rs` - Contrato do /dev/random
//! - `integration.rs` - DevFS → devsw → driver, incluindo concorrência
//!
//! # Convenções
//!
//! - Prefixo `test_` para testes unitários
//! - Prefixo `integration_` para testes de integração

#![cfg(test)]


use crate::fs::devfs::devices::random::RandomDevice;
use crate::fs::devfs::DevFS;

/// Primeiras 16 saídas do LFSR a partir de 0x2A
pub const REFERENCE_FROM_0X2A: [u8; 16] = [
    0x95, 0xCA, 0xE5, 0x72, 0xB9, 0xDC, 0xEE, 0x77, 0xBB, 0xDD, 0x6E, 0x37, 0x9B, 0xCD, 0xE6,
    0xF3,
];

/// Helper: Cria um DevFS para testes
pub fn create_test_devfs() -> DevFS {
    DevFS::new()
}

/// Helper: Cria um /dev/random isolado
pub fn create_test_random() -> RandomDevice {
    RandomDevice::new()
}

#[cfg(feature = "self_test")]
#[test]
fn test_self_test_suite_passes() {
    let report = crate::fs::test::run_random_tests();
    assert!(report.all_passed());
    assert_eq!(report.failed, 0);
}
