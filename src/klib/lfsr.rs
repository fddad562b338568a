//! # LFSR de 8 bits
//!
//! Gerador pseudo-aleatório mínimo e reprodutível usado pelo `/dev/random`.
//! Registrador de deslocamento Fibonacci de 1 byte com taps nos bits
//! 0, 2, 3 e 4: o bit de realimentação entra como novo bit mais significativo.
//!
//! **NÃO** é criptograficamente seguro. O que importa é reproduzir bit a bit
//! a sequência de referência.
//!
//! O estado `0x00` é um ponto fixo (a realimentação é sempre 0) e é mantido
//! assim para compatibilidade. De qualquer estado não nulo o período é 255.

/// Calcula o próximo estado (que também é a saída) do LFSR.
#[inline]
pub const fn lfsr_next(state: u8) -> u8 {
    let bit = ((state >> 0) ^ (state >> 2) ^ (state >> 3) ^ (state >> 4)) & 0x01;
    (state >> 1) | (bit << 7)
}

/// Gerador com estado próprio, para sequências de referência.
///
/// Cada `next()` avança uma vez e devolve o novo estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lfsr {
    state: u8,
}

impl Lfsr {
    /// Período máximo a partir de um estado não nulo
    pub const PERIOD: usize = 255;

    pub const fn new(seed: u8) -> Self {
        Self { state: seed }
    }

    /// Estado atual (última saída)
    pub const fn state(&self) -> u8 {
        self.state
    }

    /// Aplica o passo `steps` vezes a partir de `state`
    pub const fn advance(mut state: u8, steps: usize) -> u8 {
        let mut i = 0;
        while i < steps {
            state = lfsr_next(state);
            i += 1;
        }
        state
    }
}

impl Iterator for Lfsr {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.state = lfsr_next(self.state);
        Some(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN_FROM_0X2A: [u8; 8] = [0x95, 0xCA, 0xE5, 0x72, 0xB9, 0xDC, 0xEE, 0x77];

    #[test]
    fn test_golden_sequence() {
        let mut state = 0x2A;
        for &expected in GOLDEN_FROM_0X2A.iter() {
            state = lfsr_next(state);
            assert_eq!(state, expected);
        }
    }

    #[test]
    fn test_iterator_matches_step_function() {
        let out: Vec<u8> = Lfsr::new(0x2A).take(8).collect();
        assert_eq!(out, GOLDEN_FROM_0X2A);
    }

    #[test]
    fn test_deterministic_for_every_state() {
        for s in 0..=u8::MAX {
            assert_eq!(lfsr_next(s), lfsr_next(s));
        }
    }

    #[test]
    fn test_single_steps() {
        assert_eq!(lfsr_next(0x01), 0x80);
        assert_eq!(lfsr_next(0x80), 0x40);
        assert_eq!(lfsr_next(0xFF), 0x7F);
        assert_eq!(lfsr_next(0x55), 0xAA);
    }

    #[test]
    fn test_zero_is_fixed_point() {
        assert_eq!(lfsr_next(0x00), 0x00);
        assert_eq!(Lfsr::advance(0x00, 1000), 0x00);
    }

    #[test]
    fn test_full_period() {
        let mut state = 0x2A;
        for step in 1..=Lfsr::PERIOD {
            state = lfsr_next(state);
            if step < Lfsr::PERIOD {
                assert_ne!(state, 0x2A, "ciclo curto em {}", step);
            }
        }
        assert_eq!(state, 0x2A);
    }

    #[test]
    fn test_advance() {
        assert_eq!(Lfsr::advance(0x2A, 0), 0x2A);
        assert_eq!(Lfsr::advance(0x2A, 8), 0x77);
        assert_eq!(Lfsr::advance(0x2A, 100), 0x58);
        let mut lfsr = Lfsr::new(0x2A);
        lfsr.nth(2);
        assert_eq!(lfsr.state(), 0xE5);
    }
}
