//! Core Module
//!
//! Infraestrutura central do kernel compartilhada pelos drivers.

pub mod logging;
