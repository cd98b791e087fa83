//! Statistical attacks on single-byte and repeating-key XOR ciphers,
//! plus the codecs and XOR primitives the attack programs are built from.

pub mod analyze;
pub mod encode;
pub mod encrypt;
pub mod error;
pub mod score;
