//! Linkprobe - Static-Linking Smoke Test
//!
//! Arsitektur:
//! - Lock-Free Counters: Atomic-only, tidak ada Mutex
//! - Native Link Chain: app -> archive -> atomic support routines -> libc,
//!   plus system zlib via libz-sys
//! - Caller-Owned State: Tidak ada global singleton
//!
//! Crate ini tidak punya algoritma - satu-satunya "fitur" adalah rantai
//! dependency yang harus di-resolve linker dengan benar di target
//! tertentu, dan driver yang membuktikannya di runtime.

pub mod compress;
pub mod core;
pub mod platform;

pub use crate::core::{AtomicCounter, LinkProbe};
