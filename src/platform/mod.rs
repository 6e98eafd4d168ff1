//! Platform module: Runtime Hardware Probes
//!
//! Diagnostic-only - tidak ada keputusan runtime yang bergantung ke sini.

pub mod hwcaps;
