//! Link Probe - Library-Under-Test
//!
//! Fungsi exported yang internal-nya bergantung pada atomic primitives.
//! Saat crate ini di-build sebagai static archive di aarch64, archive-nya
//! membawa referensi ke outline atomic helpers dari toolchain, yang pada
//! gilirannya memanggil `getauxval()` dari libc. Linker harus resolve
//! rantai: app -> archive -> support routines -> libc.

use std::sync::atomic::{AtomicI64, Ordering};

use super::CacheLinePadded;

/// Probe dengan internal call counter sendiri, independen dari
/// [`AtomicCounter`](super::AtomicCounter)
pub struct LinkProbe {
    calls: CacheLinePadded<AtomicI64>,
}

impl Default for LinkProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkProbe {
    /// Membuat probe baru dengan call counter 0
    pub const fn new() -> Self {
        Self {
            calls: CacheLinePadded::new(AtomicI64::new(0)),
        }
    }

    /// Increment call counter, return `41 + (nilai sesudah increment)`
    ///
    /// Panggilan pertama menghasilkan 42, berikutnya 43, dst.
    /// Nilai diturunkan langsung dari hasil fetch_add - bukan load
    /// terpisah - jadi setiap concurrent caller mendapat nilai distinct.
    #[inline(always)]
    pub fn used(&self) -> i64 {
        41 + self.calls.value.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Selalu return 99, tidak menyentuh shared state apapun
    ///
    /// Tidak pernah dipanggil binary manapun di crate ini. Symbol ini ada
    /// supaya binary hasil link membuktikan linker tidak salah menarik
    /// symbol yang tidak direferensikan.
    pub const fn unused() -> i64 {
        99
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_is_42() {
        let probe = LinkProbe::new();
        assert_eq!(probe.used(), 42);
    }

    #[test]
    fn test_sequential_calls_are_monotonic() {
        let probe = LinkProbe::new();

        for expected in 42..=52 {
            assert_eq!(probe.used(), expected);
        }
    }

    #[test]
    fn test_unused_is_constant() {
        assert_eq!(LinkProbe::unused(), 99);
    }

    #[test]
    fn test_unused_has_no_side_effect() {
        let probe = LinkProbe::new();

        for _ in 0..100 {
            LinkProbe::unused();
        }

        // Call counter tidak tersentuh
        assert_eq!(probe.used(), 42);
    }

    #[test]
    fn test_probes_are_independent() {
        let a = LinkProbe::new();
        let b = LinkProbe::new();

        assert_eq!(a.used(), 42);
        assert_eq!(a.used(), 43);
        assert_eq!(b.used(), 42);
    }
}
