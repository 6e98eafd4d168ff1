//! Lock-Free Atomic Counter
//!
//! Satu integer counter yang di-share semua thread dalam satu process.
//! Tidak ada Mutex, tidak ada global static - caller yang membuat counter
//! dan membagikannya via `&` atau `Arc`.

use std::sync::atomic::{AtomicI64, Ordering};

/// Padding untuk cache line isolation (64 bytes pada x86-64 dan aarch64)
#[repr(C, align(64))]
pub(crate) struct CacheLinePadded<T> {
    pub(crate) value: T,
}

impl<T> CacheLinePadded<T> {
    pub(crate) const fn new(value: T) -> Self {
        Self { value }
    }
}

/// Process-wide shared counter di atas satu `AtomicI64`
///
/// Counter menempati cache line sendiri supaya increment dari banyak
/// thread tidak false-sharing dengan data tetangga.
///
/// Semua operasi total - tidak ada kondisi error, tidak pernah blocking.
pub struct AtomicCounter {
    value: CacheLinePadded<AtomicI64>,
}

impl Default for AtomicCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicCounter {
    /// Membuat counter baru dengan nilai awal 0
    pub const fn new() -> Self {
        Self {
            value: CacheLinePadded::new(AtomicI64::new(0)),
        }
    }

    /// Tambahkan `value` secara atomic, return nilai SEBELUM penambahan
    ///
    /// Satu instruksi read-modify-write: tidak ada lost update walaupun
    /// dipanggil dari unbounded concurrent callers.
    /// Relaxed cukup - counter berdiri sendiri, coherence per-variable
    /// sudah menjamin serialisasi semua add.
    #[inline(always)]
    pub fn add(&self, value: i64) -> i64 {
        self.value.value.fetch_add(value, Ordering::Relaxed)
    }

    /// Baca nilai saat ini secara atomic
    ///
    /// Acquire load - berpasangan dengan Release store di `reset` supaya
    /// thread yang melihat hasil reset juga melihat write sebelumnya.
    #[inline(always)]
    pub fn get(&self) -> i64 {
        self.value.value.load(Ordering::Acquire)
    }

    /// Set counter kembali ke 0 secara atomic
    #[inline(always)]
    pub fn reset(&self) {
        self.value.value.store(0, Ordering::Release);
    }
}
