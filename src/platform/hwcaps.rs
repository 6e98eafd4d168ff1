//! Deteksi path atomic instruction di runtime
//!
//! Di aarch64, atomic read-modify-write bisa lewat dua jalur:
//! - FEAT_LSE: instruksi CAS/SWP langsung di hardware
//! - Outline helpers: routine dari toolchain yang fallback ke LL/SC,
//!   dan memilih jalur via `getauxval(AT_HWCAP)` dari libc
//!
//! Jalur kedua itulah yang membuat rantai link circular: archive crate
//! ini -> support routines -> libc. Module ini melaporkan jalur mana
//! yang aktif di mesin yang sedang jalan.

/// FEAT_LSE bit dalam AT_HWCAP (ABI kernel aarch64, stabil)
#[cfg(all(target_arch = "aarch64", target_os = "linux"))]
const HWCAP_ATOMICS: libc::c_ulong = 1 << 8;

/// Apakah hardware punya LSE atomics?
///
/// `Some(true/false)` di aarch64-linux, `None` di target lain
/// (jalur atomic di sana urusan toolchain, tidak perlu probe).
#[cfg(all(target_arch = "aarch64", target_os = "linux"))]
pub fn lse_atomics() -> Option<bool> {
    // SAFETY: getauxval selalu aman dipanggil dengan key AT_HWCAP;
    // return 0 kalau key tidak dikenal
    let caps = unsafe { libc::getauxval(libc::AT_HWCAP) };
    Some(caps & HWCAP_ATOMICS != 0)
}

#[cfg(not(all(target_arch = "aarch64", target_os = "linux")))]
pub fn lse_atomics() -> Option<bool> {
    None
}

/// Label jalur atomic untuk output driver
pub fn describe() -> &'static str {
    match lse_atomics() {
        Some(true) => "lse (hardware cas/swp)",
        Some(false) => "outline helpers (ll/sc fallback via libc)",
        None => "native (toolchain default)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_non_empty() {
        assert!(!describe().is_empty());
    }

    #[test]
    fn test_probe_is_stable() {
        // Hardware tidak berubah di tengah process
        assert_eq!(lse_atomics(), lse_atomics());
    }
}
