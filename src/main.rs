//! Linkprobe Driver - Static-Linking Verification
//!
//! Script linear, sekali jalan:
//! 1. Round-trip 1 byte lewat system zlib
//! 2. Local atomic increment-and-check
//! 3. Panggil `used()` dari library-under-test, print hasilnya
//! 4. Panggil counter add/get, print hasilnya
//!
//! Tanpa argumen, tanpa flag. Exit 0 kalau semua check lolos,
//! exit 1 dengan diagnostic di stderr kalau ada yang gagal.
//!
//! Usage:
//!   cargo run --release

use std::fmt;
use std::process;
use std::sync::atomic::{AtomicI32, Ordering};

use linkprobe::compress::{self, CompressError};
use linkprobe::platform::hwcaps;
use linkprobe::{AtomicCounter, LinkProbe};

/// Dua jenis kegagalan verifikasi - keduanya fatal, tidak ada retry
enum CheckError {
    Compression(CompressError),
    AtomicCheck { expected: i32, got: i32 },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compression(e) => write!(f, "{}", e),
            Self::AtomicCheck { expected, got } => {
                write!(
                    f,
                    "atomic check failed: expected {}, loaded {}",
                    expected, got
                )
            }
        }
    }
}

fn run_checks() -> Result<(), CheckError> {
    // === CHECK 1: System zlib ter-link dan berfungsi ===
    println!("zlib version = {}", compress::version());

    let report = compress::round_trip(&[0u8]).map_err(CheckError::Compression)?;
    println!(
        "zlib round-trip: {} byte -> {} bytes compressed",
        report.payload_len, report.compressed_len
    );

    // === CHECK 2: Local atomic increment-and-check ===
    // SeqCst supaya check ini melewati jalur barrier terlengkap yang
    // disediakan toolchain
    let x = AtomicI32::new(0);
    x.fetch_add(1, Ordering::SeqCst);
    let got = x.load(Ordering::SeqCst);
    if got != 1 {
        return Err(CheckError::AtomicCheck { expected: 1, got });
    }

    // === CHECK 3: Library-under-test ===
    let probe = LinkProbe::new();
    println!("result = {}", probe.used());

    // === CHECK 4: Counter module ===
    let counter = AtomicCounter::new();
    counter.add(42);
    println!("atomic result = {}", counter.get());

    println!("atomic path = {}", hwcaps::describe());

    Ok(())
}

fn main() {
    println!("🔗 Linkprobe - Static Linking Smoke Test");
    println!("========================================\n");

    if let Err(e) = run_checks() {
        eprintln!("❌ {}", e);
        process::exit(1);
    }

    println!("\n✅ All link checks passed!");
}
