//! Counter Soak - Multi-Thread Contention Driver
//!
//! Hammer kedua counter dari banyak thread sekaligus dan verifikasi
//! tidak ada lost update. Ini versi "berat" dari check di driver utama:
//! kalau toolchain salah menurunkan atomic RMW, di sinilah kelihatan.
//!
//! Usage:
//!   cargo run --release --bin counter_soak -- [OPTIONS]

use std::fmt;
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use linkprobe::{AtomicCounter, LinkProbe};

/// Soak configuration
struct SoakConfig {
    threads: u32,
    iters: u64,
    value: i64,
    verbose: bool,
}

impl Default for SoakConfig {
    fn default() -> Self {
        Self {
            threads: 8,
            iters: 1_000_000,
            value: 1,
            verbose: false,
        }
    }
}

/// Kegagalan yang bisa dideteksi soak - semuanya berarti atomic
/// guarantee dilanggar, fatal
enum SoakError {
    LostUpdates { expected: i64, got: i64 },
    ProbeNotMonotonic { thread: u32 },
    ProbeMax { expected: i64, got: i64 },
}

impl fmt::Display for SoakError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LostUpdates { expected, got } => {
                write!(f, "lost updates: expected {}, counter at {}", expected, got)
            }
            Self::ProbeNotMonotonic { thread } => {
                write!(f, "probe values not monotonic in thread {}", thread)
            }
            Self::ProbeMax { expected, got } => {
                write!(f, "probe max: expected {}, observed {}", expected, got)
            }
        }
    }
}

/// Phase 1: semua thread menambah counter yang sama
fn soak_counter(config: &SoakConfig) -> Result<(), SoakError> {
    let counter = Arc::new(AtomicCounter::new());
    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let counter = Arc::clone(&counter);
            let iters = config.iters;
            let value = config.value;
            thread::spawn(move || {
                let thread_start = Instant::now();
                for _ in 0..iters {
                    counter.add(value);
                }
                (t, thread_start.elapsed())
            })
        })
        .collect();

    for handle in handles {
        if let Ok((t, elapsed)) = handle.join() {
            if config.verbose {
                println!("   [{}] done in {:.1}ms", t, elapsed.as_secs_f64() * 1000.0);
            }
        }
    }

    let duration = start.elapsed();
    let total_ops = config.threads as u64 * config.iters;
    let expected = total_ops as i64 * config.value;
    let got = counter.get();

    println!("\n📊 Phase 1: AtomicCounter::add contention");
    println!("   Threads:    {}", config.threads);
    println!("   Operations: {}", total_ops);
    println!("   Duration:   {:.2}s", duration.as_secs_f64());
    println!(
        "   Throughput: {:.2} M ops/sec",
        total_ops as f64 / duration.as_secs_f64() / 1_000_000.0
    );

    if got != expected {
        return Err(SoakError::LostUpdates { expected, got });
    }

    Ok(())
}

/// Phase 2: semua thread memanggil `used()` di probe yang sama
///
/// Setiap thread memverifikasi return value-nya sendiri strictly
/// increasing; fetch_add menjamin tidak ada dua caller yang mendapat
/// nilai sama, jadi maximum global harus tepat `41 + total panggilan`.
fn soak_probe(config: &SoakConfig) -> Result<(), SoakError> {
    let probe = Arc::new(LinkProbe::new());
    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let probe = Arc::clone(&probe);
            let iters = config.iters;
            thread::spawn(move || {
                let mut prev = i64::MIN;
                let mut max = i64::MIN;
                let mut monotonic = true;
                for _ in 0..iters {
                    let v = probe.used();
                    if v <= prev {
                        monotonic = false;
                    }
                    prev = v;
                    max = max.max(v);
                }
                (t, monotonic, max)
            })
        })
        .collect();

    let mut global_max = i64::MIN;
    for handle in handles {
        if let Ok((t, monotonic, max)) = handle.join() {
            if !monotonic {
                return Err(SoakError::ProbeNotMonotonic { thread: t });
            }
            global_max = global_max.max(max);
        }
    }

    let duration = start.elapsed();
    let total_ops = config.threads as u64 * config.iters;
    let expected = 41 + total_ops as i64;

    println!("\n📊 Phase 2: LinkProbe::used contention");
    println!("   Operations: {}", total_ops);
    println!("   Duration:   {:.2}s", duration.as_secs_f64());
    println!(
        "   Throughput: {:.2} M ops/sec",
        total_ops as f64 / duration.as_secs_f64() / 1_000_000.0
    );

    if global_max != expected {
        return Err(SoakError::ProbeMax {
            expected,
            got: global_max,
        });
    }

    Ok(())
}

fn run_soak(config: SoakConfig) -> Result<(), SoakError> {
    println!("🔥 Counter Soak - {} threads x {} iters", config.threads, config.iters);
    println!("==========================================");

    soak_counter(&config)?;
    soak_probe(&config)?;

    Ok(())
}

fn parse_args() -> SoakConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SoakConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--threads" | "-t" => {
                if i + 1 < args.len() {
                    config.threads = args[i + 1].parse().unwrap_or(8);
                    i += 1;
                }
            }
            "--iters" | "-n" => {
                if i + 1 < args.len() {
                    config.iters = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--value" => {
                if i + 1 < args.len() {
                    config.value = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("Counter Soak - Multi-Thread Contention Driver\n");
                println!("Usage: counter_soak [OPTIONS]\n");
                println!("Options:");
                println!("  -t, --threads <N>   Worker threads (default: 8)");
                println!("  -n, --iters <N>     Iterations per thread (default: 1000000)");
                println!("      --value <V>     Delta per add (default: 1)");
                println!("  -v, --verbose       Per-thread timing");
                println!("  -h, --help          Show this help");
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn main() {
    let config = parse_args();

    if let Err(e) = run_soak(config) {
        eprintln!("❌ {}", e);
        process::exit(1);
    }

    println!("\n✅ SOAK PASSED - no lost updates");
}
