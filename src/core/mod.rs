//! Core module: Lock-Free Atomic Counters
//!
//! Prinsip desain:
//! - Lock-Free: Hanya atomic operations, tidak ada Mutex/RwLock
//! - Caller-Owned: Tidak ada global state, counter dibuat dan dimiliki caller
//! - No-Allocation: Counter hidup inline, tidak ada alokasi sama sekali

mod atomic_counter;
mod link_probe;

pub use atomic_counter::AtomicCounter;
pub use link_probe::LinkProbe;

pub(crate) use atomic_counter::CacheLinePadded;
