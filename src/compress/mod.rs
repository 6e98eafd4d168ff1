//! Compression Layer: System zlib sebagai External Collaborator
//!
//! Prinsip desain:
//! - Black Box: zlib dipercaya, yang diverifikasi hanya status code-nya
//! - Raw Symbols: version/bound/compress dipanggil langsung dari libz,
//!   supaya binary hasil link benar-benar me-resolve symbol native
//! - Round-Trip: hasil compress di-inflate balik dan dibandingkan

mod round_trip;
mod zlib;

pub use round_trip::{round_trip, RoundTripReport};
pub use zlib::{compress_bound, compress_to_bound, version, CompressError};
