//! Compress-then-Inflate Round-Trip
//!
//! Compress lewat raw symbol, inflate balik lewat flate2, bandingkan.
//! Verifikasi dua arah: symbol native ter-link DAN hasilnya benar.

use flate2::{Decompress, FlushDecompress, Status};

use super::zlib::{self, CompressError};

/// Hasil round-trip yang sukses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTripReport {
    pub payload_len: usize,
    pub compressed_len: usize,
}

/// Compress `payload` lalu inflate balik dan bandingkan byte-per-byte
///
/// Payload kosong valid - zlib menghasilkan stream 8 byte untuk input
/// kosong dan inflate mengembalikan 0 byte.
pub fn round_trip(payload: &[u8]) -> Result<RoundTripReport, CompressError> {
    let compressed = zlib::compress_to_bound(payload)?;

    // true = stream pakai zlib header, sama seperti compress() di atas
    let mut inflater = Decompress::new(true);
    let mut restored = vec![0u8; payload.len() + 64];

    let status = inflater
        .decompress(&compressed, &mut restored, FlushDecompress::Finish)
        .map_err(CompressError::Inflate)?;

    restored.truncate(inflater.total_out() as usize);

    if status != Status::StreamEnd || restored != payload {
        return Err(CompressError::Mismatch);
    }

    Ok(RoundTripReport {
        payload_len: payload.len(),
        compressed_len: compressed.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_one_byte() {
        let report = round_trip(&[0u8]).unwrap();

        assert_eq!(report.payload_len, 1);
        assert!(report.compressed_len > 0);
    }

    #[test]
    fn test_round_trip_empty_payload() {
        let report = round_trip(&[]).unwrap();
        assert_eq!(report.payload_len, 0);
    }

    #[test]
    fn test_round_trip_compressible_payload() {
        let payload = vec![7u8; 4096];
        let report = round_trip(&payload).unwrap();

        assert_eq!(report.payload_len, 4096);
        // 4KB byte yang sama harus menyusut jauh
        assert!(report.compressed_len < payload.len());
    }

    #[test]
    fn test_round_trip_incompressible_payload() {
        // Pseudo-random via LCG - tidak ada pola untuk deflate
        let mut state = 0x2545F4914F6CDD1Du64;
        let payload: Vec<u8> = (0..1024)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                (state >> 56) as u8
            })
            .collect();

        let report = round_trip(&payload).unwrap();
        assert_eq!(report.payload_len, 1024);
    }
}
