//! Raw zlib surface - tiga symbol yang harus ter-resolve saat link
//!
//! `zlibVersion`, `compressBound`, dan `compress` dipanggil langsung via
//! libz-sys. Kalau linker salah menyusun rantai dependency, ketiga call
//! ini yang pertama gagal.

use std::error;
use std::ffi::CStr;
use std::fmt;
use std::os::raw::c_int;

use libz_sys::{uLong, uLongf, Z_BUF_ERROR, Z_MEM_ERROR, Z_OK, Z_STREAM_ERROR};

/// Error dari compression layer
///
/// Dua sisi round-trip plus pembanding akhir. Semua fatal untuk driver -
/// tidak ada retry.
#[derive(Debug)]
pub enum CompressError {
    /// `compress()` return status selain `Z_OK`
    Deflate(c_int),
    /// Inflate balik gagal di sisi flate2
    Inflate(flate2::DecompressError),
    /// Inflate sukses tapi hasilnya tidak sama dengan payload awal
    Mismatch,
}

impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deflate(status) => {
                write!(f, "zlib compress failed: {}", status_name(*status))
            }
            Self::Inflate(e) => write!(f, "zlib inflate failed: {}", e),
            Self::Mismatch => write!(f, "round-trip output does not match payload"),
        }
    }
}

impl error::Error for CompressError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Inflate(e) => Some(e),
            _ => None,
        }
    }
}

/// Nama status code zlib untuk diagnostic message
fn status_name(status: c_int) -> &'static str {
    match status {
        Z_BUF_ERROR => "Z_BUF_ERROR (output buffer too small)",
        Z_MEM_ERROR => "Z_MEM_ERROR (out of memory)",
        Z_STREAM_ERROR => "Z_STREAM_ERROR (invalid compression level)",
        _ => "unknown status",
    }
}

/// Version string dari libz yang ter-link
#[inline]
pub fn version() -> &'static str {
    // SAFETY: zlibVersion return pointer ke static string di dalam libz,
    // valid selama process hidup
    let raw = unsafe { CStr::from_ptr(libz_sys::zlibVersion()) };
    raw.to_str().unwrap_or("unknown")
}

/// Worst-case compressed size untuk input sepanjang `source_len`
#[inline]
pub fn compress_bound(source_len: usize) -> usize {
    // SAFETY: compressBound murni aritmatika, tidak menyentuh memory
    unsafe { libz_sys::compressBound(source_len as uLong) as usize }
}

/// One-shot compress ke buffer berukuran `compress_bound(src.len())`
///
/// Return compressed bytes, atau status zlib non-`Z_OK` sebagai error.
pub fn compress_to_bound(src: &[u8]) -> Result<Vec<u8>, CompressError> {
    let bound = compress_bound(src.len());
    let mut dest = vec![0u8; bound];
    let mut dest_len = bound as uLongf;

    // SAFETY: dest punya kapasitas penuh compressBound dan dest_len
    // menyampaikan kapasitas itu; kedua pointer valid selama call
    let status = unsafe {
        libz_sys::compress(
            dest.as_mut_ptr(),
            &mut dest_len,
            src.as_ptr(),
            src.len() as uLong,
        )
    };

    if status != Z_OK {
        return Err(CompressError::Deflate(status));
    }

    dest.truncate(dest_len as usize);
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_non_empty() {
        let v = version();
        assert!(!v.is_empty());
        // Format zlib selalu diawali digit major version
        assert!(v.starts_with(|c: char| c.is_ascii_digit()));
    }

    #[test]
    fn test_bound_covers_input() {
        for len in [0usize, 1, 64, 4096] {
            assert!(compress_bound(len) >= len);
        }
    }

    #[test]
    fn test_compress_one_byte() {
        let compressed = compress_to_bound(&[0u8]).unwrap();
        assert!(!compressed.is_empty());
    }

    #[test]
    fn test_compress_is_deterministic() {
        let payload = b"linkprobe linkprobe linkprobe";
        let a = compress_to_bound(payload).unwrap();
        let b = compress_to_bound(payload).unwrap();
        assert_eq!(a, b);
    }
}
