//! Marshalling for buffers that cross an isolation boundary by value
//!
//! Some execution boundaries cannot safely expose a zero-copy view: the two
//! sides do not share an address space, or the marshalling layer only
//! supports pass-by-value. Data then arrives as a little-endian byte image
//! of an `f64` array, and the copy into [`SampleBuffer`] is the price of
//! isolation. The borrowed entry point exists for callers that *can* share
//! memory; benchmarks quantify the difference.

use crate::buffer::SampleBuffer;
use log::debug;
use sqsum_core::{Error, Result};

const F64_WIDTH: usize = std::mem::size_of::<f64>();

/// Decode a little-endian byte image of an `f64` array into owned storage
///
/// The returned buffer is fully decoupled from `bytes`: the caller may
/// mutate or free the source immediately after this returns.
///
/// Returns [`Error::InvalidInput`] if the byte length is not a whole number
/// of 8-byte elements. Misaligned images are handled; alignment only selects
/// the decode path.
pub fn decode_f64_le(bytes: &[u8]) -> Result<SampleBuffer<f64>> {
    if bytes.len() % F64_WIDTH != 0 {
        return Err(Error::ragged_bytes(bytes.len(), F64_WIDTH));
    }

    #[cfg(target_endian = "little")]
    {
        if let Ok(words) = bytemuck::try_cast_slice::<u8, f64>(bytes) {
            return Ok(SampleBuffer::from_slice(words));
        }
        debug!(
            "foreign buffer misaligned for direct cast, decoding {} bytes element-wise",
            bytes.len()
        );
    }

    let values: Vec<f64> = bytes
        .chunks_exact(F64_WIDTH)
        .map(|chunk| {
            let mut raw = [0u8; F64_WIDTH];
            raw.copy_from_slice(chunk);
            f64::from_le_bytes(raw)
        })
        .collect();
    Ok(SampleBuffer::from_vec(values))
}

/// Encode an `f64` slice as the little-endian byte image `decode_f64_le`
/// accepts
pub fn encode_f64_le(values: &[f64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * F64_WIDTH);
    for v in values {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}
