use crate::constants::HEADER_BITS;
use crate::error::StegoError;

pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1))
        .collect()
}

pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>, StegoError> {
    if !bits.len().is_multiple_of(8) {
        return Err(StegoError::InvalidLength(bits.len()));
    }

    Ok(bits
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
        .collect())
}

pub fn int_to_bits(value: usize) -> Result<Vec<u8>, StegoError> {
    let value = u32::try_from(value).map_err(|_| StegoError::OutOfRange(value))?;

    Ok((0..HEADER_BITS)
        .rev()
        .map(|i| ((value >> i) & 1) as u8)
        .collect())
}

pub fn bits_to_int(bits: &[u8]) -> u32 {
    bits.iter()
        .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit))
}
