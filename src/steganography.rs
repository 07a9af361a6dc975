use crate::capacity;
use crate::error::StegoError;
use image::RgbImage;

// 嵌入与提取必须按完全相同的顺序遍历通道：逐行、逐像素、R-G-B。
// RgbImage 的底层缓冲区正是这一顺序的字节序列，因此两个函数都直接
// 在原始缓冲区上操作，顺序不可能发生分歧。

pub fn embed(grid: &RgbImage, bits: &[u8]) -> Result<RgbImage, StegoError> {
    capacity::validate(grid, bits.len())?;

    let mut doctored = grid.clone();
    for (channel, &bit) in doctored.iter_mut().zip(bits) {
        *channel = (*channel & 0xFE) | bit;
    }

    Ok(doctored)
}

pub fn extract(grid: &RgbImage, num_bits: usize) -> Result<Vec<u8>, StegoError> {
    let raw = grid.as_raw();
    if num_bits > raw.len() {
        return Err(StegoError::InsufficientData {
            requested: num_bits,
            available: raw.len(),
        });
    }

    Ok(raw[..num_bits].iter().map(|&channel| channel & 1).collect())
}
