use crate::bits;
use crate::capacity;
use crate::constants::HEADER_BITS;
use crate::crypto::{EntropySource, PayloadCipher};
use crate::error::StegoError;
use crate::steganography;
use image::RgbImage;

pub fn hide<R: EntropySource>(
    cipher: &mut PayloadCipher<R>,
    grid: &RgbImage,
    plaintext: &str,
    password: &str,
) -> Result<RgbImage, StegoError> {
    let blob = cipher.encrypt(plaintext, password)?;
    let payload_bits = bits::bytes_to_bits(&blob);

    let mut full = bits::int_to_bits(payload_bits.len())?;
    full.extend_from_slice(&payload_bits);

    capacity::validate(grid, full.len())?;
    steganography::embed(grid, &full)
}

pub fn reveal<R: EntropySource>(
    cipher: &PayloadCipher<R>,
    grid: &RgbImage,
    password: &str,
) -> Result<String, StegoError> {
    let header = steganography::extract(grid, HEADER_BITS)?;
    let message_bits = bits::bits_to_int(&header) as usize;

    // 头部可能已损坏或被伪造，先用图像容量约束其声明的长度，
    // 再进行第二次提取，避免按攻击者给定的长度分配内存。
    let available = capacity::capacity(grid);
    if message_bits > available - HEADER_BITS {
        return Err(StegoError::InsufficientData {
            requested: HEADER_BITS + message_bits,
            available,
        });
    }

    let full = steganography::extract(grid, HEADER_BITS + message_bits)?;
    let blob = bits::bits_to_bytes(&full[HEADER_BITS..])?;

    cipher.decrypt(&blob, password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn noisy_grid(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            let seed = (x * 13 + y * 29) as u8;
            Rgb([seed, seed.wrapping_add(85), seed.wrapping_mul(3)])
        })
    }

    #[test]
    fn test_hide_reveal_roundtrip() {
        let grid = noisy_grid(50, 50);
        let mut cipher = PayloadCipher::new();

        let doctored = hide(&mut cipher, &grid, "hello", "password").unwrap();
        assert_eq!(reveal(&cipher, &doctored, "password").unwrap(), "hello");
    }

    #[test]
    fn test_hide_reveal_roundtrip_non_ascii() {
        let grid = noisy_grid(60, 60);
        let mut cipher = PayloadCipher::new();
        let secret = "秘密のメッセージ — прывітанне";

        let doctored = hide(&mut cipher, &grid, secret, "密码").unwrap();
        assert_eq!(reveal(&cipher, &doctored, "密码").unwrap(), secret);
    }

    #[test]
    fn test_capacity_exceeded_on_small_image() {
        // "hello" 加密后为 16+12+5+16=49 字节，加上 32 bit 头部共需
        // 424 bits，而 10x10 图像只有 300 bits 容量
        let grid = noisy_grid(10, 10);
        let mut cipher = PayloadCipher::new();

        let result = hide(&mut cipher, &grid, "hello", "password");
        assert!(matches!(
            result,
            Err(StegoError::CapacityExceeded {
                required: 424,
                available: 300
            })
        ));
    }

    #[test]
    fn test_capacity_boundary() {
        // "hello" 共需 424 bits：142x1 (426 bits) 是能容纳它的最小
        // 单行图像，141x1 (423 bits) 则差一个像素
        let mut cipher = PayloadCipher::new();

        let doctored = hide(&mut cipher, &noisy_grid(142, 1), "hello", "password").unwrap();
        assert_eq!(reveal(&cipher, &doctored, "password").unwrap(), "hello");

        assert!(matches!(
            hide(&mut cipher, &noisy_grid(141, 1), "hello", "password"),
            Err(StegoError::CapacityExceeded {
                required: 424,
                available: 423
            })
        ));
    }

    #[test]
    fn test_wrong_password() {
        let grid = noisy_grid(50, 50);
        let mut cipher = PayloadCipher::new();

        let doctored = hide(&mut cipher, &grid, "hello", "right").unwrap();
        assert!(matches!(
            reveal(&cipher, &doctored, "wrong"),
            Err(StegoError::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_single_flipped_payload_bit_detected() {
        let grid = noisy_grid(50, 50);
        let mut cipher = PayloadCipher::new();

        let mut doctored = hide(&mut cipher, &grid, "hello", "password").unwrap();

        // 翻转载荷区域内 (头部之后) 某个通道的最低有效位
        let raw: &mut [u8] = &mut doctored;
        raw[100] ^= 1;

        assert!(matches!(
            reveal(&cipher, &doctored, "password"),
            Err(StegoError::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_forged_header_rejected_before_allocation() {
        // 头部声明 u32::MAX bits，远超图像容量
        let header = bits::int_to_bits(u32::MAX as usize).unwrap();
        let grid = steganography::embed(&noisy_grid(20, 20), &header).unwrap();
        let cipher = PayloadCipher::new();

        assert!(matches!(
            reveal(&cipher, &grid, "password"),
            Err(StegoError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let grid = noisy_grid(50, 50);
        let mut cipher = PayloadCipher::new();

        let doctored = hide(&mut cipher, &grid, "again and again", "password").unwrap();
        assert_eq!(
            reveal(&cipher, &doctored, "password").unwrap(),
            reveal(&cipher, &doctored, "password").unwrap()
        );
    }

    #[test]
    fn test_hide_leaves_input_grid_untouched() {
        let grid = noisy_grid(50, 50);
        let snapshot = grid.clone();
        let mut cipher = PayloadCipher::new();

        hide(&mut cipher, &grid, "hello", "password").unwrap();
        assert_eq!(grid, snapshot);
    }
}
