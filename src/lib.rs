//! # shadow_pixel 库
//!
//! 本库包含加密 LSB 隐写工具的核心逻辑：
//! 比特序列编解码、基于密码的认证加密，以及像素通道的嵌入与提取。

// 声明库包含的所有模块。

pub mod bits;
pub mod capacity;
pub mod cli;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod handler;
pub mod pipeline;
pub mod steganography;

pub use error::StegoError;
