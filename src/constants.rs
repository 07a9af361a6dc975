/// PBKDF2 密钥派生所用的盐值长度 (字节)。
/// 每次加密都会重新生成随机盐值，即使密码相同也能派生出不同的密钥。
pub const SALT_SIZE: usize = 16;

/// AES-256-GCM 的 nonce 长度 (字节)，即 96 bits。
/// 同一密钥下 nonce 绝不能重复，否则 AEAD 的安全性将被破坏。
pub const NONCE_SIZE: usize = 12;

/// AES-256 的密钥长度 (字节)，即 256 bits。
pub const KEY_SIZE: usize = 32;

/// PBKDF2-HMAC-SHA256 的迭代次数。
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// 加密数据的最小长度 (字节)：盐值 + nonce。
/// 短于该长度的数据不可能是合法的密文。
pub const MIN_BLOB_SIZE: usize = SALT_SIZE + NONCE_SIZE;

/// 用于记录载荷比特数的长度头部所占的比特数。
/// 头部按大端序写入，读取端依赖该值界定载荷范围。
pub const HEADER_BITS: usize = 32;

/// 每个像素可用的通道数。仅使用 R、G、B 三个通道，
/// 透明度等其他通道不参与容量计算与嵌入。
pub const CHANNELS_PER_PIXEL: usize = 3;
