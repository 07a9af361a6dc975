use crate::constants::MIN_BLOB_SIZE;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StegoError {
    #[error("the message requires {required} bits but the image can only hold {available}")]
    CapacityExceeded { required: usize, available: usize },

    #[error("requested {requested} bits but the image only yields {available}")]
    InsufficientData { requested: usize, available: usize },

    #[error("authentication failed: wrong password or tampered data")]
    AuthenticationFailure,

    #[error("encrypted payload is too short: {len} bytes, expected at least {} bytes", MIN_BLOB_SIZE)]
    MalformedInput { len: usize },

    #[error("decrypted payload is not valid UTF-8")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("bit sequence length {0} is not a multiple of 8")]
    InvalidLength(usize),

    #[error("value {0} does not fit in a 32-bit length header")]
    OutOfRange(usize),

    #[error("the system entropy source failed")]
    EntropyFailure,

    #[error("the cipher backend rejected the payload")]
    EncryptionFailure,
}
