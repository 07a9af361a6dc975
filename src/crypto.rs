use crate::constants::{KEY_SIZE, MIN_BLOB_SIZE, NONCE_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
use crate::error::StegoError;
use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, KeyInit},
};
use pbkdf2::pbkdf2_hmac;
use rand::TryRngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

/// 密码学随机源。加密器通过显式注入的随机源取得盐值与 nonce，
/// 测试中可替换为确定性实现以获得可复现的输出。
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), StegoError>;
}

/// 默认随机源：操作系统提供的 CSPRNG。
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), StegoError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|_| StegoError::EntropyFailure)
    }
}

pub fn derive_key(password: &str, salt: &[u8; SALT_SIZE]) -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    key
}

pub struct PayloadCipher<R: EntropySource = OsEntropy> {
    entropy: R,
}

impl PayloadCipher<OsEntropy> {
    pub fn new() -> Self {
        Self { entropy: OsEntropy }
    }
}

impl Default for PayloadCipher<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EntropySource> PayloadCipher<R> {
    pub fn with_entropy(entropy: R) -> Self {
        Self { entropy }
    }

    pub fn encrypt(&mut self, plaintext: &str, password: &str) -> Result<Vec<u8>, StegoError> {
        let mut salt = [0u8; SALT_SIZE];
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        self.entropy.fill(&mut salt)?;
        self.entropy.fill(&mut nonce_bytes)?;

        let key = derive_key(password, &salt);
        let aead = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

        let ciphertext = aead
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
            .map_err(|_| StegoError::EncryptionFailure)?;

        let mut blob = Vec::with_capacity(MIN_BLOB_SIZE + ciphertext.len());
        blob.extend_from_slice(&salt);
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);

        Ok(blob)
    }

    pub fn decrypt(&self, blob: &[u8], password: &str) -> Result<String, StegoError> {
        if blob.len() < MIN_BLOB_SIZE {
            return Err(StegoError::MalformedInput { len: blob.len() });
        }

        let (salt, rest) = blob.split_at(SALT_SIZE);
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

        let mut salt_array = [0u8; SALT_SIZE];
        salt_array.copy_from_slice(salt);
        let key = derive_key(password, &salt_array);
        let aead = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

        let plaintext = aead
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| StegoError::AuthenticationFailure)?;

        Ok(String::from_utf8(plaintext)?)
    }
}
