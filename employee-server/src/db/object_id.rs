//! Record Identifier
//!
//! 12 字节标识符，对外表示为 24 位十六进制字符串：
//!
//! ```text
//! | 4 字节时间戳 (秒, BE) | 5 字节进程随机值 | 3 字节计数器 (BE) |
//! ```
//!
//! 进程随机值在首次生成时确定；计数器以随机值起步，逐次递增。

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Length of the external hex representation
pub const HEX_LEN: usize = 24;

const COUNTER_MASK: u32 = 0x00ff_ffff;

/// Identifier decode error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("Invalid ID format: {0:?}")]
    InvalidFormat(String),
}

/// Store identifier of an employee record
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        let timestamp = chrono::Utc::now().timestamp() as u32;
        Self::from_parts(timestamp, process_unique(), next_count())
    }

    /// All-zero identifier, treated as "no identifier"
    pub const fn zero() -> Self {
        Self([0; 12])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; 12]
    }

    /// Seconds since the Unix epoch at generation time
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Parse the 24-character hex form
    pub fn parse_hex(text: &str) -> Result<Self, IdError> {
        if text.len() != HEX_LEN {
            return Err(IdError::InvalidFormat(text.to_string()));
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(text, &mut bytes)
            .map_err(|_| IdError::InvalidFormat(text.to_string()))?;
        Ok(Self(bytes))
    }

    /// Lowercase 24-character hex form
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    fn from_parts(timestamp: u32, process: [u8; 5], counter: u32) -> Self {
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&timestamp.to_be_bytes());
        bytes[4..9].copy_from_slice(&process);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(bytes)
    }
}

fn process_unique() -> [u8; 5] {
    static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
    *PROCESS_UNIQUE.get_or_init(rand::random)
}

fn next_count() -> u32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    let counter = COUNTER
        .get_or_init(|| AtomicU32::new(rand::thread_rng().gen_range(0..=COUNTER_MASK)));
    counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK
}

impl FromStr for ObjectId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl Serialize for ObjectId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(d)?;
        Self::parse_hex(&text).map_err(serde::de::Error::custom)
    }
}
