//! Serialize byte strings as lowercase hex.

use serde::{Serialize, Serializer};

pub fn serialize<T: AsRef<[u8]>, S: Serializer>(bytes: &T, s: S) -> Result<S::Ok, S::Error> {
    hex::encode(bytes.as_ref()).serialize(s)
}
