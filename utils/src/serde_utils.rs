//! Serde serialization for `arkworks-rs` objects as they don't implement serde themselves.
//! Objects are written as their compressed canonical bytes.

use alloc::vec::Vec;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// Use as `#[serde_as(as = "ArkObjectBytes")]` on fields of arkworks types such as field elements
/// and curve points, or `#[serde_as(as = "Vec<ArkObjectBytes>")]` on vectors of them.
pub struct ArkObjectBytes;

impl<T: CanonicalSerialize> SerializeAs<T> for ArkObjectBytes {
    fn serialize_as<S: Serializer>(x: &T, serializer: S) -> Result<S::Ok, S::Error> {
        let mut bytes = Vec::with_capacity(x.compressed_size());
        x.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;
        Serialize::serialize(&bytes, serializer)
    }
}

impl<'de, T: CanonicalDeserialize> DeserializeAs<'de, T> for ArkObjectBytes {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
        T::deserialize_compressed(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}
