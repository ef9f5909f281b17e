//! Serde support for [`Sequence`].
//!
//! A sequence serializes as an array with holes rendered as `null`, the way
//! `JSON.stringify` renders a sparse array. Deserializing reads an array of
//! optional values and turns every `null` into a hole.
//!
//! The encoding is lossy for element types that serialize to `null` themselves,
//! such as `Option<T>`: a present `None` and a hole are both written as `null`,
//! and both read back as a hole. `JSON.stringify` loses the same distinction.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, SerializeSeq, Serializer};

use crate::sequence::Sequence;

impl<T: Serialize + Clone> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_seq(Some(self.len()))?;
        for (index, slot) in self.slots().enumerate() {
            match slot {
                None => out.serialize_element(&None::<T>)?,
                Some(element) => match element.ready() {
                    Some(value) => out.serialize_element(value)?,
                    None => {
                        return Err(S::Error::custom(format!(
                            "element {index} is still pending"
                        )));
                    }
                },
            }
        }
        out.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Option<T>>::deserialize(deserializer).map(Sequence::sparse)
    }
}
