use core::{cmp, fmt};

use fwint_internals::bw;
use serde::{
    de,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{SerializeStruct, SerializeTuple},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::FixedUint;

/// A `serde_support` impl
impl Serialize for FixedUint {
    /// Serializes `self` in a platform independent way. In human readable
    /// form, it serializes into a struct named "FixedUint" with two fields
    /// "bw" and "bits". "bw" is the bitwidth in decimal, and "bits" is the
    /// hexadecimal string produced by `self.to_string_radix(16)`.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "FixedUint".
    /// use fwint_core::{bw, FixedUint};
    /// use ron::to_string;
    ///
    /// let x = FixedUint::from_str_radix("FEDCBA9876543210", 16, bw(100)).unwrap();
    /// assert_eq!(
    ///     to_string(&x).unwrap(),
    ///     "(bw:100,bits:\"FEDCBA9876543210\")"
    /// );
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // the bitwidth bounds the base, hexadecimal formatting cannot fail
        let str_buf: &str = &self.to_string_radix(16).unwrap();
        if serializer.is_human_readable() {
            let mut s = serializer.serialize_struct("FixedUint", 2)?;
            s.serialize_field("bw", &self.bw())?;
            s.serialize_field("bits", str_buf)?;
            s.end()
        } else {
            let mut s = serializer.serialize_tuple(2)?;
            s.serialize_element(&self.bw())?;
            s.serialize_element(str_buf)?;
            s.end()
        }
    }
}

const FIELDS: &[&str] = &["bw", "bits"];

/// Helper for the deserialization impl
enum Field {
    Bw,
    Bits,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("`bw` or `bits`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Field, E>
            where
                E: de::Error,
            {
                match value {
                    "bw" => Ok(Field::Bw),
                    "bits" => Ok(Field::Bits),
                    _ => Err(de::Error::unknown_field(value, FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

/// Parses the hexadecimal significand at a width generous enough to hold it,
/// then resizes down to the target width so that values that do not fit are
/// detected instead of silently truncated.
fn from_fields<E: de::Error>(w: usize, bits: &str) -> Result<FixedUint, E> {
    if w == 0 {
        return Err(de::Error::custom("`bw` field should be nonzero"))
    }
    let tmp_w = bw(cmp::max(1, bits.len().saturating_mul(4)));
    let tmp = match FixedUint::from_str_radix(bits, 16, tmp_w) {
        Ok(tmp) => tmp,
        Err(e) => return Err(de::Error::custom(e)),
    };
    let (res, oflow) = tmp.zero_resize(bw(w));
    if oflow {
        return Err(de::Error::custom("`bits` does not fit in `bw` bits"))
    }
    Ok(res)
}

struct FixedUintVisitor;

impl<'de> Visitor<'de> for FixedUintVisitor {
    type Value = FixedUint;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "struct FixedUint consisting of a decimal bitwidth \"bw\" and a hexadecimal \
             unsigned integer \"bits\"",
        )
    }

    fn visit_map<V>(self, mut map: V) -> Result<FixedUint, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut w: Option<usize> = None;
        let mut bits: Option<&str> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Bw => {
                    if w.is_some() {
                        return Err(de::Error::duplicate_field("bw"))
                    }
                    w = Some(map.next_value()?);
                }
                Field::Bits => {
                    if bits.is_some() {
                        return Err(de::Error::duplicate_field("bits"))
                    }
                    bits = Some(map.next_value()?);
                }
            }
        }
        let w = w.ok_or_else(|| de::Error::missing_field("bw"))?;
        let bits = bits.ok_or_else(|| de::Error::missing_field("bits"))?;
        from_fields(w, bits)
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<FixedUint, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let w: usize = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let bits: &str = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        from_fields(w, bits)
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for FixedUint {
    /// Deserializes `self` in a platform independent way.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "FixedUint".
    /// use fwint_core::{bw, FixedUint};
    /// use ron::from_str;
    ///
    /// let x0 = FixedUint::from_str_radix("FEDCBA9876543210", 16, bw(100)).unwrap();
    /// let x1: FixedUint = from_str("(bw:100,bits:\"FEDCBA9876543210\")").unwrap();
    /// assert_eq!(x0, x1);
    /// ```
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("FixedUint", FIELDS, FixedUintVisitor)
    }
}
