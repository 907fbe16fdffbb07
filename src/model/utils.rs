use std::collections::HashMap;
use std::fmt::{Formatter, Result as FmtResult};
use std::hash::Hash;

use serde::de::{Deserialize, Deserializer, Error as DeError, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::prelude::*;
use crate::internal::prelude::*;

/// Checks whether a decoded payload object carries a field.
///
/// Gateways of different vintages signal optional capabilities through field
/// presence rather than through any single tag, and may put `null`, a number,
/// or a string where an object was expected. The check is total: anything that
/// is not an object containing `name` reports `false`.
#[must_use]
pub fn has_field(value: &Value, name: &str) -> bool {
    value.as_object().map_or(false, |map| map.contains_key(name))
}

pub fn deserialize_members<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> StdResult<HashMap<UserId, Member>, D::Error> {
    let vec: Vec<Member> = Deserialize::deserialize(deserializer)?;
    let mut members = HashMap::new();

    for member in vec {
        let user_id = member.user.id;

        members.insert(user_id, member);
    }

    Ok(members)
}

pub fn deserialize_guild_channels<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> StdResult<HashMap<ChannelId, GuildChannel>, D::Error> {
    let vec: Vec<GuildChannel> = Deserialize::deserialize(deserializer)?;
    let mut map = HashMap::new();

    for channel in vec {
        map.insert(channel.id, channel);
    }

    Ok(map)
}

pub fn serialize_gen_map<K: Eq + Hash, S: Serializer, V: Serialize>(
    map: &HashMap<K, V>,
    serializer: S,
) -> StdResult<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(map.len()))?;

    for value in map.values() {
        seq.serialize_element(&value)?;
    }

    seq.end()
}

pub fn deserialize_u16<'de, D: Deserializer<'de>>(deserializer: D) -> StdResult<u16, D::Error> {
    deserializer.deserialize_any(U16Visitor)
}

macro_rules! num_visitors {
    ($($visitor:ident: $type:ty),*) => {
        $(
            #[derive(Debug)]
            pub struct $visitor;

            impl<'de> Visitor<'de> for $visitor {
                type Value = $type;

                fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
                    formatter.write_str("identifier")
                }

                fn visit_str<E: DeError>(self, v: &str) -> StdResult<Self::Value, E> {
                    v.parse::<$type>().map_err(|_| {
                        let mut s = String::with_capacity(32);
                        s.push_str("Unknown ");
                        s.push_str(stringify!($type));
                        s.push_str(" value: ");
                        s.push_str(v);

                        DeError::custom(s)
                    })
                }

                fn visit_i64<E: DeError>(self, v: i64) -> StdResult<Self::Value, E> {
                    Ok(v as $type)
                }

                fn visit_u64<E: DeError>(self, v: u64) -> StdResult<Self::Value, E> {
                    Ok(v as $type)
                }
            }
        )*
    }
}

num_visitors!(U16Visitor: u16, U64Visitor: u64);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::has_field;

    #[test]
    fn has_field_on_objects() {
        let value = json!({"token": "abc", "member": {"nick": null}});
        assert!(has_field(&value, "token"));
        assert!(has_field(&value, "member"));
        assert!(!has_field(&value, "user"));
    }

    #[test]
    fn has_field_on_non_objects() {
        assert!(!has_field(&json!(null), "anything"));
        assert!(!has_field(&json!(3), "anything"));
        assert!(!has_field(&json!("type"), "type"));
        assert!(!has_field(&json!(["type"]), "type"));
    }
}
