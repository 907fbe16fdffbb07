/// Implements the wire vocabulary of a numeric enum.
///
/// The enum itself is declared separately, `#[repr(u8)]` with explicit
/// discriminants, so reserved codes stay visible as holes in the numbering.
/// The macro generates serialization as a bare integer, deserialization that
/// rejects every code not listed in the invocation, and the code/name lookup
/// helpers. Variants left out of the invocation (`Unknown`, reserved holes)
/// can therefore never enter or leave through serde, and never obtain a name.
macro_rules! enum_number {
    ($name:ident { $($variant:ident),* $(,)? }) => {
        impl $name {
            /// The wire code of this variant.
            #[must_use]
            pub fn num(self) -> u64 {
                self as u64
            }

            /// The stable name of this variant, or `None` for variants that
            /// only exist to absorb unrecognized codes.
            #[must_use]
            pub fn name(self) -> Option<&'static str> {
                $(
                    if self == $name::$variant {
                        return Some(stringify!($variant));
                    }
                )*

                None
            }

            /// Looks a variant up by its stable name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                $(
                    if name == stringify!($variant) {
                        return Some($name::$variant);
                    }
                )*

                None
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                // Serialize the enum as a u64.
                serializer.serialize_u64(*self as u64)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct Visitor;

                impl<'de> ::serde::de::Visitor<'de> for Visitor {
                    type Value = $name;

                    fn expecting(
                        &self,
                        formatter: &mut ::std::fmt::Formatter<'_>,
                    ) -> ::std::fmt::Result {
                        formatter.write_str("positive integer")
                    }

                    fn visit_u64<E>(self, value: u64) -> ::std::result::Result<$name, E>
                    where
                        E: ::serde::de::Error,
                    {
                        $(
                            if value == $name::$variant as u64 {
                                return Ok($name::$variant);
                            }
                        )*

                        Err(E::custom(format!(
                            "unknown {} value: {}",
                            stringify!($name),
                            value
                        )))
                    }
                }

                // Deserialize the enum from a u64.
                deserializer.deserialize_u64(Visitor)
            }
        }
    };
}
