//! A set of utilities to help with common use cases that are not required to
//! fully use the library.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::internal::prelude::*;

/// Converts a HashMap into a final [`serde_json::Map`] representation.
pub fn hashmap_to_json_map<H, T>(map: HashMap<T, Value, H>) -> JsonMap
where
    H: BuildHasher,
    T: Eq + std::hash::Hash + ToString,
{
    map.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Validates that a token is likely in a valid format.
///
/// This performs the following checks on a given token:
///
/// - At least one character long;
/// - Contains 3 parts (split by the period char `.`);
/// - The second part of the token is at least 6 characters long.
///
/// Note that a token prefixed with `"Bot "` will have the prefix stripped
/// before parsing.
///
/// # Errors
///
/// Returns a [`ClientError::InvalidToken`] when one of the above checks fail.
/// The type of failure is not specified.
///
/// [`ClientError::InvalidToken`]: crate::client::ClientError::InvalidToken
pub fn validate_token(token: impl AsRef<str>) -> Result<()> {
    let token = token.as_ref().trim().trim_start_matches("Bot ");

    if token.is_empty() {
        return Err(Error::Client(crate::client::ClientError::InvalidToken));
    }

    let parts: Vec<&str> = token.split('.').collect();

    if parts.len() == 3 && parts[1].len() >= 6 {
        Ok(())
    } else {
        Err(Error::Client(crate::client::ClientError::InvalidToken))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{hashmap_to_json_map, validate_token};
    use crate::internal::prelude::*;

    #[test]
    fn valid_token_shapes() {
        assert!(validate_token("MTAxoDM3ODkzNzE1NTA3MzA2NB.GdnvnN.WzVLUhkgEe7k4cmFyXLT4wpzOWX7V8").is_ok());
        assert!(validate_token("Bot MTAxoDM3ODkzNzE1NTA3MzA2NB.GdnvnN.WzVLUhkgEe7k4cmFyXLT").is_ok());
    }

    #[test]
    fn invalid_token_shapes() {
        assert!(validate_token("").is_err());
        assert!(validate_token("no-periods-at-all").is_err());
        assert!(validate_token("one.two").is_err());
        assert!(validate_token("a.short.c").is_err());
    }

    #[test]
    fn map_conversion_preserves_entries() {
        let mut map = HashMap::new();
        map.insert("content", Value::String("hi".to_string()));
        map.insert("tts", Value::Bool(false));

        let json = hashmap_to_json_map(map);
        assert_eq!(json.get("content"), Some(&Value::String("hi".to_string())));
        assert_eq!(json.get("tts"), Some(&Value::Bool(false)));
    }
}
