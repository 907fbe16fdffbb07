//! A set of constants used by the library.

use std::ops::RangeInclusive;

/// The UserAgent sent along with every request.
pub const USER_AGENT: &str = concat!(
    "DiscordBot (https://github.com/kingfisher-rs/kingfisher, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// The API version requests are issued against when none is configured.
pub const DEFAULT_API_VERSION: u8 = 9;

/// The API versions that carry the interaction endpoints.
///
/// Versions below this range predate interactions entirely; configuring one
/// is rejected at client construction.
pub const SUPPORTED_API_VERSIONS: RangeInclusive<u8> = 8..=9;

/// The maximum unicode code points allowed within a message by Discord.
pub const MESSAGE_CODE_LIMIT: usize = 2000;

/// The maximum characters an embed's text fields may total.
pub const EMBED_MAX_LENGTH: usize = 6000;

/// Builds the REST base URL for an API version.
#[must_use]
pub fn api_base(version: u8) -> String {
    format!("https://discord.com/api/v{}", version)
}
