//! A cache of the guild state the owning application has shared.
//!
//! The crate never fetches guild state over REST. The owning application
//! already tracks guilds through its own gateway connection and mirrors
//! whatever it wants guild-membership checks to see into this cache; absence
//! here only ever means "not shared", not "does not exist".
//!
//! All maps use [`DashMap`], so updates and lookups take `&self` and callers
//! share the cache behind an [`Arc`](std::sync::Arc) without extra locking.

use dashmap::DashMap;

use crate::model::channel::GuildChannel;
use crate::model::guild::{Guild, Member};
use crate::model::id::{ChannelId, GuildId, UserId};
use crate::model::user::User;

/// An event that can write itself into the [`Cache`].
pub(crate) trait CacheUpdate {
    /// The cached value replaced by the update, if any.
    type Output;

    fn update(&mut self, cache: &Cache) -> Option<Self::Output>;
}

/// Guild state shared by the owning application.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Cache {
    pub(crate) guilds: DashMap<GuildId, Guild>,
    pub(crate) channels: DashMap<ChannelId, GuildChannel>,
    pub(crate) users: DashMap<UserId, User>,
}

impl Cache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a guild, along with its channels and the users behind its
    /// members. Replaces any previous entry for the same Id.
    pub fn insert_guild(&self, guild: Guild) -> Option<Guild> {
        for channel in guild.channels.values() {
            self.channels.insert(channel.id, channel.clone());
        }

        for member in guild.members.values() {
            self.users.insert(member.user.id, member.user.clone());
        }

        self.guilds.insert(guild.id, guild)
    }

    /// Removes a guild and its channels.
    pub fn remove_guild(&self, guild_id: GuildId) -> Option<Guild> {
        let guild = self.guilds.remove(&guild_id).map(|(_, guild)| guild)?;

        for id in guild.channels.keys() {
            self.channels.remove(id);
        }

        Some(guild)
    }

    /// Stores a channel. Replaces any previous entry for the same Id.
    pub fn insert_channel(&self, channel: GuildChannel) -> Option<GuildChannel> {
        if let Some(mut guild) = self.guilds.get_mut(&channel.guild_id) {
            guild.channels.insert(channel.id, channel.clone());
        }

        self.channels.insert(channel.id, channel)
    }

    /// Stores a user. Replaces any previous entry for the same Id.
    pub fn insert_user(&self, user: User) -> Option<User> {
        self.users.insert(user.id, user)
    }

    /// Stores a membership record into its guild, if the guild is cached.
    pub fn insert_member(&self, guild_id: GuildId, member: Member) -> Option<Member> {
        let mut guild = self.guilds.get_mut(&guild_id)?;

        guild.members.insert(member.user.id, member)
    }

    /// Gets a guild out of the cache.
    #[must_use]
    pub fn guild(&self, guild_id: GuildId) -> Option<Guild> {
        self.guilds.get(&guild_id).map(|guild| guild.clone())
    }

    /// Gets a channel out of the cache.
    #[must_use]
    pub fn channel(&self, channel_id: ChannelId) -> Option<GuildChannel> {
        self.channels.get(&channel_id).map(|channel| channel.clone())
    }

    /// Gets a user out of the cache.
    #[must_use]
    pub fn user(&self, user_id: UserId) -> Option<User> {
        self.users.get(&user_id).map(|user| user.clone())
    }

    /// Gets a membership record out of the cache.
    #[must_use]
    pub fn member(&self, guild_id: GuildId, user_id: UserId) -> Option<Member> {
        self.guilds.get(&guild_id).and_then(|guild| guild.members.get(&user_id).cloned())
    }

    /// The number of cached guilds.
    #[must_use]
    pub fn guild_count(&self) -> usize {
        self.guilds.len()
    }

    pub(crate) fn update<E: CacheUpdate>(&self, e: &mut E) -> Option<E::Output> {
        e.update(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::Cache;
    use crate::model::guild::{Guild, Member};
    use crate::model::id::{GuildId, UserId};
    use crate::model::user::User;

    fn user(id: u64, name: &str) -> User {
        serde_json::from_value(json!({
            "id": id.to_string(),
            "avatar": null,
            "discriminator": "0001",
            "username": name,
        }))
        .unwrap()
    }

    fn guild(id: u64) -> Guild {
        Guild {
            id: GuildId(id),
            name: "den".to_string(),
            owner_id: UserId(1),
            unavailable: false,
            channels: HashMap::new(),
            members: HashMap::new(),
        }
    }

    fn member(guild_id: u64, user: User) -> Member {
        serde_json::from_value::<Member>(json!({
            "guild_id": guild_id.to_string(),
            "roles": [],
            "user": serde_json::to_value(user).unwrap(),
        }))
        .unwrap()
    }

    #[test]
    fn members_only_attach_to_cached_guilds() {
        let cache = Cache::new();
        let invoker = user(7, "invoker");

        assert!(cache.insert_member(GuildId(3), member(3, invoker.clone())).is_none());
        assert!(cache.member(GuildId(3), invoker.id).is_none());

        cache.insert_guild(guild(3));
        cache.insert_member(GuildId(3), member(3, invoker.clone()));
        assert_eq!(cache.member(GuildId(3), invoker.id).unwrap().user.id, invoker.id);
    }

    #[test]
    fn removing_a_guild_drops_its_channels() {
        let cache = Cache::new();
        let mut den = guild(3);
        let channel = serde_json::from_value(json!({
            "id": "5",
            "guild_id": "3",
            "name": "general",
            "type": 0,
            "position": 0,
        }))
        .unwrap();
        den.channels.insert(crate::model::id::ChannelId(5), channel);

        cache.insert_guild(den);
        assert!(cache.channel(crate::model::id::ChannelId(5)).is_some());

        cache.remove_guild(GuildId(3));
        assert!(cache.channel(crate::model::id::ChannelId(5)).is_none());
        assert_eq!(cache.guild_count(), 0);
    }
}
