use std::collections::HashMap;
use std::sync::Arc;

use kingfisher::cache::Cache;
use kingfisher::http::Http;
use kingfisher::model::guild::Guild;
use kingfisher::model::id::{ApplicationId, GuildId, UserId};
use kingfisher::model::interactions::{Interaction, Respondable};
use kingfisher::model::ModelError;
use kingfisher::prelude::*;
use kingfisher::Error;
use serde_json::{json, Value};
use tokio::sync::Mutex;

const TOKEN: &str = "MTAwMDAwMDAwMDAwMDAwMDAw.GfGfGf.fGfGfGfGfGfGfGfGfGfGfGfGfGfGfGfGfGfG";

#[derive(Debug, Default)]
struct Seen {
    interactions: Vec<Interaction>,
    unknown: Vec<(String, Value)>,
}

struct Recorder(Arc<Mutex<Seen>>);

#[kingfisher::async_trait]
impl EventHandler for Recorder {
    async fn interaction_create(&self, _ctx: Context, interaction: Interaction) {
        self.0.lock().await.interactions.push(interaction);
    }

    async fn unknown(&self, _ctx: Context, name: String, raw: Value) {
        self.0.lock().await.unknown.push((name, raw));
    }
}

fn client_with_recorder() -> (Client, Arc<Mutex<Seen>>) {
    let seen = Arc::new(Mutex::new(Seen::default()));
    let client = Client::builder(TOKEN)
        .application_id(ApplicationId(1))
        .event_handler(Recorder(Arc::clone(&seen)))
        .build()
        .unwrap();

    (client, seen)
}

fn guild_command_payload() -> Value {
    json!({
        "id": "3",
        "application_id": "1",
        "type": 2,
        "data": {
            "id": "10",
            "name": "ping",
            "type": 1,
        },
        "guild_id": "81384788765712384",
        "channel_id": "5",
        "member": {
            "roles": [],
            "user": {
                "id": "7",
                "username": "invoker",
                "discriminator": "0001",
            },
        },
        "token": "aW50ZXJhY3Rpb24",
        "version": 1,
    })
}

fn empty_guild(id: u64) -> Guild {
    serde_json::from_value(json!({
        "id": id.to_string(),
        "name": "den",
        "owner_id": "1",
        "unavailable": false,
        "channels": [],
        "members": [],
    }))
    .unwrap()
}

#[tokio::test]
async fn process_classifies_and_dispatches_interactions() {
    let (client, seen) = client_with_recorder();

    client.process("INTERACTION_CREATE", guild_command_payload()).await.unwrap();

    let seen = seen.lock().await;
    assert_eq!(seen.interactions.len(), 1);
    assert!(seen.unknown.is_empty());

    let interaction = &seen.interactions[0];
    assert!(interaction.is_command());
    assert_eq!(interaction.guild_id().unwrap(), 81_384_788_765_712_384_u64);
    assert_eq!(interaction.user().unwrap().id, 7);
}

#[tokio::test]
async fn process_forwards_unmodeled_dispatches_untouched() {
    let (client, seen) = client_with_recorder();
    let payload = json!({"channel_id": "1", "user_id": "7"});

    client.process("TYPING_START", payload.clone()).await.unwrap();

    let seen = seen.lock().await;
    assert!(seen.interactions.is_empty());
    assert_eq!(seen.unknown, vec![("TYPING_START".to_string(), payload)]);
}

#[tokio::test]
async fn process_rejects_undecodable_interaction_payloads() {
    let (client, seen) = client_with_recorder();
    let mut payload = guild_command_payload();
    payload["type"] = json!(19);

    let result = client.process("INTERACTION_CREATE", payload).await;

    assert!(matches!(result, Err(Error::Json(_))));
    assert!(seen.lock().await.interactions.is_empty());
}

#[tokio::test]
async fn process_mirrors_invokers_into_the_cache() {
    let (client, seen) = client_with_recorder();

    client.process("INTERACTION_CREATE", guild_command_payload()).await.unwrap();

    // The invoking user is always mirrored; the membership record only
    // attaches once the owning application has shared the guild.
    assert!(client.cache.user(UserId(7)).is_some());
    assert!(client.cache.member(GuildId(81_384_788_765_712_384), UserId(7)).is_none());

    client.cache.insert_guild(empty_guild(81_384_788_765_712_384));
    client.process("INTERACTION_CREATE", guild_command_payload()).await.unwrap();

    let member = client.cache.member(GuildId(81_384_788_765_712_384), UserId(7)).unwrap();
    assert_eq!(member.user.id, 7);
    assert_eq!(seen.lock().await.interactions.len(), 2);
}

#[test]
fn guild_membership_checks_follow_the_cache() {
    let cache = Cache::new();
    let interaction: Interaction = serde_json::from_value(guild_command_payload()).unwrap();

    assert!(interaction.in_guild());
    assert!(interaction.in_raw_guild(&cache));
    assert!(!interaction.in_cached_guild(&cache));
    assert!(interaction.guild(&cache).is_none());

    cache.insert_guild(empty_guild(81_384_788_765_712_384));

    assert!(interaction.in_cached_guild(&cache));
    assert!(!interaction.in_raw_guild(&cache));
    assert_eq!(interaction.guild(&cache).unwrap().name, "den");
}

#[tokio::test]
async fn followups_require_an_opened_lifecycle() {
    let http = Http::new(TOKEN, 9, ApplicationId(1));
    let interaction: Interaction = serde_json::from_value(guild_command_payload()).unwrap();
    let mut interaction = interaction.application_command().unwrap();

    let result = interaction.follow_up(&http, |f| f.content("too early")).await;
    assert!(matches!(result, Err(Error::Model(ModelError::NotYetAcknowledged))));

    let result = interaction.edit_reply(&http, |edit| edit.content("too early")).await;
    assert!(matches!(result, Err(Error::Model(ModelError::NotYetAcknowledged))));
}

#[tokio::test]
async fn oversized_replies_fail_before_any_request() {
    let http = Http::new(TOKEN, 9, ApplicationId(1));
    let interaction: Interaction = serde_json::from_value(guild_command_payload()).unwrap();
    let mut interaction = interaction.application_command().unwrap();

    let long = "a".repeat(2002);
    let result = interaction.reply(&http, false, |data| data.content(&long)).await;

    assert!(matches!(result, Err(Error::Model(ModelError::MessageTooLong(2)))));
}
