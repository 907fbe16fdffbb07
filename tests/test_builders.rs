use kingfisher::builder::{
    CreateEmbed,
    CreateInteractionResponse,
    CreateInteractionResponseFollowup,
    EditInteractionResponse,
};
use kingfisher::model::interactions::{InteractionResponseFlags, InteractionResponseType};
use serde_json::{json, Value};

#[test]
fn callback_builder_defaults_to_a_source_message() {
    let response = CreateInteractionResponse::default();

    assert_eq!(response.0["type"], json!(4));
}

#[test]
fn callback_builder_assembles_type_and_data() {
    let mut response = CreateInteractionResponse::default();
    response
        .kind(InteractionResponseType::DeferredChannelMessageWithSource)
        .interaction_response_data(|data| data.content("loading").ephemeral(true));

    assert_eq!(response.0["type"], json!(5));
    assert_eq!(response.0["data"]["content"], "loading");
    assert_eq!(response.0["data"]["flags"], json!(1 << 6));
}

#[test]
fn embed_builder_produces_a_rich_embed() {
    let mut embed = CreateEmbed::default();
    embed
        .title("report")
        .colour(0xFF_00_11)
        .description("all clear")
        .author(|a| a.name("watchdog").icon_url("https://example.com/icon.png"))
        .footer(|f| f.text("generated"))
        .field("status", "ok", true);

    let map = kingfisher::utils::hashmap_to_json_map(embed.0);

    assert_eq!(map["type"], "rich");
    assert_eq!(map["color"], json!(0xFF_00_11));
    assert_eq!(map["author"]["name"], "watchdog");
    assert_eq!(map["footer"]["text"], "generated");
    assert_eq!(map["fields"][0]["name"], "status");
}

#[test]
fn edit_builder_clears_embeds_with_an_empty_list() {
    let mut edit = EditInteractionResponse::default();
    edit.content("updated").embed(|e| e.title("old"));

    assert_eq!(edit.0["embeds"].as_array().unwrap().len(), 1);

    edit.set_embeds(Vec::<CreateEmbed>::new());
    assert_eq!(edit.0["embeds"], Value::Array(vec![]));
}

#[test]
fn followup_builder_keeps_webhook_overrides_and_flags_separate() {
    let mut followup = CreateInteractionResponseFollowup::default();
    followup
        .content("one more thing")
        .username("sidekick")
        .avatar_url("https://example.com/avatar.png")
        .flags(InteractionResponseFlags::from_bits_truncate(1 << 2))
        .ephemeral(true);

    assert_eq!(followup.0["username"], "sidekick");
    assert_eq!(followup.0["avatar_url"], "https://example.com/avatar.png");
    assert_eq!(followup.0["flags"], json!((1 << 2) | (1 << 6)));

    followup.ephemeral(false);
    assert_eq!(followup.0["flags"], json!(1 << 2));
}

#[test]
fn followup_builder_collects_attachments() {
    let mut followup = CreateInteractionResponseFollowup::default();
    followup
        .add_file((&b"hello"[..], "greeting.txt"))
        .add_file((&b"bye"[..], "farewell.txt"));

    assert_eq!(followup.1.len(), 2);

    followup.files([(&b"only"[..], "only.txt")]);
    assert_eq!(followup.1.len(), 1);
}
