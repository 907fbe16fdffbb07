use kingfisher::model::interactions::application_command::CommandType;
use kingfisher::model::interactions::{ComponentType, Interaction, InteractionType};
use serde_json::{json, Value};

fn user() -> Value {
    json!({
        "id": "7",
        "username": "invoker",
        "discriminator": "0001",
    })
}

fn ping() -> Value {
    json!({
        "id": "3",
        "application_id": "1",
        "type": 1,
        "token": "aW50ZXJhY3Rpb24",
        "version": 1,
    })
}

fn slash_command() -> Value {
    json!({
        "id": "3",
        "application_id": "1",
        "type": 2,
        "data": {
            "id": "10",
            "name": "ping",
            "type": 1,
        },
        "channel_id": "5",
        "user": user(),
        "token": "aW50ZXJhY3Rpb24",
        "version": 1,
    })
}

fn context_menu() -> Value {
    json!({
        "id": "3",
        "application_id": "1",
        "type": 2,
        "data": {
            "id": "10",
            "name": "Report",
            "type": 2,
            "target_id": "7",
        },
        "channel_id": "5",
        "user": user(),
        "token": "aW50ZXJhY3Rpb24",
        "version": 1,
    })
}

fn autocomplete() -> Value {
    json!({
        "id": "3",
        "application_id": "1",
        "type": 4,
        "data": {
            "id": "10",
            "name": "play",
            "type": 1,
            "options": [
                {"name": "song", "type": 3, "value": "never", "focused": true},
            ],
        },
        "channel_id": "5",
        "user": user(),
        "token": "aW50ZXJhY3Rpb24",
        "version": 1,
    })
}

fn button_press() -> Value {
    json!({
        "id": "3",
        "application_id": "1",
        "type": 3,
        "data": {
            "custom_id": "accept",
            "component_type": 2,
        },
        "message": {
            "id": "11",
            "flags": 64,
        },
        "channel_id": "5",
        "user": user(),
        "token": "aW50ZXJhY3Rpb24",
        "version": 1,
    })
}

fn select_choice() -> Value {
    json!({
        "id": "3",
        "application_id": "1",
        "type": 3,
        "data": {
            "custom_id": "pick",
            "component_type": 3,
            "values": ["b", "a"],
        },
        "message": {
            "id": "11",
            "flags": 64,
        },
        "channel_id": "5",
        "user": user(),
        "token": "aW50ZXJhY3Rpb24",
        "version": 1,
    })
}

#[test]
fn type_codes_resolve_to_exactly_one_variant() {
    let interaction: Interaction = serde_json::from_value(ping()).unwrap();
    assert_eq!(interaction.kind(), InteractionType::Ping);

    let interaction: Interaction = serde_json::from_value(slash_command()).unwrap();
    assert_eq!(interaction.kind(), InteractionType::ApplicationCommand);

    let interaction: Interaction = serde_json::from_value(autocomplete()).unwrap();
    assert_eq!(interaction.kind(), InteractionType::Autocomplete);

    let interaction: Interaction = serde_json::from_value(button_press()).unwrap();
    assert_eq!(interaction.kind(), InteractionType::MessageComponent);
}

#[test]
fn unknown_type_codes_are_rejected() {
    let mut payload = ping();
    payload["type"] = json!(19);

    assert!(serde_json::from_value::<Interaction>(payload).is_err());
}

#[test]
fn command_and_context_menu_predicates_are_exclusive() {
    let command: Interaction = serde_json::from_value(slash_command()).unwrap();
    assert!(command.is_application_command());
    assert!(command.is_command());
    assert!(!command.is_context_menu());
    assert!(!command.is_button());
    assert!(!command.is_autocomplete());

    let menu: Interaction = serde_json::from_value(context_menu()).unwrap();
    assert!(menu.is_application_command());
    assert!(!menu.is_command());
    assert!(menu.is_context_menu());

    let menu = menu.application_command().unwrap();
    assert_eq!(menu.data.kind, CommandType::User);
    assert_eq!(menu.data.target_id.unwrap().to_user_id(), 7);
}

#[test]
fn autocomplete_is_not_an_application_command() {
    let interaction: Interaction = serde_json::from_value(autocomplete()).unwrap();

    assert!(interaction.is_autocomplete());
    assert!(!interaction.is_application_command());
    assert!(!interaction.is_command());

    let interaction = interaction.autocomplete().unwrap();
    let focused = interaction.data.options.iter().find(|option| option.focused).unwrap();
    assert_eq!(focused.name, "song");
    assert_eq!(focused.value.as_ref().unwrap(), "never");
}

#[test]
fn buttons_and_select_menus_split_on_component_type() {
    let button: Interaction = serde_json::from_value(button_press()).unwrap();
    assert!(button.is_message_component());
    assert!(button.is_button());

    let select: Interaction = serde_json::from_value(select_choice()).unwrap();
    assert!(select.is_message_component());
    assert!(!select.is_button());

    let select = select.message_component().unwrap();
    assert_eq!(select.data.component_type, ComponentType::SelectMenu);
    // Order is the user's pick order, not the menu's.
    assert_eq!(select.data.values, vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn commands_classify_without_a_channel() {
    let mut payload = slash_command();
    let map = payload.as_object_mut().unwrap();
    map.remove("channel_id");
    map.remove("user");
    map.insert("guild_id".to_string(), json!("81384788765712384"));
    map.insert(
        "member".to_string(),
        json!({
            "roles": [],
            "user": user(),
        }),
    );

    let interaction: Interaction = serde_json::from_value(payload).unwrap();
    assert!(interaction.is_command());
    assert!(interaction.in_guild());
    assert!(interaction.channel_id().is_none());

    let mut payload = button_press();
    payload.as_object_mut().unwrap().remove("channel_id");

    let interaction: Interaction = serde_json::from_value(payload).unwrap();
    assert!(interaction.is_button());
    assert!(interaction.channel_id().is_none());

    let mut payload = autocomplete();
    payload.as_object_mut().unwrap().remove("channel_id");

    let interaction: Interaction = serde_json::from_value(payload).unwrap();
    assert!(interaction.is_autocomplete());
    assert!(interaction.channel_id().is_none());
}

#[test]
fn pings_carry_no_origin() {
    let interaction: Interaction = serde_json::from_value(ping()).unwrap();

    assert!(interaction.guild_id().is_none());
    assert!(interaction.channel_id().is_none());
    assert!(interaction.user().is_none());
    assert!(interaction.member().is_none());
    assert!(!interaction.in_guild());
}

#[test]
fn member_permissions_are_never_defaulted() {
    let mut payload = slash_command();
    let map = payload.as_object_mut().unwrap();
    map.remove("user");
    map.insert("guild_id".to_string(), json!("81384788765712384"));
    map.insert(
        "member".to_string(),
        json!({
            "roles": [],
            "user": user(),
        }),
    );

    let interaction: Interaction = serde_json::from_value(payload.clone()).unwrap();
    assert!(interaction.in_guild());
    assert!(interaction.member_permissions().is_none());

    let map = payload.as_object_mut().unwrap();
    map.get_mut("member").unwrap()["permissions"] = json!("2048");

    let interaction: Interaction = serde_json::from_value(Value::Object(map.clone())).unwrap();
    let permissions = interaction.member_permissions().unwrap();
    assert_eq!(permissions.bits(), 2048);
}

#[test]
fn token_is_redacted_from_debug_output() {
    let interaction: Interaction = serde_json::from_value(slash_command()).unwrap();

    let debugged = format!("{:?}", interaction);
    assert!(!debugged.contains("aW50ZXJhY3Rpb24"));
    assert!(interaction.token().expose_secret().contains("aW50ZXJhY3Rpb24"));
}
