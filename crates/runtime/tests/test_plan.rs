use parley_config::LoggingConfig;
use parley_runtime::{decode, decode_str, telemetry, PayloadError, PayloadKind};
use serde_json::json;

#[test]
fn every_kind_name_parses_back() {
    for kind in PayloadKind::ALL {
        let parsed: PayloadKind = kind.name().parse().expect("kind name should parse");
        assert_eq!(parsed, kind);
    }

    assert_eq!(
        "Retrieved_Invite".parse::<PayloadKind>().unwrap(),
        PayloadKind::RetrievedInvite
    );
    assert!(matches!(
        "emoji".parse::<PayloadKind>(),
        Err(PayloadError::UnknownKind(_))
    ));
}

#[test]
fn decodes_text_channel_without_last_message() {
    let decoded = decode(
        PayloadKind::Channel,
        json!({
            "_id": "c1",
            "channel_type": "TextChannel",
            "server": "s1",
            "name": "general",
            "description": ""
        }),
    )
    .expect("channel should decode");

    assert!(decoded.lossless);
    assert_eq!(decoded.summary, "TextChannel c1 #general");
    assert!(decoded.canonical.get("last_message").is_none());
}

#[test]
fn explicit_nulls_on_known_fields_are_lossless() {
    let decoded = decode(
        PayloadKind::Channel,
        json!({
            "_id": "c1",
            "channel_type": "TextChannel",
            "server": "s1",
            "name": "general",
            "description": "",
            "last_message": null
        }),
    )
    .expect("channel should decode");

    assert!(decoded.lossless);
    assert!(decoded.canonical.get("last_message").is_none());

    let decoded = decode(
        PayloadKind::Message,
        json!({
            "_id": "m1",
            "channel": "c1",
            "author": "u1",
            "content": "hi",
            "edited": null,
            "attachments": [{
                "_id": "f1",
                "tag": "attachments",
                "size": 10,
                "filename": "notes.txt",
                "metadata": { "type": "Text" },
                "content_type": "text/plain"
            }]
        }),
    )
    .expect("message should decode");
    assert!(decoded.lossless);
}

#[test]
fn null_members_do_not_hide_unknown_fields() {
    let decoded = decode(
        PayloadKind::Profile,
        json!({ "content": null, "badge": "gold" }),
    )
    .expect("profile should decode");

    assert!(!decoded.lossless);
}

#[test]
fn rejects_image_attachment_without_dimensions() {
    let error = decode(
        PayloadKind::Attachment,
        json!({
            "_id": "f1",
            "tag": "attachments",
            "size": 10,
            "filename": "cat.png",
            "metadata": { "type": "Image" },
            "content_type": "image/png"
        }),
    )
    .expect_err("attachment without dimensions should be rejected");

    assert!(matches!(
        error,
        PayloadError::Malformed {
            kind: PayloadKind::Attachment,
            ..
        }
    ));
}

#[test]
fn reports_unknown_fields_as_lossy() {
    let decoded = decode(
        PayloadKind::Ban,
        json!({
            "_id": { "server": "s1", "user": "u1" },
            "reason": "spam",
            "expires": "never"
        }),
    )
    .expect("ban should decode");

    assert!(!decoded.lossless);
    assert!(decoded.canonical.get("expires").is_none());
    assert_eq!(decoded.summary, "ban of u1 from server s1");
}

#[test]
fn validation_failures_are_reported() {
    let error = decode(
        PayloadKind::Session,
        json!({ "user_id": "u1", "session_token": "" }),
    )
    .expect_err("empty token should be rejected");

    assert!(matches!(
        error,
        PayloadError::Invalid {
            kind: PayloadKind::Session,
            ..
        }
    ));
}

#[test]
fn summarises_system_messages() {
    let decoded = decode_str(
        PayloadKind::Message,
        r#"{"_id":"m1","channel":"c1","author":"u1","content":{"type":"user_joined","id":"u2"}}"#,
    )
    .expect("message should decode");

    assert_eq!(decoded.summary, "system message m1 (user_joined)");
}

#[test]
fn syntax_errors_are_distinct_from_schema_errors() {
    assert!(matches!(
        decode_str(PayloadKind::User, "{not json"),
        Err(PayloadError::Syntax(_))
    ));
    assert!(matches!(
        decode_str(PayloadKind::User, r#"{"_id":"u1"}"#),
        Err(PayloadError::Malformed { .. })
    ));
}

#[test]
fn env_filter_falls_back_to_configured_filter() {
    std::env::remove_var("RUST_LOG");
    let filter = telemetry::env_filter(&LoggingConfig {
        filter: "parley=debug".to_string(),
    });
    assert_eq!(filter.to_string(), "parley=debug");
}
