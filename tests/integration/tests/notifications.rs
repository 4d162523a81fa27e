//! Administrator notification flows, end to end.

use forum_integration_tests::TestEnv;
use forum_model::UserIdentity;

fn newcomer() -> UserIdentity {
    UserIdentity::new(42, "alice", "alice@example.com")
}

/// The registration notice reaches every configured address exactly once.
#[tokio::test]
async fn test_registration_notification() -> anyhow::Result<()> {
    let env = TestEnv::new("admin@example.com; ;ops@example.com;admin@example.com")?;

    let report = env
        .state
        .notifier
        .send_registration_notification(1, &newcomer())
        .await?;

    assert!(report.is_complete());
    assert_eq!(
        env.mail.recipients(),
        vec!["admin@example.com", "ops@example.com"]
    );

    for message in env.mail.messages() {
        assert_eq!(message.from, "forum@example.com");
        assert!(message.subject.contains("TestForum"));
        assert!(message.body.contains("alice"));
        assert!(message.body.contains("alice@example.com"));
        assert!(message
            .body
            .contains("https://forum.example.com/admin/edituser?u=42"));
    }
    Ok(())
}

/// Without an "Administrators" group, group 1's members are notified.
#[tokio::test]
async fn test_spam_bot_notification_falls_back_to_group_one() -> anyhow::Result<()> {
    let env = TestEnv::new("")?;
    env.add_group(1, "Staff", &["staff@example.com"]);
    env.add_group(2, "Mods", &["mod@example.com"]);
    env.add_group(3, "Editors", &["editor@example.com"]);

    let report = env
        .state
        .notifier
        .send_spam_bot_notification(1, &newcomer())
        .await?;

    assert_eq!(report.enqueued, vec!["staff@example.com"]);
    Ok(())
}

/// A rejected address does not stop delivery to the others.
#[tokio::test]
async fn test_bad_address_is_isolated() -> anyhow::Result<()> {
    let env = TestEnv::new("")?;
    env.add_group(
        5,
        "Administrators",
        &["a@example.com", "not an address", "c@example.com"],
    );

    let report = env
        .state
        .notifier
        .send_spam_bot_notification(1, &newcomer())
        .await?;

    assert_eq!(report.enqueued, vec!["a@example.com", "c@example.com"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].recipient, "not an address");
    assert_eq!(env.mail.messages().len(), 2);
    Ok(())
}

/// Nothing is sent when nobody is configured.
#[tokio::test]
async fn test_no_recipients_is_a_no_op() -> anyhow::Result<()> {
    let env = TestEnv::new("")?;

    let report = env
        .state
        .notifier
        .send_registration_notification(1, &newcomer())
        .await?;

    assert_eq!(report.attempted(), 0);
    assert!(env.mail.messages().is_empty());
    Ok(())
}
