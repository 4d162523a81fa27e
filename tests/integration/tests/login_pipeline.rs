//! Login dispatch and post-login transition, end to end.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use forum_integration_tests::TestEnv;
use forum_model::{DomainEvent, IdentityProviderKind};
use forum_sso::{CompletedLogin, LoginAttempt, LoginRequestContext};
use forum_storage::SsoStatusStore;
use http_body_util::BodyExt;
use tokio::sync::broadcast::error::TryRecvError;
use tower::ServiceExt;

/// Every configured provider yields a URL; the HTTP surface agrees with
/// the dispatcher.
#[tokio::test]
async fn test_login_urls_for_all_providers() -> anyhow::Result<()> {
    let env = TestEnv::new("")?;

    for kind in IdentityProviderKind::ALL {
        let direct = env.state.dispatcher.generate_login_url(kind, false, false);
        assert!(!direct.is_empty(), "{kind} should have a login URL");

        let response = env
            .router()
            .oneshot(
                Request::get(format!("/sso/{kind}/login-url"))
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await?.to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        assert_eq!(body["url"], direct.as_str());
    }
    Ok(())
}

/// Full-page login: flag, persistent session, then one event.
#[tokio::test]
async fn test_sign_in_flow() -> anyhow::Result<()> {
    let env = TestEnv::new("")?;
    let mut events = env.state.events.subscribe();

    let attempt = LoginAttempt::new(LoginRequestContext::new(IdentityProviderKind::Twitter))
        .issue_url(&env.state.dispatcher)
        .ok_or_else(|| anyhow::anyhow!("twitter should be configured"))?;
    assert!(attempt.login_url().contains("oauth_callback="));

    let completed = attempt
        .redirected()
        .complete(&env.state.outcomes, "alice", 42)
        .await?;

    let CompletedLogin::SignedIn(done) = completed else {
        anyhow::bail!("expected a signed-in attempt");
    };
    let session = done.session().ok_or_else(|| anyhow::anyhow!("missing session"))?;
    assert!(session.is_persistent());
    assert_eq!(env.sessions.active_sessions_for("alice").len(), 1);

    assert_eq!(
        env.statuses.get_status(42).await?,
        Some(IdentityProviderKind::Twitter)
    );

    let DomainEvent::SsoLogin(event) = events.try_recv()?;
    assert_eq!(event.user_id, 42);
    assert_eq!(event.occurred_via_provider, Some(IdentityProviderKind::Twitter));
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
    Ok(())
}

/// Connecting to the current user links the identity only.
#[tokio::test]
async fn test_connect_flow_links_without_session() -> anyhow::Result<()> {
    let env = TestEnv::new("")?;
    let mut events = env.state.events.subscribe();

    let request = LoginRequestContext::new(IdentityProviderKind::Facebook)
        .popup()
        .connect_current_user();
    let attempt = LoginAttempt::new(request)
        .issue_url(&env.state.dispatcher)
        .ok_or_else(|| anyhow::anyhow!("facebook should be configured"))?;
    assert!(attempt.login_url().contains("display=popup"));

    let completed = attempt
        .redirected()
        .complete(&env.state.outcomes, "bob", 7)
        .await?;

    assert!(matches!(completed, CompletedLogin::Linked(_)));
    assert_eq!(
        env.statuses.get_status(7).await?,
        Some(IdentityProviderKind::Facebook)
    );
    assert!(env.sessions.is_empty());
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
    Ok(())
}

/// A later login through another provider overwrites the flag.
#[tokio::test]
async fn test_sso_flag_last_write_wins() -> anyhow::Result<()> {
    let env = TestEnv::new("")?;

    env.state
        .outcomes
        .on_login_success(IdentityProviderKind::Google, "carol", 3, true)
        .await?;
    env.state
        .outcomes
        .on_login_success(IdentityProviderKind::Twitter, "carol", 3, false)
        .await?;

    assert_eq!(
        env.statuses.get_status(3).await?,
        Some(IdentityProviderKind::Twitter)
    );
    Ok(())
}
