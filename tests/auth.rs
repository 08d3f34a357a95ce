use nexusstore_core::{
    audit::AuditLog,
    context::AuthContext,
    dto::auth::RegisterRequest,
    error::StoreError,
    models::AccountType,
    store::AuthStore,
};

#[tokio::test]
async fn login_matches_email_case_insensitively() -> anyhow::Result<()> {
    let store = AuthStore::seeded(AuditLog::default());

    let user = store.login("SELLER@example.com", "whatever").await?;
    assert_eq!(user.id, "seller1");
    assert_eq!(user.email, "seller@example.com");

    let session = store.current_user().await;
    assert_eq!(session.map(|u| u.id), Some("seller1".to_string()));
    Ok(())
}

#[tokio::test]
async fn login_with_unknown_email_is_rejected() {
    let store = AuthStore::seeded(AuditLog::default());

    let err = store
        .login("nobody@example.com", "whatever")
        .await
        .expect_err("unknown email");
    assert!(matches!(err, StoreError::InvalidCredentials));
    assert!(store.current_user().await.is_none());
}

#[tokio::test]
async fn register_allocates_sequential_ids_and_opens_a_session() -> anyhow::Result<()> {
    let store = AuthStore::seeded(AuditLog::default());

    let user = store
        .register(RegisterRequest {
            email: "new@example.com".to_string(),
            password: "pw".to_string(),
            name: "New User".to_string(),
            account_type: AccountType::Buyer,
        })
        .await?;

    assert_eq!(user.id, "u3");
    assert_eq!(store.current_user().await, Some(user));
    Ok(())
}

#[tokio::test]
async fn register_with_taken_email_leaves_the_directory_unchanged() -> anyhow::Result<()> {
    let store = AuthStore::seeded(AuditLog::default());

    let err = store
        .register(RegisterRequest {
            email: "USER@example.com".to_string(),
            password: "pw".to_string(),
            name: "Impostor".to_string(),
            account_type: AccountType::Buyer,
        })
        .await
        .expect_err("duplicate email");
    assert!(matches!(err, StoreError::DuplicateEmail));
    assert!(store.current_user().await.is_none());

    // the next successful registration proves the directory did not grow
    let user = store
        .register(RegisterRequest {
            email: "fresh@example.com".to_string(),
            password: "pw".to_string(),
            name: "Fresh".to_string(),
            account_type: AccountType::Buyer,
        })
        .await?;
    assert_eq!(user.id, "u3");
    Ok(())
}

#[tokio::test]
async fn logout_clears_the_session() -> anyhow::Result<()> {
    let store = AuthStore::seeded(AuditLog::default());
    store.login("user@example.com", "pw").await?;

    store.logout().await;
    assert!(store.current_user().await.is_none());

    // logging out twice is fine
    store.logout().await;
    Ok(())
}

#[tokio::test]
async fn seller_profile_exists_only_for_the_seeded_seller() {
    let store = AuthStore::seeded(AuditLog::default());

    let profile = store.seller_profile("seller1").await.expect("seller profile");
    assert_eq!(profile.shop_name, "Static Seller Shop");
    assert!(store.seller_profile("u1").await.is_none());
}

#[tokio::test]
async fn seller_status_follows_the_stored_account_type() -> anyhow::Result<()> {
    let store = AuthStore::seeded(AuditLog::default());
    let mut auth = AuthContext::new(store);

    // no "seller" substring in the email; the stored account type decides
    auth.register(RegisterRequest {
        email: "shop-owner@example.com".to_string(),
        password: "pw".to_string(),
        name: "Shop Owner".to_string(),
        account_type: AccountType::Seller,
    })
    .await?;
    assert!(auth.is_seller());

    auth.logout().await;
    assert!(!auth.is_seller());

    auth.login("user@example.com", "pw").await?;
    assert!(!auth.is_seller());
    Ok(())
}

#[tokio::test]
async fn hydrate_picks_up_an_open_session() -> anyhow::Result<()> {
    let store = AuthStore::seeded(AuditLog::default());
    store.login("seller@example.com", "pw").await?;

    let mut auth = AuthContext::new(store);
    assert!(auth.user().is_none());

    auth.hydrate().await;
    assert_eq!(auth.user().map(|u| u.id.as_str()), Some("seller1"));
    assert!(auth.is_seller());
    assert!(!auth.loading());
    Ok(())
}
