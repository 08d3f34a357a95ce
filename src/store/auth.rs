use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use crate::{
    audit::AuditLog,
    dto::auth::RegisterRequest,
    error::{StoreError, StoreResult},
    models::{SellerProfile, User},
    seed,
};

struct Directory {
    users: Vec<User>,
    session: Option<User>,
}

/// User directory plus the single active session. The store is an explicit
/// instance, not a global; an embedder that needs several concurrent
/// sessions constructs one per connection.
#[derive(Clone)]
pub struct AuthStore {
    inner: Arc<Mutex<Directory>>,
    audit: AuditLog,
}

impl AuthStore {
    pub fn new(audit: AuditLog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Directory {
                users: Vec::new(),
                session: None,
            })),
            audit,
        }
    }

    pub fn seeded(audit: AuditLog) -> Self {
        let store = Self::new(audit);
        store
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .users
            .extend(seed::users());
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Directory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Matches by case-insensitive email only; the password is accepted
    /// unverified in this simulated backend.
    pub async fn login(&self, email: &str, _password: &str) -> StoreResult<User> {
        let mut directory = self.lock();
        let user = directory
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or(StoreError::InvalidCredentials)?;
        directory.session = Some(user.clone());
        drop(directory);

        self.audit.record(
            "user_login",
            Some("users"),
            Some(serde_json::json!({ "user_id": user.id })),
        );
        Ok(user)
    }

    /// Appends a new user and opens a session for it. The directory is
    /// untouched when the email is already claimed.
    pub async fn register(&self, payload: RegisterRequest) -> StoreResult<User> {
        let RegisterRequest {
            email,
            password: _,
            name,
            account_type,
        } = payload;

        let mut directory = self.lock();
        if directory
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&email))
        {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: format!("u{}", directory.users.len() + 1),
            email,
            name,
            avatar: None,
            account_type,
            created_at: Utc::now(),
        };
        directory.users.push(user.clone());
        directory.session = Some(user.clone());
        drop(directory);

        self.audit.record(
            "user_register",
            Some("users"),
            Some(serde_json::json!({ "user_id": user.id })),
        );
        Ok(user)
    }

    pub async fn logout(&self) {
        self.lock().session = None;
        self.audit.record("user_logout", Some("users"), None);
    }

    pub async fn current_user(&self) -> Option<User> {
        self.lock().session.clone()
    }

    /// Static seller profile for the seeded seller account.
    pub async fn seller_profile(&self, user_id: &str) -> Option<SellerProfile> {
        if user_id == "seller1" {
            return Some(SellerProfile {
                id: "seller_profile_1".to_string(),
                user_id: "seller1".to_string(),
                shop_name: "Static Seller Shop".to_string(),
            });
        }
        None
    }
}
