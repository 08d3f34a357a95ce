use crate::{
    dto::auth::RegisterRequest,
    error::StoreResult,
    models::{AccountType, User},
    store::AuthStore,
};

/// Session view for the presentation layer. Seller status derives from the
/// account type stored on the user, so login, register, and re-hydration
/// all agree.
pub struct AuthContext {
    store: AuthStore,
    user: Option<User>,
    loading: bool,
}

impl AuthContext {
    pub fn new(store: AuthStore) -> Self {
        Self {
            store,
            user: None,
            loading: false,
        }
    }

    /// Picks up an already-open session, e.g. at startup.
    pub async fn hydrate(&mut self) {
        self.loading = true;
        let user = self.store.current_user().await;
        self.loading = false;
        self.user = user;
    }

    pub async fn login(&mut self, email: &str, password: &str) -> StoreResult<()> {
        self.loading = true;
        let result = self.store.login(email, password).await;
        self.loading = false;
        self.user = Some(result?);
        Ok(())
    }

    pub async fn register(&mut self, payload: RegisterRequest) -> StoreResult<()> {
        self.loading = true;
        let result = self.store.register(payload).await;
        self.loading = false;
        self.user = Some(result?);
        Ok(())
    }

    pub async fn logout(&mut self) {
        self.loading = true;
        self.store.logout().await;
        self.loading = false;
        self.user = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_seller(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.account_type == AccountType::Seller)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }
}
