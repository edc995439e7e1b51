use crate::api::client::ApiClient;
use crate::api::models::{AuthPayload, LoginRequest, RegisterRequest, User};
use crate::core::hooks::fetch::FetchHook;
use crate::core::hooks::mutation::MutationHook;
use crate::core::services::user_service::UserService;

/// Composed authentication hook.
///
/// Combines a current-user fetch with login and register mutations over one
/// [`UserService`]. `loading()` is true while any of the three is in flight;
/// `error()` reports the first non-empty error in fixed priority order:
/// current user, then login, then register.
pub struct AuthHook {
    client: ApiClient,
    users: UserService,
    current_user: FetchHook<User>,
    login_mutation: MutationHook<AuthPayload, LoginRequest>,
    register_mutation: MutationHook<AuthPayload, RegisterRequest>,
}

impl AuthHook {
    pub fn new(client: ApiClient) -> Self {
        let users = UserService::new(client.clone());

        let fetch_users = users.clone();
        let current_user = FetchHook::new(
            Box::new(move || {
                let users = fetch_users.clone();
                Box::pin(async move { users.current_user().await })
            }),
            Vec::new(),
        );

        let login_users = users.clone();
        let login_mutation = MutationHook::new(Box::new(move |input: LoginRequest| {
            let users = login_users.clone();
            Box::pin(async move { users.login(&input).await })
        }));

        let register_users = users.clone();
        let register_mutation = MutationHook::new(Box::new(move |input: RegisterRequest| {
            let users = register_users.clone();
            Box::pin(async move { users.register(&input).await })
        }));

        Self {
            client,
            users,
            current_user,
            login_mutation,
            register_mutation,
        }
    }

    /// Initial current-user fetch.
    pub async fn mount(&mut self) {
        self.current_user.refetch().await;
    }

    pub async fn login(&mut self, input: LoginRequest) {
        self.login_mutation.mutate(input).await;
        if self.login_mutation.error().is_some() {
            return;
        }

        let token = self
            .login_mutation
            .data()
            .map(|payload| payload.token.clone());
        if let Some(token) = token {
            if let Err(e) = self.client.set_auth_token(&token) {
                log::warn!("failed to persist auth token: {}", e);
            }
            self.current_user.refetch().await;
        }
    }

    pub async fn register(&mut self, input: RegisterRequest) {
        self.register_mutation.mutate(input).await;
        if self.register_mutation.error().is_some() {
            return;
        }

        let token = self
            .register_mutation
            .data()
            .map(|payload| payload.token.clone());
        if let Some(token) = token {
            if let Err(e) = self.client.set_auth_token(&token) {
                log::warn!("failed to persist auth token: {}", e);
            }
            self.current_user.refetch().await;
        }
    }

    /// Best-effort server-side logout. Local credentials are cleared and the
    /// current user refetched even when the request fails; the failure is
    /// only logged.
    pub async fn logout(&mut self) {
        if let Err(e) = self.users.logout().await {
            log::warn!("logout request failed: {}", e);
        }
        if let Err(e) = self.client.remove_auth_token() {
            log::warn!("failed to clear auth token: {}", e);
        }
        self.current_user.refetch().await;
    }

    pub fn user(&self) -> Option<&User> {
        self.current_user.data()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.auth_token().is_some()
    }

    pub fn loading(&self) -> bool {
        self.current_user.loading()
            || self.login_mutation.loading()
            || self.register_mutation.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.current_user
            .error()
            .or_else(|| self.login_mutation.error())
            .or_else(|| self.register_mutation.error())
    }
}
