use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::Credentials,
    service::token::TokenService,
};

pub struct AuthService<'a> {
    credentials: &'a Credentials,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(credentials: &'a Credentials, tokens: &'a TokenService) -> Self {
        Self {
            credentials,
            tokens,
        }
    }

    /// Checks a username/password pair and issues an access token
    ///
    /// The password is compared against the configured bcrypt hash on the blocking
    /// thread pool; the username must match exactly. The token subject is the username.
    ///
    /// # Returns
    /// - `Ok(String)`: Signed access token valid for 24 hours
    /// - `Err(AuthError::InvalidCredentials)`: Username or password mismatch
    /// - `Err(AppError)`: Configured hash is malformed or signing failed
    pub async fn login(&self, username: String, password: String) -> Result<String, AppError> {
        let password_hash = self.credentials.password_hash.clone();

        let password_valid =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
                .await
                .map_err(|e| {
                    AppError::InternalError(format!("Password verification task failed: {}", e))
                })??;

        if !password_valid || username != self.credentials.username {
            return Err(AuthError::InvalidCredentials(username).into());
        }

        tracing::info!("Issued access token for {}", username);

        self.tokens.issue(&username)
    }
}
