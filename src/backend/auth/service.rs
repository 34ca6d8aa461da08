/**
 * User Service
 *
 * Registration and login. Registration enforces email uniqueness, hashes
 * the password and derives the avatar; login checks the password and
 * issues a token.
 */

use std::sync::Arc;

use bcrypt::{hash, verify};

use crate::backend::auth::handlers::types::{LoginRequest, RegisterRequest};
use crate::backend::auth::sessions::{Claim, TokenService};
use crate::backend::error::BackendError;
use crate::backend::store::Store;
use crate::shared::{NewUser, User};

/// Verified against when the email is unknown so both login failures cost
/// one bcrypt round
const DUMMY_PASSWORD: &str = "not-a-real-password";

/// Registration and login over the credential store
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn Store>,
    tokens: TokenService,
    password_cost: u32,
    dummy_hash: Option<Arc<str>>,
}

impl UserService {
    /// Create a user service; `password_cost` is the bcrypt cost factor
    pub fn new(store: Arc<dyn Store>, tokens: TokenService, password_cost: u32) -> Self {
        let dummy_hash = match hash(DUMMY_PASSWORD, password_cost) {
            Ok(dummy) => Some(Arc::from(dummy)),
            Err(e) => {
                tracing::error!("Failed to prepare login dummy hash: {:?}", e);
                None
            }
        };

        Self {
            store,
            tokens,
            password_cost,
            dummy_hash,
        }
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// * `Duplicate` - if the email is already registered
    /// * `Internal` - if hashing or the store fails
    pub async fn register(&self, request: RegisterRequest) -> Result<User, BackendError> {
        if self.store.find_user_by_email(&request.email).await?.is_some() {
            tracing::warn!("Email already registered: {}", request.email);
            return Err(BackendError::duplicate("email"));
        }

        let password_hash = hash(&request.password, self.password_cost).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::internal(e.to_string())
        })?;

        let user = self
            .store
            .insert_user(NewUser::new(request.username, request.email, password_hash))
            .await?;

        tracing::info!("User registered: {} ({})", user.username, user.email);
        Ok(user)
    }

    /// Check credentials and issue a token
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` - unknown email or wrong password
    /// * `Internal` - if hashing, signing or the store fails
    pub async fn login(&self, request: LoginRequest) -> Result<(String, User), BackendError> {
        let Some(user) = self.store.find_user_by_email(&request.email).await? else {
            tracing::warn!("Login for unknown email: {}", request.email);
            if let Some(dummy) = &self.dummy_hash {
                let _ = verify(&request.password, dummy);
            }
            return Err(BackendError::InvalidCredentials);
        };

        let valid = verify(&request.password, &user.password_hash).map_err(|e| {
            tracing::error!("Password verification error: {:?}", e);
            BackendError::internal(e.to_string())
        })?;

        if !valid {
            tracing::warn!("Invalid password for user: {}", user.email);
            return Err(BackendError::InvalidCredentials);
        }

        let token = self.tokens.issue(&Claim {
            user_id: user.id,
            email: user.email.clone(),
        })?;

        tracing::info!("User logged in: {} ({})", user.username, user.email);
        Ok((token, user))
    }
}
