use tracing::{debug, info, warn};

use crate::db::SeekrStore;
use crate::error::SeekrError;
use crate::types::user::{Profile, Role, User};

pub async fn signup(
    store: &dyn SeekrStore,
    email: &str,
    password: &str,
    role: Role,
) -> Result<(), SeekrError> {
    store
        .insert_user(User::new(email, password, role))
        .await
        .inspect_err(|e| {
            if matches!(e, SeekrError::EmailTaken) {
                warn!(%email, "signup rejected: email already registered");
            }
        })?;
    info!(%email, %role, "user signed up");
    Ok(())
}

/// Returns the role recorded at signup.
pub async fn login(store: &dyn SeekrStore, email: &str, password: &str) -> Result<Role, SeekrError> {
    match store.find_user(email).await? {
        Some(user) if user.password == password => {
            debug!(%email, "login ok");
            Ok(user.role)
        }
        _ => {
            warn!(%email, "login rejected");
            Err(SeekrError::InvalidCredentials)
        }
    }
}

pub async fn update_profile(
    store: &dyn SeekrStore,
    email: &str,
    profile: Profile,
) -> Result<(), SeekrError> {
    if !store.save_profile(email, profile).await? {
        return Err(SeekrError::EmailNotRegistered);
    }
    info!(%email, "profile updated");
    Ok(())
}
