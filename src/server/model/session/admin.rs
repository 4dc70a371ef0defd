use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_ADMIN_KEY: &str = "utiles:admin";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAdmin(pub bool);

impl SessionAdmin {
    /// Mark the session as holding the admin role
    pub async fn insert(session: &Session) -> Result<(), Error> {
        session.insert(SESSION_ADMIN_KEY, SessionAdmin(true)).await?;

        Ok(())
    }

    /// Whether the session holds the admin role
    pub async fn get(session: &Session) -> Result<bool, Error> {
        Ok(session
            .get::<SessionAdmin>(SESSION_ADMIN_KEY)
            .await?
            .is_some_and(|SessionAdmin(is_admin)| is_admin))
    }

    /// Remove the admin role from the session
    pub async fn remove(session: &Session) -> Result<(), Error> {
        session.remove::<SessionAdmin>(SESSION_ADMIN_KEY).await?;

        Ok(())
    }
}
