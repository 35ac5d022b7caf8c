use stash_types::models::User;

use crate::error::Result;
use crate::state::{AppState, with_db};

/// The user a request acts on behalf of.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// There is no authentication: every request belongs to the oldest user,
    /// who is created on demand when the table is empty. Handlers call this
    /// only after their extractors have accepted the request.
    pub async fn resolve(state: &AppState) -> Result<Self> {
        let user = with_db(state, |db| db.current_user()).await?;
        Ok(Self(user.into()))
    }

    pub fn id(&self) -> i64 {
        self.0.id
    }
}
