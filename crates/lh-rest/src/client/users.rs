//! User operations.

use linkhaven_client::ApiRequest;
use tracing::instrument;

use crate::error::Result;
use crate::user::{User, UserStats};

impl super::RestClient {
    /// Fetch the user the API key belongs to.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User> {
        let response = self.inner().request(ApiRequest::get("users/me")).await?;
        Ok(response.into_typed()?)
    }

    /// Fetch usage totals for the current user.
    #[instrument(skip(self))]
    pub async fn user_stats(&self) -> Result<UserStats> {
        let response = self
            .inner()
            .request(ApiRequest::get("users/me/stats"))
            .await?;
        Ok(response.into_typed()?)
    }
}
