use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::user_plans::UserProfile;

#[async_trait]
#[automock]
pub trait PlanGenerator {
    /// Asks the chat-completion provider for a plan and returns the first answer verbatim.
    async fn generate_plan(&self, user_profile: UserProfile) -> Result<String>;
}
