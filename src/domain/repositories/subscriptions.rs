use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::subscriptions::InsertSubscriptionEntity;

#[async_trait]
#[automock]
pub trait SubscriptionRepository {
    /// Inserts one `subscriptions` row and returns the affected row count. No deduplication.
    async fn subscribe(
        &self,
        insert_subscription_entity: InsertSubscriptionEntity,
    ) -> Result<usize>;
}
