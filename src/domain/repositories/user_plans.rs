use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::user_plans::InsertUserPlanEntity;

#[async_trait]
#[automock]
pub trait UserPlanRepository {
    /// Inserts one `user_plans` row and returns the affected row count.
    async fn insert_plan(&self, insert_user_plan_entity: InsertUserPlanEntity) -> Result<usize>;
}
