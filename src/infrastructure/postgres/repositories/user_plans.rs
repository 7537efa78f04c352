use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into};
use std::sync::Arc;

use crate::{
    domain::{
        entities::user_plans::InsertUserPlanEntity, repositories::user_plans::UserPlanRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::user_plans},
};

pub struct UserPlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl UserPlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserPlanRepository for UserPlanPostgres {
    async fn insert_plan(&self, insert_user_plan_entity: InsertUserPlanEntity) -> Result<usize> {
        let db_pool = Arc::clone(&self.db_pool);

        // Diesel is synchronous; keep pool checkout and the insert off the async workers.
        tokio::task::spawn_blocking(move || -> Result<usize> {
            let mut conn = db_pool.get()?;

            let result = insert_into(user_plans::table)
                .values(&insert_user_plan_entity)
                .execute(&mut conn)?;

            Ok(result)
        })
        .await?
    }
}
