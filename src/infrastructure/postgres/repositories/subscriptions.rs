use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into};
use std::sync::Arc;

use crate::{
    domain::{
        entities::subscriptions::InsertSubscriptionEntity,
        repositories::subscriptions::SubscriptionRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::subscriptions},
};

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn subscribe(
        &self,
        insert_subscription_entity: InsertSubscriptionEntity,
    ) -> Result<usize> {
        let db_pool = Arc::clone(&self.db_pool);

        tokio::task::spawn_blocking(move || -> Result<usize> {
            let mut conn = db_pool.get()?;

            let result = insert_into(subscriptions::table)
                .values(&insert_subscription_entity)
                .execute(&mut conn)?;

            Ok(result)
        })
        .await?
    }
}
