use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    entities::subscriptions::InsertSubscriptionEntity,
    repositories::subscriptions::SubscriptionRepository,
    value_objects::{
        enums::subscription_tiers::SubscriptionTier,
        subscriptions::{SubscribeResponse, SubscriptionPlanDto},
    },
};

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("Invalid subscription plan")]
    InvalidPlan,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubscriptionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SubscriptionError::InvalidPlan => StatusCode::BAD_REQUEST,
            SubscriptionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, SubscriptionError>;

pub struct SubscriptionUseCase<S>
where
    S: SubscriptionRepository + Send + Sync + 'static,
{
    subscription_repo: Arc<S>,
}

impl<S> SubscriptionUseCase<S>
where
    S: SubscriptionRepository + Send + Sync + 'static,
{
    pub fn new(subscription_repo: Arc<S>) -> Self {
        Self { subscription_repo }
    }

    pub fn list_plans(&self) -> Vec<SubscriptionPlanDto> {
        SubscriptionTier::ALL
            .into_iter()
            .map(SubscriptionPlanDto::from)
            .collect()
    }

    /// Records a purchase. No payment is captured and resubmitting inserts another row.
    pub async fn subscribe(
        &self,
        telegram_id: i64,
        plan_name: &str,
    ) -> UseCaseResult<SubscribeResponse> {
        let tier = SubscriptionTier::from_str(plan_name).ok_or_else(|| {
            let err = SubscriptionError::InvalidPlan;
            warn!(
                telegram_id,
                plan = plan_name,
                status = err.status_code().as_u16(),
                "subscriptions: unknown subscription plan"
            );
            err
        })?;

        let rows_inserted = self
            .subscription_repo
            .subscribe(InsertSubscriptionEntity::for_tier(telegram_id, tier))
            .await
            .map_err(|err| {
                error!(
                    telegram_id,
                    plan = %tier,
                    db_error = ?err,
                    "subscriptions: failed to record subscription"
                );
                SubscriptionError::Internal(err)
            })?;

        info!(
            telegram_id,
            plan = %tier,
            rows_inserted,
            "subscriptions: subscription recorded"
        );

        Ok(SubscribeResponse::successful(tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::subscriptions::MockSubscriptionRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn monthly_subscription_is_recorded_with_catalog_terms() {
        let mut subscription_repo = MockSubscriptionRepository::new();

        subscription_repo
            .expect_subscribe()
            .with(eq(InsertSubscriptionEntity {
                telegram_id: 42,
                plan: "monthly".to_string(),
                price: 10,
                duration: 30,
            }))
            .times(1)
            .returning(|_| Box::pin(async { Ok(1) }));

        let usecase = SubscriptionUseCase::new(Arc::new(subscription_repo));

        let response = usecase.subscribe(42, "monthly").await.unwrap();

        assert_eq!(
            response,
            SubscribeResponse {
                message: "Subscription successful".to_string(),
                plan: "monthly".to_string(),
                price: 10,
            }
        );
    }

    #[tokio::test]
    async fn every_tier_writes_exactly_one_row() {
        for tier in SubscriptionTier::ALL {
            let mut subscription_repo = MockSubscriptionRepository::new();
            let expected = InsertSubscriptionEntity {
                telegram_id: 7,
                plan: tier.to_string(),
                price: tier.terms().price,
                duration: tier.terms().duration_days,
            };

            subscription_repo
                .expect_subscribe()
                .with(eq(expected))
                .times(1)
                .returning(|_| Box::pin(async { Ok(1) }));

            let usecase = SubscriptionUseCase::new(Arc::new(subscription_repo));

            let response = usecase.subscribe(7, tier.as_str()).await.unwrap();
            assert_eq!(response.plan, tier.as_str());
            assert_eq!(response.price, tier.terms().price);
        }
    }

    #[tokio::test]
    async fn unknown_plan_is_rejected_without_writing() {
        for name in ["weekly", "MONTHLY", "", "annual "] {
            let mut subscription_repo = MockSubscriptionRepository::new();
            subscription_repo.expect_subscribe().never();

            let usecase = SubscriptionUseCase::new(Arc::new(subscription_repo));

            let err = usecase.subscribe(42, name).await.unwrap_err();
            assert!(matches!(err, SubscriptionError::InvalidPlan));
            assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
            assert_eq!(err.to_string(), "Invalid subscription plan");
        }
    }

    #[tokio::test]
    async fn database_failure_is_internal() {
        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo
            .expect_subscribe()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("pool timed out")) }));

        let usecase = SubscriptionUseCase::new(Arc::new(subscription_repo));

        let err = usecase.subscribe(42, "annual").await.unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn lists_catalog_in_order() {
        let usecase = SubscriptionUseCase::new(Arc::new(MockSubscriptionRepository::new()));

        let plans: Vec<String> = usecase.list_plans().into_iter().map(|p| p.plan).collect();

        assert_eq!(plans, ["monthly", "quarterly", "semiannual", "annual"]);
    }
}
