use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::{
    application::interfaces::plan_generator::PlanGenerator,
    domain::{
        entities::user_plans::InsertUserPlanEntity,
        repositories::user_plans::UserPlanRepository,
        value_objects::user_plans::{GeneratePlanResponse, UserProfile},
    },
};

#[derive(Debug, Error)]
pub enum UserPlanError {
    #[error("plan generation failed")]
    Provider(#[source] anyhow::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UserPlanError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub type UseCaseResult<T> = std::result::Result<T, UserPlanError>;

pub struct UserPlanUseCase<G, R>
where
    G: PlanGenerator + Send + Sync + 'static,
    R: UserPlanRepository + Send + Sync + 'static,
{
    plan_generator: Arc<G>,
    user_plan_repo: Arc<R>,
}

impl<G, R> UserPlanUseCase<G, R>
where
    G: PlanGenerator + Send + Sync + 'static,
    R: UserPlanRepository + Send + Sync + 'static,
{
    pub fn new(plan_generator: Arc<G>, user_plan_repo: Arc<R>) -> Self {
        Self {
            plan_generator,
            user_plan_repo,
        }
    }

    /// One provider call and one insert per invocation; identical inputs are not cached.
    pub async fn generate_plan(
        &self,
        user_profile: UserProfile,
    ) -> UseCaseResult<GeneratePlanResponse> {
        let telegram_id = user_profile.telegram_id;
        info!(
            telegram_id,
            goal = %user_profile.goal,
            "user_plans: requesting plan from provider"
        );

        let plan = self
            .plan_generator
            .generate_plan(user_profile)
            .await
            .map_err(|err| {
                error!(
                    telegram_id,
                    error = ?err,
                    "user_plans: provider failed to generate plan"
                );
                UserPlanError::Provider(err)
            })?;

        let rows_inserted = self
            .user_plan_repo
            .insert_plan(InsertUserPlanEntity {
                telegram_id,
                plan: plan.clone(),
            })
            .await
            .map_err(|err| {
                error!(
                    telegram_id,
                    db_error = ?err,
                    "user_plans: failed to store generated plan"
                );
                UserPlanError::Internal(err)
            })?;

        info!(
            telegram_id,
            rows_inserted,
            plan_len = plan.len(),
            "user_plans: plan generated and stored"
        );

        Ok(GeneratePlanResponse { plan })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::interfaces::plan_generator::MockPlanGenerator,
        domain::repositories::user_plans::MockUserPlanRepository,
    };
    use mockall::predicate::eq;

    fn sample_profile() -> UserProfile {
        UserProfile {
            telegram_id: 42,
            age: 30,
            weight: 82.5,
            height: 180.0,
            goal: "weight_loss".to_string(),
        }
    }

    #[tokio::test]
    async fn stores_and_returns_provider_text() {
        let mut plan_generator = MockPlanGenerator::new();
        let mut user_plan_repo = MockUserPlanRepository::new();

        plan_generator
            .expect_generate_plan()
            .with(eq(sample_profile()))
            .times(1)
            .returning(|_| Box::pin(async { Ok("Eat well, train often.".to_string()) }));

        user_plan_repo
            .expect_insert_plan()
            .with(eq(InsertUserPlanEntity {
                telegram_id: 42,
                plan: "Eat well, train often.".to_string(),
            }))
            .times(1)
            .returning(|_| Box::pin(async { Ok(1) }));

        let usecase = UserPlanUseCase::new(Arc::new(plan_generator), Arc::new(user_plan_repo));

        let response = usecase.generate_plan(sample_profile()).await.unwrap();

        assert_eq!(response.plan, "Eat well, train often.");
    }

    #[tokio::test]
    async fn identical_requests_are_not_deduplicated() {
        let mut plan_generator = MockPlanGenerator::new();
        let mut user_plan_repo = MockUserPlanRepository::new();

        plan_generator
            .expect_generate_plan()
            .times(2)
            .returning(|_| Box::pin(async { Ok("plan".to_string()) }));

        let mut next_id = 0;
        user_plan_repo
            .expect_insert_plan()
            .times(2)
            .returning(move |_| {
                next_id += 1;
                let id = next_id;
                Box::pin(async move { Ok(id) })
            });

        let usecase = UserPlanUseCase::new(Arc::new(plan_generator), Arc::new(user_plan_repo));

        usecase.generate_plan(sample_profile()).await.unwrap();
        usecase.generate_plan(sample_profile()).await.unwrap();
    }

    #[tokio::test]
    async fn provider_failure_writes_nothing() {
        let mut plan_generator = MockPlanGenerator::new();
        let mut user_plan_repo = MockUserPlanRepository::new();

        plan_generator
            .expect_generate_plan()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("rate limited")) }));
        user_plan_repo.expect_insert_plan().never();

        let usecase = UserPlanUseCase::new(Arc::new(plan_generator), Arc::new(user_plan_repo));

        let err = usecase.generate_plan(sample_profile()).await.unwrap_err();

        assert!(matches!(err, UserPlanError::Provider(_)));
        assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn database_failure_is_internal() {
        let mut plan_generator = MockPlanGenerator::new();
        let mut user_plan_repo = MockUserPlanRepository::new();

        plan_generator
            .expect_generate_plan()
            .returning(|_| Box::pin(async { Ok("plan".to_string()) }));
        user_plan_repo
            .expect_insert_plan()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("connection refused")) }));

        let usecase = UserPlanUseCase::new(Arc::new(plan_generator), Arc::new(user_plan_repo));

        let err = usecase.generate_plan(sample_profile()).await.unwrap_err();

        assert!(matches!(err, UserPlanError::Internal(_)));
    }
}
