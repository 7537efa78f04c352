use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::{
    application::usecases::subscriptions::SubscriptionUseCase,
    domain::{
        repositories::subscriptions::SubscriptionRepository,
        value_objects::subscriptions::{SubscribeQuery, SubscribeResponse, SubscriptionPlanDto},
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{
            postgres_connection::PgPoolSquad, repositories::subscriptions::SubscriptionPostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let subscriptions_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let subscriptions_usecase = SubscriptionUseCase::new(Arc::new(subscriptions_repository));

    router(Arc::new(subscriptions_usecase))
}

pub fn router<T>(subscriptions_usecase: Arc<SubscriptionUseCase<T>>) -> Router
where
    T: SubscriptionRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/plans/", get(list_plans::<T>))
        .route("/subscribe/", post(subscribe::<T>))
        .with_state(subscriptions_usecase)
}

pub async fn list_plans<T>(
    State(subscriptions_usecase): State<Arc<SubscriptionUseCase<T>>>,
) -> Json<Vec<SubscriptionPlanDto>>
where
    T: SubscriptionRepository + Send + Sync + 'static,
{
    Json(subscriptions_usecase.list_plans())
}

pub async fn subscribe<T>(
    State(subscriptions_usecase): State<Arc<SubscriptionUseCase<T>>>,
    Query(subscribe_query): Query<SubscribeQuery>,
) -> Result<Json<SubscribeResponse>, AppError>
where
    T: SubscriptionRepository + Send + Sync + 'static,
{
    let response = subscriptions_usecase
        .subscribe(subscribe_query.telegram_id, &subscribe_query.plan)
        .await?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::subscriptions::InsertSubscriptionEntity,
        repositories::subscriptions::MockSubscriptionRepository,
    };
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use mockall::predicate::eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn subscribe_monthly() {
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

        let app = router(Arc::new(SubscriptionUseCase::new(Arc::new(subscription_repo))));

        let (status, body) = send(app, "POST", "/subscribe/?telegram_id=42&plan=monthly").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "Subscription successful", "plan": "monthly", "price": 10})
        );
    }

    #[tokio::test]
    async fn subscribe_unknown_plan_is_bad_request() {
        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo.expect_subscribe().never();

        let app = router(Arc::new(SubscriptionUseCase::new(Arc::new(subscription_repo))));

        let (status, body) = send(app, "POST", "/subscribe/?telegram_id=42&plan=weekly").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"code": 400, "detail": "Invalid subscription plan"}));
    }

    #[tokio::test]
    async fn database_failure_hides_detail() {
        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo.expect_subscribe().returning(|_| {
            Box::pin(async { Err(anyhow::anyhow!("password authentication failed")) })
        });

        let app = router(Arc::new(SubscriptionUseCase::new(Arc::new(subscription_repo))));

        let (status, body) = send(app, "POST", "/subscribe/?telegram_id=42&plan=annual").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"code": 500, "detail": "Internal server error"}));
    }

    #[tokio::test]
    async fn missing_query_params_are_rejected() {
        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo.expect_subscribe().never();

        let app = router(Arc::new(SubscriptionUseCase::new(Arc::new(subscription_repo))));

        let (status, _) = send(app, "POST", "/subscribe/?plan=monthly").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lists_catalog() {
        let app = router(Arc::new(SubscriptionUseCase::new(Arc::new(
            MockSubscriptionRepository::new(),
        ))));

        let (status, body) = send(app, "GET", "/plans/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"plan": "monthly", "price": 10, "duration": 30},
                {"plan": "quarterly", "price": 24, "duration": 90},
                {"plan": "semiannual", "price": 42, "duration": 180},
                {"plan": "annual", "price": 72, "duration": 365}
            ])
        );
    }
}
