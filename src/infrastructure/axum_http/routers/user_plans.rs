use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

use crate::{
    application::{interfaces::plan_generator::PlanGenerator, usecases::user_plans::UserPlanUseCase},
    config::config_model::DotEnvyConfig,
    domain::{
        repositories::user_plans::UserPlanRepository,
        value_objects::user_plans::{GeneratePlanResponse, UserProfile},
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        openai::openai_client::OpenAiClient,
        postgres::{postgres_connection::PgPoolSquad, repositories::user_plans::UserPlanPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>, config: Arc<DotEnvyConfig>) -> Router {
    let plan_generator = OpenAiClient::new(&config.openai);
    let user_plans_repository = UserPlanPostgres::new(Arc::clone(&db_pool));
    let user_plans_usecase =
        UserPlanUseCase::new(Arc::new(plan_generator), Arc::new(user_plans_repository));

    router(Arc::new(user_plans_usecase))
}

pub fn router<G, R>(user_plans_usecase: Arc<UserPlanUseCase<G, R>>) -> Router
where
    G: PlanGenerator + Send + Sync + 'static,
    R: UserPlanRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/generate_plan/", post(generate_plan::<G, R>))
        .with_state(user_plans_usecase)
}

pub async fn generate_plan<G, R>(
    State(user_plans_usecase): State<Arc<UserPlanUseCase<G, R>>>,
    Json(user_profile): Json<UserProfile>,
) -> Result<Json<GeneratePlanResponse>, AppError>
where
    G: PlanGenerator + Send + Sync + 'static,
    R: UserPlanRepository + Send + Sync + 'static,
{
    let response = user_plans_usecase.generate_plan(user_profile).await?;

    Ok(Json(response))
}
