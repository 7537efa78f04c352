use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    application::{interfaces::telegram_gateway::TelegramGateway, usecases::auth::AuthUseCase},
    config::config_model::DotEnvyConfig,
    domain::value_objects::telegram_logins::{AuthResponse, TelegramLogin},
    infrastructure::{
        axum_http::error_responses::AppError, telegram::telegram_client::TelegramClient,
    },
};

pub fn routes(config: Arc<DotEnvyConfig>) -> Router {
    let telegram_gateway = TelegramClient::new(&config.telegram);
    let auth_usecase = AuthUseCase::new(Arc::new(telegram_gateway), config.telegram.clone());

    router(Arc::new(auth_usecase))
}

pub fn router<T>(auth_usecase: Arc<AuthUseCase<T>>) -> Router
where
    T: TelegramGateway + Send + Sync + 'static,
{
    Router::new()
        .route("/auth/", get(authenticate::<T>))
        .with_state(auth_usecase)
}

pub async fn authenticate<T>(
    State(auth_usecase): State<Arc<AuthUseCase<T>>>,
    Query(login): Query<TelegramLogin>,
) -> Result<Json<AuthResponse>, AppError>
where
    T: TelegramGateway + Send + Sync + 'static,
{
    let response = auth_usecase.authenticate(login).await?;

    Ok(Json(response))
}
