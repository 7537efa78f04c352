pub mod auth;
pub mod subscriptions;
pub mod user_plans;
