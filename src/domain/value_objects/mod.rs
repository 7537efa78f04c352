pub mod enums;
pub mod subscriptions;
pub mod telegram_logins;
pub mod user_plans;
