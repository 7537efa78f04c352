pub mod plan_generator;
pub mod telegram_gateway;
