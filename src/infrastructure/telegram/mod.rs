pub mod telegram_client;
