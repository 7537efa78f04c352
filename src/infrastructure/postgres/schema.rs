// Tables are provisioned outside this service and carry no surrogate key.
// Diesel needs a primary key declared; `telegram_id` is nominal and not unique.

diesel::table! {
    subscriptions (telegram_id) {
        telegram_id -> Int8,
        plan -> Text,
        price -> Int4,
        duration -> Int4,
    }
}

diesel::table! {
    user_plans (telegram_id) {
        telegram_id -> Int8,
        plan -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(subscriptions, user_plans);
