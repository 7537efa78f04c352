use diesel::prelude::*;

use crate::{
    domain::value_objects::enums::subscription_tiers::SubscriptionTier,
    infrastructure::postgres::schema::subscriptions,
};

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = subscriptions)]
pub struct InsertSubscriptionEntity {
    pub telegram_id: i64,
    pub plan: String,
    pub price: i32,
    pub duration: i32,
}

impl InsertSubscriptionEntity {
    /// Row for a purchase of `tier`, priced from the static catalog.
    pub fn for_tier(telegram_id: i64, tier: SubscriptionTier) -> Self {
        let terms = tier.terms();

        Self {
            telegram_id,
            plan: tier.to_string(),
            price: terms.price,
            duration: terms.duration_days,
        }
    }
}
