use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::subscription_tiers::SubscriptionTier;

#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeQuery {
    pub telegram_id: i64,
    pub plan: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscribeResponse {
    pub message: String,
    pub plan: String,
    pub price: i32,
}

impl SubscribeResponse {
    pub fn successful(tier: SubscriptionTier) -> Self {
        Self {
            message: "Subscription successful".to_string(),
            plan: tier.to_string(),
            price: tier.terms().price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionPlanDto {
    pub plan: String,
    pub price: i32,
    pub duration: i32,
}

impl From<SubscriptionTier> for SubscriptionPlanDto {
    fn from(value: SubscriptionTier) -> Self {
        let terms = value.terms();

        Self {
            plan: value.to_string(),
            price: terms.price,
            duration: terms.duration_days,
        }
    }
}
