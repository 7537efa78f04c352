pub mod subscription_tiers;
