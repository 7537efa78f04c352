use serde::{Deserialize, Serialize};

/// Biometrics submitted by the Web App. Lives only for the duration of one request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub telegram_id: i64,
    pub age: i32,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    /// Usually `weight_loss`, `muscle_gain` or `tone`; not validated.
    pub goal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratePlanResponse {
    pub plan: String,
}
