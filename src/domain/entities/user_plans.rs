use diesel::prelude::*;

use crate::infrastructure::postgres::schema::user_plans;

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = user_plans)]
pub struct InsertUserPlanEntity {
    pub telegram_id: i64,
    pub plan: String,
}
