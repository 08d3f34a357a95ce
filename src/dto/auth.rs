use serde::Deserialize;

use crate::models::AccountType;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub account_type: AccountType,
}
