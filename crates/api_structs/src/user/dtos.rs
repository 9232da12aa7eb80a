use alarmbot_domain::{User, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub username: String,
    pub lang_code: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            lang_code: user.lang_code,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}
