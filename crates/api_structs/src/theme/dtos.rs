use alarmbot_domain::{Theme, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDTO {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub user_id: ID,
}

impl ThemeDTO {
    pub fn new(theme: Theme) -> Self {
        Self {
            id: theme.id,
            name: theme.name,
            description: theme.description,
            user_id: theme.user_id,
        }
    }
}
