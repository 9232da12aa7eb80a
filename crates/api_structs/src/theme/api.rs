use serde::{Deserialize, Serialize};

use crate::dtos::ThemeDTO;
use alarmbot_domain::{Theme, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub theme: ThemeDTO,
}

impl ThemeResponse {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: ThemeDTO::new(theme),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemesResponse {
    pub themes: Vec<ThemeDTO>,
}

impl ThemesResponse {
    pub fn new(themes: Vec<Theme>) -> Self {
        Self {
            themes: themes.into_iter().map(ThemeDTO::new).collect(),
        }
    }
}

pub mod create_theme {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub description: Option<String>,
        pub user_id: ID,
    }

    pub type APIResponse = ThemeResponse;
}

pub mod get_theme {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub theme_id: ID,
    }

    pub type APIResponse = ThemeResponse;
}

pub mod get_themes_by_user {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = ThemesResponse;
}

pub mod update_theme {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub theme_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub update_count: i64,
    }
}

pub mod delete_theme {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub theme_id: ID,
    }

    pub type APIResponse = ThemeResponse;
}
