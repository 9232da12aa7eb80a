use super::IThemeRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::ThemePatch;
use crate::repos::shared::repo::InsertError;
use alarmbot_domain::{Theme, ID};

pub struct InMemoryThemeRepo {
    themes: std::sync::Mutex<Vec<Theme>>,
}

impl InMemoryThemeRepo {
    pub fn new() -> Self {
        Self {
            themes: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryThemeRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IThemeRepo for InMemoryThemeRepo {
    async fn insert(&self, theme: &Theme) -> Result<(), InsertError> {
        insert(theme, &self.themes)
    }

    async fn find(&self, theme_id: &ID) -> Option<Theme> {
        find(theme_id, &self.themes)
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Theme>> {
        Ok(find_by(&self.themes, |theme| theme.user_id == *user_id))
    }

    async fn update_fields(&self, theme_id: &ID, patch: &ThemePatch) -> anyhow::Result<i64> {
        let patch = patch.clone();
        Ok(update_one(theme_id, &self.themes, move |theme| {
            if let Some(name) = patch.name {
                theme.name = name;
            }
            if let Some(description) = patch.description {
                theme.description = Some(description);
            }
        }))
    }

    async fn delete(&self, theme_id: &ID) -> Option<Theme> {
        delete(theme_id, &self.themes)
    }
}
