mod inmemory;
mod mongo;

use crate::repos::shared::query_structs::ThemePatch;
use crate::repos::shared::repo::InsertError;
use alarmbot_domain::{Theme, ID};
pub use inmemory::InMemoryThemeRepo;
pub use mongo::MongoThemeRepo;

#[async_trait::async_trait]
pub trait IThemeRepo: Send + Sync {
    async fn insert(&self, theme: &Theme) -> Result<(), InsertError>;
    async fn find(&self, theme_id: &ID) -> Option<Theme>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Theme>>;
    async fn update_fields(&self, theme_id: &ID, patch: &ThemePatch) -> anyhow::Result<i64>;
    async fn delete(&self, theme_id: &ID) -> Option<Theme>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarmbot_domain::Entity;

    #[tokio::test]
    async fn crud_roundtrip() {
        let repo = InMemoryThemeRepo::new();
        let user_id: ID = Default::default();
        let mut theme = Theme::new("Groceries".into(), user_id.clone());
        theme.description = Some("Weekly shopping".into());

        assert!(repo.insert(&theme).await.is_ok());
        assert!(Entity::eq(&repo.find(&theme.id).await.expect("To find theme"), &theme));

        let by_user = repo.find_by_user(&user_id).await.unwrap();
        assert_eq!(by_user.len(), 1);
        assert!(repo.find_by_user(&Default::default()).await.unwrap().is_empty());

        let patch = ThemePatch {
            name: Some("Food".into()),
            ..Default::default()
        };
        assert_eq!(repo.update_fields(&theme.id, &patch).await.unwrap(), 1);
        let updated = repo.find(&theme.id).await.unwrap();
        assert_eq!(updated.name, "Food");
        assert_eq!(updated.description, theme.description);

        assert!(repo.delete(&theme.id).await.is_some());
        assert!(repo.find(&theme.id).await.is_none());
    }
}
