mod inmemory;
mod mongo;

use crate::repos::shared::query_structs::UserPatch;
use crate::repos::shared::repo::InsertError;
use alarmbot_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;
pub use mongo::MongoUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> Result<(), InsertError>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn update_fields(&self, user_id: &ID, patch: &UserPatch) -> anyhow::Result<i64>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarmbot_domain::Entity;

    #[tokio::test]
    async fn crud_roundtrip() {
        let repo = InMemoryUserRepo::new();
        let user = User::new("TestUserName".into(), "en".into());

        assert!(repo.insert(&user).await.is_ok());
        assert!(Entity::eq(&repo.find(&user.id).await.expect("To find user"), &user));

        let patch = UserPatch {
            username: Some("Renamed".into()),
            ..Default::default()
        };
        assert_eq!(repo.update_fields(&user.id, &patch).await.unwrap(), 1);
        assert_eq!(repo.find(&user.id).await.unwrap().username, "Renamed");

        assert!(repo.delete(&user.id).await.is_some());
        assert!(repo.find(&user.id).await.is_none());
    }
}
