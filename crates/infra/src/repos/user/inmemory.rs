use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::UserPatch;
use crate::repos::shared::repo::InsertError;
use alarmbot_domain::{User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> Result<(), InsertError> {
        insert(user, &self.users)
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn update_fields(&self, user_id: &ID, patch: &UserPatch) -> anyhow::Result<i64> {
        let patch = patch.clone();
        Ok(update_one(user_id, &self.users, move |user| {
            if let Some(username) = patch.username {
                user.username = username;
            }
            if let Some(first_name) = patch.first_name {
                user.first_name = Some(first_name);
            }
            if let Some(last_name) = patch.last_name {
                user.last_name = Some(last_name);
            }
        }))
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        delete(user_id, &self.users)
    }
}
