use crate::shared::entity::{Entity, ID};

/// A folder grouping `Note`s for a `User`
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub user_id: ID,
}

impl Theme {
    pub fn new(name: String, user_id: ID) -> Self {
        Self {
            id: Default::default(),
            name,
            description: None,
            user_id,
        }
    }
}

impl Entity for Theme {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
