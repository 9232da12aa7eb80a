use alarmbot_domain::{AlarmStatus, ID};

/// Structural equality filter over stored `Alarm` fields. Empty query
/// matches everything up to `limit`.
#[derive(Debug, Clone, Default)]
pub struct AlarmQuery {
    pub status: Option<AlarmStatus>,
    pub user_id: Option<ID>,
    pub parent_id: Option<ID>,
    /// Caps the result set, mongo fetches at most this many documents
    pub limit: Option<i64>,
}

/// Sparse field patch for `Alarm`, absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct AlarmPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<AlarmStatus>,
    pub next_notion_time: Option<i64>,
    pub end_time: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct NoteQuery {
    pub user_id: Option<ID>,
    pub theme_id: Option<ID>,
}

#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub name: Option<String>,
    pub text: Option<String>,
    pub end_time: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct ThemePatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
