mod alarm;
mod note;
mod shared;
mod theme;
mod user;

pub use alarm::{Alarm, AlarmLinks, AlarmStatus, AlarmTimes};
pub use note::{CheckPoint, Note, NoteData, NoteLinks, NoteTimes};
pub use shared::entity::{Entity, ID};
pub use theme::Theme;
pub use user::User;
