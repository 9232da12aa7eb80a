mod alarm;
mod note;
mod status;
mod theme;
mod user;

pub mod dtos {
    pub use crate::alarm::dtos::*;
    pub use crate::note::dtos::*;
    pub use crate::theme::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::alarm::api::*;
pub use crate::note::api::*;
pub use crate::status::api::*;
pub use crate::theme::api::*;
pub use crate::user::api::*;
