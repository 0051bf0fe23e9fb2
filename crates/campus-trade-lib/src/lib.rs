#[macro_use]
extern crate log;

pub mod error;
pub mod format;
pub mod models;
pub mod search;
pub mod settings;
pub mod tracker;
pub mod upload;
pub mod validate;
pub mod view;

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::models::*;
    pub use crate::settings::Settings;
}
