pub mod access;
pub mod bookmarks;
pub mod catalog;
pub mod datetime;
pub mod duration;
pub mod gravatar;
pub mod helpers;
pub mod number;
pub mod pagination;
pub mod text;
pub mod timesince;
pub mod values;
pub mod version;

pub use crate::domain::model::{Group, Page, Viewer};
pub use crate::domain::ports::{BookmarkStore, SettingsProvider};
pub use crate::utils::error::Result;
