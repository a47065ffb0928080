use crate::utils::error::Result;
use chrono::FixedOffset;
use std::collections::HashSet;

/// Lookup of the groups a user has bookmarked.
pub trait BookmarkStore: Send + Sync {
    fn bookmarked_ids(&self, user_id: u64, group_ids: &[u64]) -> Result<HashSet<u64>>;
}

pub trait SettingsProvider: Send + Sync {
    fn per_page(&self) -> usize;
    fn page_param(&self) -> &str;
    fn threshold_days(&self) -> i64;
    fn gravatar_base_url(&self) -> &str;
    fn gravatar_default(&self) -> &str;
    fn timezone(&self) -> FixedOffset;
    fn date_format(&self) -> &str;
    fn datetime_format(&self) -> &str;
}
