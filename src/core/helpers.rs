use crate::core::catalog::Catalog;
use crate::core::{datetime, duration, gravatar, number, pagination, text, timesince};
use crate::domain::model::Page;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Helpers bound to one set of settings and one translation catalog.
pub struct ViewHelpers<C: SettingsProvider> {
    settings: C,
    catalog: Catalog,
}

impl<C: SettingsProvider> ViewHelpers<C> {
    pub fn new(settings: C, catalog: Catalog) -> Self {
        tracing::debug!(
            "View helpers ready: {} translations, per_page={}, threshold_days={}",
            catalog.len(),
            settings.per_page(),
            settings.threshold_days()
        );
        Self { settings, catalog }
    }

    pub fn settings(&self) -> &C {
        &self.settings
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn small_count(&self, value: i64) -> Result<String> {
        number::small_count(value, &self.catalog)
    }

    pub fn duration(&self, millis: f64) -> Result<String> {
        duration::format_duration(millis)
    }

    pub fn time_since<Tz: TimeZone, Nz: TimeZone>(
        &self,
        value: Option<&DateTime<Tz>>,
        now: &DateTime<Nz>,
    ) -> timesince::RelativeTime {
        timesince::time_since(value, now, self.settings.threshold_days(), &self.catalog)
    }

    pub fn date<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        datetime::format_date(dt, self.settings.date_format())
    }

    pub fn localized_datetime<Tz: TimeZone>(
        &self,
        dt: &DateTime<Tz>,
        format: Option<&str>,
    ) -> String {
        let format = format.unwrap_or_else(|| self.settings.datetime_format());
        datetime::localized_datetime(dt, &self.settings.timezone(), format)
    }

    pub fn soft_wrap(&self, value: &str) -> Result<String> {
        text::soft_wrap(value, text::DEFAULT_BREAK_AFTER)
    }

    pub fn gravatar_url(&self, email: &str, size: Option<u32>) -> String {
        gravatar::gravatar_url(
            email,
            size,
            Some(self.settings.gravatar_default()),
            self.settings.gravatar_base_url(),
        )
    }

    /// Page of `items` selected by the page parameter in `query`.
    pub fn paginate<T: Clone>(&self, items: &[T], query: &str) -> Result<Page<T>> {
        let page = pagination::page_number(query, self.settings.page_param());
        let result = pagination::paginate(items, page, self.settings.per_page())?;
        tracing::debug!(
            "Page {} with {} objects (has_next={})",
            result.number,
            result.objects.len(),
            result.has_next
        );
        Ok(result)
    }

    pub fn querystring(&self, query: &str) -> String {
        pagination::querystring(query, self.settings.page_param())
    }
}
