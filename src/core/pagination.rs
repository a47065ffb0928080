use crate::domain::model::Page;
use crate::utils::error::{HelperError, Result};
use url::form_urlencoded;

pub const EVENTS_PER_PAGE: usize = 15;
pub const DEFAULT_PAGE_PARAM: &str = "p";

/// Page requested in a query string such as `"query=foo&p=3"`.
///
/// Missing, malformed or zero values mean the first page.
pub fn page_number(query: &str, key: &str) -> usize {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(name, _)| name == key)
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Endless pagination: the page only knows whether a neighbour exists, not
/// the total count.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Result<Page<T>> {
    if per_page == 0 {
        return Err(HelperError::InvalidArgument {
            field: "per_page".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let number = page.max(1);
    let offset = (number - 1).saturating_mul(per_page);
    let objects: Vec<T> = items.iter().skip(offset).take(per_page).cloned().collect();
    let has_next = items.len() > offset.saturating_add(per_page);

    Ok(Page {
        objects,
        number,
        per_page,
        has_next,
        has_previous: number > 1,
    })
}

/// Re-encodes `query` with every `without` pair removed.
pub fn querystring(query: &str, without: &str) -> String {
    let pairs = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .filter(|(name, _)| name != without);
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn with_page(query: &str, key: &str, page: usize) -> String {
    let base = querystring(query, key);
    let page_pair = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, &page.to_string())
        .finish();
    if base.is_empty() {
        format!("?{}", page_pair)
    } else {
        format!("?{}&{}", base, page_pair)
    }
}

impl<T> Page<T> {
    pub fn next_link(&self, query: &str, key: &str) -> Option<String> {
        self.has_next.then(|| with_page(query, key, self.number + 1))
    }

    pub fn previous_link(&self, query: &str, key: &str) -> Option<String> {
        self.has_previous.then(|| with_page(query, key, self.number - 1))
    }
}
