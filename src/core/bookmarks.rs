use crate::domain::model::{Group, GroupMetadata, Viewer};
use crate::domain::ports::BookmarkStore;
use crate::utils::error::Result;
use std::collections::HashSet;

fn bookmarked_set<S: BookmarkStore + ?Sized>(
    groups: &[Group],
    viewer: &Viewer,
    store: &S,
) -> Result<HashSet<u64>> {
    if !viewer.is_authenticated || groups.is_empty() {
        return Ok(HashSet::new());
    }
    let ids: Vec<u64> = groups.iter().map(|g| g.id).collect();
    let bookmarks = store.bookmarked_ids(viewer.id, &ids)?;
    tracing::debug!(
        "Loaded {} bookmarks for user {} across {} groups",
        bookmarks.len(),
        viewer.id,
        ids.len()
    );
    Ok(bookmarks)
}

/// Pairs every group with whether the viewer bookmarked it, in one store lookup.
pub fn as_bookmarks<S: BookmarkStore + ?Sized>(
    groups: Vec<Group>,
    viewer: &Viewer,
    store: &S,
) -> Result<Vec<(Group, bool)>> {
    let bookmarks = bookmarked_set(&groups, viewer, store)?;
    Ok(groups
        .into_iter()
        .map(|g| {
            let marked = bookmarks.contains(&g.id);
            (g, marked)
        })
        .collect())
}

pub fn with_metadata<S: BookmarkStore + ?Sized>(
    groups: Vec<Group>,
    viewer: &Viewer,
    store: &S,
) -> Result<Vec<(Group, GroupMetadata)>> {
    let bookmarks = bookmarked_set(&groups, viewer, store)?;
    // TODO: fill historical_data from the time-series backend once it exposes per-group rollups
    Ok(groups
        .into_iter()
        .map(|g| {
            let metadata = GroupMetadata {
                is_bookmarked: bookmarks.contains(&g.id),
                historical_data: String::new(),
            };
            (g, metadata)
        })
        .collect())
}

pub fn is_bookmarked<S: BookmarkStore + ?Sized>(
    group: &Group,
    viewer: &Viewer,
    store: &S,
) -> Result<bool> {
    if !viewer.is_authenticated {
        return Ok(false);
    }
    Ok(store.bookmarked_ids(viewer.id, &[group.id])?.contains(&group.id))
}
