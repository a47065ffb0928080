use crate::domain::model::{GroupStatus, MemberType, ProjectKey, Viewer};

/// DSN shown in setup instructions: the shared project key when one exists,
/// otherwise the viewer's personal key.
pub fn project_dsn<'a>(viewer: &Viewer, keys: &'a [ProjectKey]) -> Option<&'a str> {
    if !viewer.is_authenticated {
        return None;
    }
    keys.iter()
        .find(|k| k.user_id.is_none())
        .or_else(|| keys.iter().find(|k| k.user_id == Some(viewer.id)))
        .map(|k| k.dsn.as_str())
}

pub fn needs_access_group_migration(
    viewer: &Viewer,
    membership: Option<MemberType>,
    has_access_groups: bool,
) -> bool {
    let has_org_access = membership.is_some_and(|m| m <= MemberType::Admin);
    if !(viewer.is_superuser || has_org_access) {
        return false;
    }
    has_access_groups
}

pub fn user_display_name(viewer: &Viewer) -> &str {
    if viewer.first_name.is_empty() {
        &viewer.username
    } else {
        &viewer.first_name
    }
}

pub fn is_muted(status: GroupStatus) -> bool {
    status == GroupStatus::Muted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Vec<ProjectKey> {
        vec![
            ProjectKey {
                user_id: Some(7),
                dsn: "https://personal@app.example.com/1".to_string(),
            },
            ProjectKey {
                user_id: None,
                dsn: "https://shared@app.example.com/1".to_string(),
            },
        ]
    }

    #[test]
    fn test_project_dsn_prefers_shared_key() {
        let viewer = Viewer::authenticated(7, "jane");
        assert_eq!(project_dsn(&viewer, &keys()), Some("https://shared@app.example.com/1"));
    }

    #[test]
    fn test_project_dsn_falls_back_to_personal_key() {
        let viewer = Viewer::authenticated(7, "jane");
        let personal = vec![keys().remove(0)];
        assert_eq!(project_dsn(&viewer, &personal), Some("https://personal@app.example.com/1"));
        assert_eq!(project_dsn(&Viewer::authenticated(8, "joe"), &personal), None);
        assert_eq!(project_dsn(&Viewer::anonymous(), &keys()), None);
    }

    #[test]
    fn test_access_group_migration() {
        let viewer = Viewer::authenticated(1, "jane");
        assert!(needs_access_group_migration(&viewer, Some(MemberType::Owner), true));
        assert!(needs_access_group_migration(&viewer, Some(MemberType::Admin), true));
        assert!(!needs_access_group_migration(&viewer, Some(MemberType::Member), true));
        assert!(!needs_access_group_migration(&viewer, Some(MemberType::Admin), false));
        assert!(!needs_access_group_migration(&viewer, None, true));

        let superuser = Viewer {
            is_superuser: true,
            ..viewer
        };
        assert!(needs_access_group_migration(&superuser, None, true));
    }

    #[test]
    fn test_display_name_and_muted() {
        let mut viewer = Viewer::authenticated(1, "jdoe");
        assert_eq!(user_display_name(&viewer), "jdoe");
        viewer.first_name = "Jane".to_string();
        assert_eq!(user_display_name(&viewer), "Jane");
        assert!(is_muted(GroupStatus::Muted));
        assert!(!is_muted(GroupStatus::Resolved));
    }
}
