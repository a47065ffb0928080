pub const DEFAULT_BASE_URL: &str = "https://secure.gravatar.com";
/// The grey "mystery man" silhouette.
pub const DEFAULT_IMAGE: &str = "mm";

pub fn gravatar_url(
    email: &str,
    size: Option<u32>,
    default: Option<&str>,
    base_url: &str,
) -> String {
    let hash = md5::compute(email.trim().to_lowercase().as_bytes());
    let mut avatar = format!("{}/avatar/{:x}", base_url.trim_end_matches('/'), hash);

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    let mut has_params = false;
    if let Some(size) = size.filter(|s| *s > 0) {
        query.append_pair("s", &size.to_string());
        has_params = true;
    }
    if let Some(default) = default.filter(|d| !d.is_empty()) {
        query.append_pair("d", default);
        has_params = true;
    }
    if has_params {
        avatar.push('?');
        avatar.push_str(&query.finish());
    }
    avatar
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0bc83cb571cd1c50ba6f3e8a78ef1346";

    #[test]
    fn test_hash_is_case_and_space_insensitive() {
        let url = gravatar_url(" MyEmailAddress@example.com ", None, None, DEFAULT_BASE_URL);
        assert_eq!(url, format!("https://secure.gravatar.com/avatar/{}", HASH));
    }

    #[test]
    fn test_query_parameters() {
        let url = gravatar_url(
            "myemailaddress@example.com",
            Some(64),
            Some(DEFAULT_IMAGE),
            "https://gravatar.example.org/",
        );
        assert_eq!(url, format!("https://gravatar.example.org/avatar/{}?s=64&d=mm", HASH));
    }

    #[test]
    fn test_default_image_is_encoded() {
        let url = gravatar_url("a@b.c", None, Some("https://x.y/z.png"), DEFAULT_BASE_URL);
        assert!(url.ends_with("?d=https%3A%2F%2Fx.y%2Fz.png"));
    }
}
