//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/advent` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Resolve a reward source: absolute URLs pass through, relative paths are
/// anchored at the deployment base.
#[must_use]
pub fn reward_src(src: &str) -> String {
    if is_absolute(src) {
        src.to_string()
    } else {
        asset_path(src)
    }
}

fn is_absolute(src: &str) -> bool {
    src.starts_with("//")
        || src.starts_with("data:")
        || src
            .split_once("://")
            .is_some_and(|(scheme, _)| !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic()))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, reward_src};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("img/hug.png"), "/img/hug.png");
        assert_eq!(asset_path("/img/hug.png"), "/img/hug.png");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("img/hug.png", "/advent"),
            "/advent/img/hug.png"
        );
        assert_eq!(
            super::asset_path_with_base("/img/hug.png", "/advent/"),
            "/advent/img/hug.png"
        );
    }

    #[test]
    fn absolute_reward_urls_pass_through() {
        let url = "https://placehold.co/150x100/7F11E8/white?text=Day+11";
        assert_eq!(reward_src(url), url);
        assert_eq!(reward_src("//cdn.example/a.png"), "//cdn.example/a.png");
        assert_eq!(reward_src("img/nuts.png"), "/img/nuts.png");
    }
}
