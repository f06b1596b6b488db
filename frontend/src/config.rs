#[cfg(debug_assertions)]
pub fn asset_base() -> &'static str {
    "/assets"  // trunk serve copies frontend/assets here
}

#[cfg(not(debug_assertions))]
pub fn asset_base() -> &'static str {
    "assets"  // Relative, so the bundle can be hosted under a sub-path
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", asset_base(), name.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_base_and_name() {
        assert_eq!(asset_url("hero-bg.jpg"), format!("{}/hero-bg.jpg", asset_base()));
        assert_eq!(asset_url("/hero-bg.jpg"), format!("{}/hero-bg.jpg", asset_base()));
    }
}
