//! Resolution of image/attachment paths against the asset host

/// Resolves relative asset paths and supplies the placeholder image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    host: String,
    placeholder: String,
}

impl AssetResolver {
    pub fn new(host: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            placeholder: placeholder.into(),
        }
    }

    /// Full URL for an asset path; the placeholder when the path is missing.
    pub fn resolve(&self, path: Option<&str>) -> String {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            None => self.placeholder.clone(),
            Some(p) if p.starts_with("http://") || p.starts_with("https://") => p.to_string(),
            Some(p) if p.starts_with('/') => format!("{}{}", self.host, p),
            Some(p) => format!("{}/{}", self.host, p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AssetResolver {
        AssetResolver::new("https://api.example.org/", "/incident_placeholder.jpg")
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("/uploads/a.png")),
            "https://api.example.org/uploads/a.png"
        );
        assert_eq!(
            r.resolve(Some("uploads/a.png")),
            "https://api.example.org/uploads/a.png"
        );
        assert_eq!(r.resolve(Some("https://cdn/x.png")), "https://cdn/x.png");
    }

    #[test]
    fn test_missing_path_uses_placeholder() {
        let r = resolver();
        assert_eq!(r.resolve(None), "/incident_placeholder.jpg");
        assert_eq!(r.resolve(Some("  ")), "/incident_placeholder.jpg");
    }
}
