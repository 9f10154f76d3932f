/// Built-in API base URLs of the Copernicus data stores.
///
/// If `source` is already an `http(s)` URL, it is used as-is.
pub fn source_to_base_url(source: &str) -> Option<&'static str> {
    match source {
        "cds" => Some("https://cds.climate.copernicus.eu/api"),
        "ads" => Some("https://ads.atmosphere.copernicus.eu/api"),
        "ewds" => Some("https://ewds.climate.copernicus.eu/api"),
        _ => None,
    }
}

pub fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sources() {
        assert_eq!(
            source_to_base_url("cds"),
            Some("https://cds.climate.copernicus.eu/api")
        );
        assert_eq!(source_to_base_url("ecmwf"), None);
    }

    #[test]
    fn detects_urls() {
        assert!(is_http_url("https://example.org/api"));
        assert!(is_http_url("http://localhost:8080"));
        assert!(!is_http_url("cds"));
    }
}
