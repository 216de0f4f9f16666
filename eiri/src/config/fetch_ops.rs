use crate::app::EiriAppError;
use std::path::Path;

/// reads text from a local path or an http(s) URL.
///
/// # Result
///
/// the body as a string, or [`EiriAppError::SourceUnavailable`] naming the
/// location when it cannot be retrieved.
pub async fn read_location(location: &str) -> Result<String, EiriAppError> {
    if is_url(location) {
        fetch_url(location).await
    } else {
        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| EiriAppError::SourceUnavailable {
                location: location.to_string(),
                message: e.to_string(),
            })
    }
}

/// joins a relative path onto `base`, leaving absolute paths alone
pub(crate) fn rebase_path(path: &str, base: &Path) -> String {
    let p = Path::new(path);
    if p.is_absolute() {
        path.to_string()
    } else {
        base.join(p).to_string_lossy().into_owned()
    }
}

pub(crate) fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

async fn fetch_url(url: &str) -> Result<String, EiriAppError> {
    let unavailable = |message: String| EiriAppError::SourceUnavailable {
        location: url.to_string(),
        message,
    };
    log::debug!("GET {url}");
    let response = reqwest::get(url)
        .await
        .map_err(|e| unavailable(format!("GET request failed: {e}")))?
        .error_for_status()
        .map_err(|e| unavailable(format!("server responded with {e}")))?;
    response
        .text()
        .await
        .map_err(|e| unavailable(format!("reading response failed: {e}")))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.org/agg.csv"));
        assert!(is_url("http://localhost:8080/data/agg.csv"));
        assert!(!is_url("data/agg.csv"));
        assert!(!is_url("/var/data/https.csv"));
    }

    #[test]
    fn test_rebase_path() {
        let base = Path::new("conf");
        assert_eq!(
            rebase_path("agg.csv", base),
            Path::new("conf").join("agg.csv").to_string_lossy()
        );
        let absolute = std::env::temp_dir().join("agg.csv");
        let absolute = absolute.to_string_lossy();
        assert_eq!(rebase_path(&absolute, base), absolute);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let result = read_location("does/not/exist.csv").await;
        match result {
            Err(EiriAppError::SourceUnavailable { location, .. }) => {
                assert_eq!(location, "does/not/exist.csv")
            }
            other => panic!("expected SourceUnavailable, found {other:?}"),
        }
    }
}
