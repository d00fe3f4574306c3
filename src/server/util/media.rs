/// Joins a stored `(path, name)` picture pair into a full URL under the
/// media base URL.
pub fn media_url(base: &str, path: &str, name: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        path.trim_matches('/'),
        name
    )
}

#[cfg(test)]
mod tests {
    use super::media_url;

    #[test]
    fn joins_without_duplicate_slashes() {
        assert_eq!(
            media_url("http://localhost:8080/media/", "/listings/42/", "front.jpg"),
            "http://localhost:8080/media/listings/42/front.jpg"
        );
        assert_eq!(
            media_url("http://localhost:8080/media", "listings/42", "front.jpg"),
            "http://localhost:8080/media/listings/42/front.jpg"
        );
    }
}
