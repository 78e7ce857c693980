//! Pulls the JSON document out of a model reply.

/// JSON mode normally yields a bare object, but a reply wrapped in a
/// ```` ```json ```` fence or surrounded by prose is accepted too.
pub fn extract_json(response: &str) -> Option<&str> {
    let trimmed = response.trim();

    if trimmed.starts_with('{') && serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return Some(trimmed);
    }

    if let Some(start) = trimmed.find("```json") {
        let body = &trimmed[start + 7..];
        if let Some(end) = body.find("```") {
            return Some(body[..end].trim());
        }
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    (end > start).then(|| &trimmed[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_object() {
        assert_eq!(extract_json(" {\"a\":1} "), Some("{\"a\":1}"));
    }

    #[test]
    fn fenced_object() {
        let raw = "Here you go:\n```json\n{\"a\": {\"b\": 2}}\n```\nEnjoy";
        assert_eq!(extract_json(raw), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn prose_around_object() {
        assert_eq!(extract_json("sure! {\"x\": []} done"), Some("{\"x\": []}"));
    }

    #[test]
    fn valid_object_mentioning_a_fence_is_kept_whole() {
        let raw = r#"{"title":"Markdown","description":"Wrap data in ```json fences ``` for docs","n":1}"#;
        assert_eq!(extract_json(raw), Some(raw));
    }

    #[test]
    fn nothing_to_extract() {
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json("} backwards {"), None);
    }
}
