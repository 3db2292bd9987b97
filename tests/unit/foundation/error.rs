use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StillframeError::invalid_config("x")
            .to_string()
            .contains("invalid canvas configuration:")
    );
    assert!(
        StillframeError::fetch(std::io::Error::other("x"))
            .to_string()
            .contains("fetch error:")
    );
    assert!(
        StillframeError::encode(std::io::Error::other("x"))
            .to_string()
            .contains("encode error:")
    );
    assert_eq!(
        StillframeError::MissingContext.to_string(),
        "no drawing surface supplied"
    );
    assert_eq!(
        StillframeError::MissingImageUrl.to_string(),
        "image layer has no image url"
    );
    assert_eq!(
        StillframeError::MissingText.to_string(),
        "text layer has no text"
    );
}

#[test]
fn image_import_message_is_exact() {
    assert_eq!(
        StillframeError::ImageImport.to_string(),
        "Image could not be imported"
    );
}

#[test]
fn fetch_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StillframeError::Fetch(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StillframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
