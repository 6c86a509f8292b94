//! Mime type predicates shared by the per-media rules.
//!
//! All take the normalized base type from [`WebResourceWrapper::mime_type`].
//!
//! [`WebResourceWrapper::mime_type`]: crate::web_resource::WebResourceWrapper::mime_type

pub fn has_audio_mime_type(mime_type: Option<&str>) -> bool {
    mime_type.is_some_and(|m| m.starts_with("audio"))
}

pub fn has_image_mime_type(mime_type: Option<&str>) -> bool {
    mime_type.is_some_and(|m| m.starts_with("image"))
}

pub fn has_video_mime_type(mime_type: Option<&str>) -> bool {
    mime_type.is_some_and(|m| m.starts_with("video"))
}

pub fn has_pdf_mime_type(mime_type: Option<&str>) -> bool {
    mime_type.is_some_and(|m| m.starts_with("application/pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_checks() {
        assert!(has_audio_mime_type(Some("audio/mpeg")));
        assert!(has_image_mime_type(Some("image/tiff")));
        assert!(has_video_mime_type(Some("video/mp4")));
        assert!(has_pdf_mime_type(Some("application/pdf")));
        assert!(!has_image_mime_type(Some("application/pdf")));
        assert!(!has_video_mime_type(None));
    }
}
