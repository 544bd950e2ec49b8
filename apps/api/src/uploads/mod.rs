// Ad submission intake: multipart form parsing and image storage backends.

pub mod form;
pub mod store;

use bytes::Bytes;

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
}

impl ImageKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageKind::Jpeg),
            "image/png" => Some(ImageKind::Png),
            "image/gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }

    pub fn from_extension(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            "gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::Gif => "image/gif",
        }
    }

    pub fn default_extension(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
            ImageKind::Gif => "gif",
        }
    }

    fn accepts_extension(self, ext: &str) -> bool {
        match self {
            ImageKind::Jpeg => matches!(ext, "jpg" | "jpeg"),
            ImageKind::Png => ext == "png",
            ImageKind::Gif => ext == "gif",
        }
    }
}

/// An image pulled out of a multipart submission, already type- and size-checked.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub kind: ImageKind,
    pub data: Bytes,
}

impl ImageUpload {
    /// Extension for the stored file: the client's own if it agrees with the
    /// content type, otherwise the type's default.
    pub fn extension(&self) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| self.kind.accepts_extension(ext))
            .unwrap_or_else(|| self.kind.default_extension().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: Option<&str>, kind: ImageKind) -> ImageUpload {
        ImageUpload {
            file_name: name.map(str::to_string),
            kind,
            data: Bytes::from_static(b"\x89PNG"),
        }
    }

    #[test]
    fn test_mime_whitelist() {
        assert_eq!(ImageKind::from_mime("image/png"), Some(ImageKind::Png));
        assert_eq!(ImageKind::from_mime("IMAGE/JPEG"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_mime("image/gif"), Some(ImageKind::Gif));
        assert_eq!(ImageKind::from_mime("image/webp"), None);
        assert_eq!(ImageKind::from_mime("application/pdf"), None);
    }

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(ImageKind::from_extension("ad.Jpg"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_extension("ad.tiff"), None);
        assert_eq!(ImageKind::from_extension("ad"), None);
    }

    #[test]
    fn test_extension_keeps_matching_client_extension() {
        assert_eq!(upload(Some("banner.JPEG"), ImageKind::Jpeg).extension(), "jpeg");
        assert_eq!(upload(Some("a.b.png"), ImageKind::Png).extension(), "png");
    }

    #[test]
    fn test_extension_falls_back_to_content_type() {
        assert_eq!(upload(None, ImageKind::Jpeg).extension(), "jpg");
        assert_eq!(upload(Some("noext"), ImageKind::Gif).extension(), "gif");
        assert_eq!(upload(Some("evil.exe"), ImageKind::Png).extension(), "png");
    }
}
