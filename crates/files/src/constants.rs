/// Upload directory used when none is configured.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads/photos";

/// URL prefix under which stored photos are referenced.
pub const DEFAULT_PHOTO_URL_PREFIX: &str = "/uploads/photos";

/// Stand-in for an original filename that has no usable final component.
pub const FALLBACK_FILENAME: &str = "upload";
