//! Attachment classification

/// Extensions rendered inline as images
pub const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];

/// Whether a filename looks like an image (case-insensitive extension match)
pub fn is_image_file(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Split items into (images, others), preserving the original order in each
pub fn partition_by_image<T, F>(items: &[T], filename: F) -> (Vec<&T>, Vec<&T>)
where
    F: Fn(&T) -> &str,
{
    items.iter().partition(|item| is_image_file(filename(*item)))
}
