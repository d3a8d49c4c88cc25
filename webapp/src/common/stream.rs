// every file is addressed relative to this folder; names are used as-is,
// so they must already be url-safe
pub const MEDIA_FOLDER: &str = "media/";

pub fn media_link(file_name: &str) -> String {
    format!("{MEDIA_FOLDER}{file_name}")
}
