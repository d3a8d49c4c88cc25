pub mod listing;
pub mod media;

// replace with the repository that hosts the media folder
pub const REPO_OWNER: &str = "your-username";
pub const REPO_NAME: &str = "your-repo";

pub fn contents_url() -> String {
    format!("https://api.github.com/repos/{REPO_OWNER}/{REPO_NAME}/contents/media")
}
