use anyhow::bail;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contents_url;

// one entry of the remote directory listing; only regular files are
// included in the gallery, subdirectories and anything else are not
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListingEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

// extract the file names from a listing response, preserving response order
//
// a body that is not a sequence means "no media" rather than an error, and
// entries that do not look like directory entries are skipped one by one
pub fn file_names(listing: &Value) -> Vec<String> {
    let entries = match listing.as_array() {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<ListingEntry>(entry.clone()).ok())
        .filter(|entry| entry.kind == "file")
        .map(|entry| entry.name)
        .collect()
}

// ListingSource
//
// the two deployment strategies for finding the media to display: a fixed
// list compiled into the page, or a single GET against a directory-listing
// endpoint.  exactly one of these is active per deployment.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingSource {
    Static(Vec<String>),
    Remote(String),
}

impl ListingSource {
    pub async fn resolve(&self) -> anyhow::Result<Vec<String>> {
        match self {
            ListingSource::Static(files) => Ok(files.clone()),
            ListingSource::Remote(url) => {
                let resp = Request::get(url).send().await?;

                if !resp.ok() {
                    bail!("listing request failed with status {}", resp.status());
                }

                let listing: Value = resp.json().await?;

                Ok(file_names(&listing))
            }
        }
    }
}

pub fn default_source() -> ListingSource {
    ListingSource::Remote(contents_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_keeps_files_and_drops_directories() {
        let listing = json!([
            {"type": "file", "name": "x.png"},
            {"type": "dir", "name": "sub"},
            {"type": "file", "name": "y.mov"},
        ]);

        assert_eq!(file_names(&listing), vec!["x.png", "y.mov"]);
    }

    #[test]
    fn malformed_listing_is_empty() {
        // the contents endpoint answers errors with an object, not an array
        assert!(file_names(&json!({"message": "Not Found"})).is_empty());
        assert!(file_names(&json!("unexpected")).is_empty());
        assert!(file_names(&Value::Null).is_empty());
    }

    #[test]
    fn broken_entries_are_skipped_individually() {
        let listing = json!([
            {"type": "file", "name": "a.jpg"},
            {"type": "file"},
            42,
            {"name": "b.mp4"},
        ]);

        assert_eq!(file_names(&listing), vec!["a.jpg"]);
    }

    #[test]
    fn static_listing_resolves_in_declaration_order() {
        let source = ListingSource::Static(vec![
            String::from("a.jpg"),
            String::from("b.mp4"),
            String::from("c.txt"),
        ]);

        let files = futures::executor::block_on(source.resolve()).unwrap();

        // classification happens at render time, so c.txt is still listed
        assert_eq!(files, vec!["a.jpg", "b.mp4", "c.txt"]);
    }
}
