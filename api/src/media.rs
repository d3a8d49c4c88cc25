// media classification

pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "avi", "mov"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Unrecognized,
}

// ExtensionMap
//
// the extension -> kind mapping used to decide how a file name is rendered.
// the default map matches the fixed sets above; a deployment that serves
// other formats swaps in its own slices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionMap {
    pub image: &'static [&'static str],
    pub video: &'static [&'static str],
}

impl Default for ExtensionMap {
    fn default() -> Self {
        ExtensionMap {
            image: &IMAGE_EXTENSIONS,
            video: &VIDEO_EXTENSIONS,
        }
    }
}

impl ExtensionMap {
    pub fn classify(&self, file_name: &str) -> MediaKind {
        // the suffix after the final dot, compared case-insensitively
        let extension = match file_name.rsplit_once('.') {
            Some((_, extension)) => extension,
            None => return MediaKind::Unrecognized,
        };

        if self.image.iter().any(|e| extension.eq_ignore_ascii_case(e)) {
            MediaKind::Image
        } else if self.video.iter().any(|e| extension.eq_ignore_ascii_case(e)) {
            MediaKind::Video
        } else {
            MediaKind::Unrecognized
        }
    }
}

pub fn classify(file_name: &str) -> MediaKind {
    ExtensionMap::default().classify(file_name)
}

// the renderer's skip policy: unrecognized names produce no thumbnail,
// everything else passes through in listing order
pub fn renderable(files: &[String]) -> Vec<String> {
    files
        .iter()
        .filter(|file_name| classify(file_name) != MediaKind::Unrecognized)
        .cloned()
        .collect()
}
