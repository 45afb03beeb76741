use serde::{Deserialize, Serialize};
use url::Url;

/// How the client plays a track reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Playback {
    /// track page embedded through the SoundCloud widget
    SoundCloud,
    /// direct media, played by an `<audio>` element
    Audio,
}

impl Playback {
    pub fn for_reference(reference: &str) -> Self {
        let Ok(url) = Url::parse(reference.trim()) else {
            // file names and relative paths
            return Playback::Audio;
        };
        let soundcloud = matches!(url.scheme(), "http" | "https")
            && url
                .host_str()
                .map(|host| host == "soundcloud.com" || host.ends_with(".soundcloud.com"))
                .unwrap_or(false);

        if soundcloud {
            Playback::SoundCloud
        } else {
            Playback::Audio
        }
    }
}
