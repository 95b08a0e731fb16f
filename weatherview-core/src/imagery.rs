use serde::Serialize;
use std::path::{Path, PathBuf};

/// Reference to a bundled image asset by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(&'static str);

impl ImageRef {
    pub const SUNNY: ImageRef = ImageRef("Sunny.png");
    pub const RAINY: ImageRef = ImageRef("Rainy.png");
    pub const SNOWY: ImageRef = ImageRef("Snowy.png");
    pub const DEFAULT: ImageRef = ImageRef("default.png");
    pub const KATHMANDU: ImageRef = ImageRef("kathmandu.jpg");
    /// Backdrop behind the whole screen.
    pub const SCREEN_BACKGROUND: ImageRef = ImageRef("christmas.jpg");

    pub fn file_name(&self) -> &'static str {
        self.0
    }

    /// Resolve against an asset directory, or return the bare file name.
    pub fn resolve(&self, asset_dir: Option<&Path>) -> PathBuf {
        match asset_dir {
            Some(dir) => dir.join(self.0),
            None => PathBuf::from(self.0),
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

const CONDITION_IMAGES: &[(&str, ImageRef)] = &[
    ("Sunny", ImageRef::SUNNY),
    ("Rainy", ImageRef::RAINY),
    ("Snowy", ImageRef::SNOWY),
];

/// Condition keywords that have a dedicated image.
pub fn known_conditions() -> impl Iterator<Item = &'static str> {
    CONDITION_IMAGES.iter().map(|(keyword, _)| *keyword)
}

/// Pick the header image for a condition keyword.
///
/// Matching is exact and case-sensitive; anything unknown gets
/// [`ImageRef::DEFAULT`].
pub fn select_background_image(condition: &str) -> ImageRef {
    CONDITION_IMAGES
        .iter()
        .find(|(keyword, _)| *keyword == condition)
        .map(|(_, image)| *image)
        .unwrap_or(ImageRef::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keywords_map_to_their_image() {
        assert_eq!(select_background_image("Sunny"), ImageRef::SUNNY);
        assert_eq!(select_background_image("Rainy"), ImageRef::RAINY);
        assert_eq!(select_background_image("Snowy"), ImageRef::SNOWY);
    }

    #[test]
    fn every_known_keyword_avoids_the_fallback() {
        for keyword in known_conditions() {
            assert_ne!(select_background_image(keyword), ImageRef::DEFAULT, "{keyword}");
        }
    }

    #[test]
    fn unknown_conditions_fall_back_to_default() {
        for condition in ["", "sunny", "SUNNY", " Sunny", "Cloudy", "Default", "Thunderstorm"] {
            assert_eq!(select_background_image(condition), ImageRef::DEFAULT, "{condition:?}");
        }
    }

    #[test]
    fn resolve_joins_asset_dir() {
        let path = ImageRef::RAINY.resolve(Some(Path::new("/opt/assets")));
        assert_eq!(path, PathBuf::from("/opt/assets/Rainy.png"));
        assert_eq!(ImageRef::RAINY.resolve(None), PathBuf::from("Rainy.png"));
    }
}
