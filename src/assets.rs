//! Sprite file resolution
//!
//! Each sprite is looked up once at startup. Art that is missing is replaced
//! by a solid block of the right size so the game always starts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::Vec2;

use crate::consts::*;
use crate::renderer::{Color, Sprite};

/// Where a sprite's pixels come from
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteSource {
    File(PathBuf),
    Placeholder(Color),
}

impl SpriteSource {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, SpriteSource::Placeholder(_))
    }
}

/// File names tried for a sprite, in order
fn candidates(sprite: Sprite) -> &'static [&'static str] {
    match sprite {
        Sprite::Bird => &["bim.png", "bim.jpg"],
        Sprite::BackgroundDay => &["hoguomsang.jpg"],
        Sprite::BackgroundNight => &["hoguomtoi.jpeg"],
        Sprite::Column => &["column.png"],
    }
}

fn placeholder_color(sprite: Sprite) -> Color {
    match sprite {
        Sprite::Bird => Color::PLACEHOLDER_BIRD,
        _ => Color::PLACEHOLDER,
    }
}

/// Size a sprite is scaled to when loaded
pub fn sprite_size(sprite: Sprite) -> Vec2 {
    match sprite {
        Sprite::Bird => Vec2::splat(BIRD_SIZE),
        Sprite::BackgroundDay | Sprite::BackgroundNight => Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        Sprite::Column => Vec2::new(PIPE_IMAGE_WIDTH, SCREEN_HEIGHT),
    }
}

/// Resolved source for every sprite
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    sources: HashMap<Sprite, SpriteSource>,
}

impl AssetCatalog {
    /// Look for every sprite under `dir`
    pub fn resolve(dir: &Path) -> Self {
        let mut sources = HashMap::new();
        for sprite in Sprite::ALL {
            let found = candidates(sprite)
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.is_file());

            let source = match found {
                Some(path) => {
                    log::debug!("{:?} from {}", sprite, path.display());
                    SpriteSource::File(path)
                }
                None => {
                    log::warn!(
                        "No art for {:?} in {} (tried {:?}), using placeholder",
                        sprite,
                        dir.display(),
                        candidates(sprite)
                    );
                    SpriteSource::Placeholder(placeholder_color(sprite))
                }
            };
            sources.insert(sprite, source);
        }
        Self { sources }
    }

    /// Catalog with no files at all
    pub fn placeholders() -> Self {
        let sources = Sprite::ALL
            .into_iter()
            .map(|s| (s, SpriteSource::Placeholder(placeholder_color(s))))
            .collect();
        Self { sources }
    }

    pub fn source(&self, sprite: Sprite) -> &SpriteSource {
        // Every sprite is inserted by both constructors
        &self.sources[&sprite]
    }

    pub fn missing(&self) -> usize {
        self.sources.values().filter(|s| s.is_placeholder()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_dir_is_all_placeholders() {
        let dir = tempdir().unwrap();
        let catalog = AssetCatalog::resolve(dir.path());
        assert_eq!(catalog.missing(), Sprite::ALL.len());
        assert_eq!(
            catalog.source(Sprite::Bird),
            &SpriteSource::Placeholder(Color::PLACEHOLDER_BIRD)
        );
        assert_eq!(
            catalog.source(Sprite::Column),
            &SpriteSource::Placeholder(Color::PLACEHOLDER)
        );
    }

    #[test]
    fn test_bird_falls_back_to_jpg() {
        let dir = tempdir().unwrap();
        let bird = dir.path().join("bim.jpg");
        fs::write(&bird, b"not really a jpeg").unwrap();
        let catalog = AssetCatalog::resolve(dir.path());
        assert_eq!(catalog.source(Sprite::Bird), &SpriteSource::File(bird));
        assert_eq!(catalog.missing(), 3);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(sprite_size(Sprite::Bird), Vec2::splat(50.0));
        assert_eq!(sprite_size(Sprite::Column), Vec2::new(250.0, 600.0));
        assert_eq!(AssetCatalog::placeholders().missing(), 4);
    }
}
