//! Image assets - the road background and the two car sprites
//!
//! All three images are decoded once at startup. Loading is all-or-nothing:
//! the first asset that fails aborts with an [`AssetError`] naming it, so the
//! game never runs with a missing texture.
//!
//! # Files
//!
//! | Kind | File | Notes |
//! |------|------|-------|
//! | [`AssetKind::Background`] | `road.bmp` | opaque, stretched over the playfield |
//! | [`AssetKind::Player`] | `car.png` | alpha-tested |
//! | [`AssetKind::Enemy`] | `police.png` | alpha-tested |

pub mod sprite;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use sprite::Sprite;

/// Which of the three images an asset is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Background,
    Player,
    Enemy,
}

impl AssetKind {
    /// File name inside the asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Background => "road.bmp",
            AssetKind::Player => "car.png",
            AssetKind::Enemy => "police.png",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetKind::Background => "background",
            AssetKind::Player => "player sprite",
            AssetKind::Enemy => "enemy sprite",
        })
    }
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to open {kind} at {}", path.display())]
    Io {
        kind: AssetKind,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {kind} at {}", path.display())]
    Decode {
        kind: AssetKind,
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("{kind} at {} has no pixels", path.display())]
    Empty { kind: AssetKind, path: PathBuf },
}

impl AssetError {
    /// The asset that failed to load
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetError::Io { kind, .. }
            | AssetError::Decode { kind, .. }
            | AssetError::Empty { kind, .. } => *kind,
        }
    }
}

/// Every texture the game draws
#[derive(Debug, Clone)]
pub struct Assets {
    pub background: Sprite,
    pub player: Sprite,
    pub enemy: Sprite,
}

impl Assets {
    /// Load all three images from `dir`, stopping at the first failure
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let load = |kind: AssetKind| Sprite::load(kind, &dir.join(kind.file_name()));
        let assets = Self {
            background: load(AssetKind::Background)?,
            player: load(AssetKind::Player)?,
            enemy: load(AssetKind::Enemy)?,
        };
        log::info!("loaded assets from {}", dir.display());
        Ok(assets)
    }
}
