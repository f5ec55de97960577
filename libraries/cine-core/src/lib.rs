//! Cine Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Cine Player.
//!
//! This crate provides the building blocks shared by the file-system library
//! and the playback controller.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `PlaylistItem`, `MediaKind`
//! - **Ordering**: natural (case-insensitive, digit-aware) filename comparison
//! - **Formats**: the allow-list of playable extensions
//! - **Core Traits**: `MediaLibrary`, the file-system collaborator
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use cine_core::{sort_natural, MediaKind, PlaylistItem};
//! use std::path::PathBuf;
//!
//! let mut paths = vec![PathBuf::from("/media/b.mp4"), PathBuf::from("/media/A.mp3")];
//! sort_natural(&mut paths);
//!
//! let item = PlaylistItem::new(&paths[0]);
//! assert_eq!(item.file_name(), "A.mp3");
//! assert_eq!(item.kind(), MediaKind::Audio);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod formats;
pub mod item;
pub mod order;
pub mod traits;

pub use error::{CoreError, Result};
pub use formats::{is_supported_media, media_kind, AUDIO_EXTENSIONS, VIDEO_EXTENSIONS};
pub use item::{MediaKind, PlaylistItem};
pub use order::{natural_cmp, sort_natural};
pub use traits::MediaLibrary;
