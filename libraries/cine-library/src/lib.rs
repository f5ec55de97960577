//! Cine Player - Media Library
//!
//! File-system side of loading a file or folder into the player:
//! - Non-recursive directory listing
//! - Hidden entries skipped
//! - Extension allow-list (case-insensitive)
//! - Natural ordering of the result
//!
//! # Example
//!
//! ```rust,no_run
//! use cine_core::MediaLibrary;
//! use cine_library::FileScanner;
//! use std::path::Path;
//!
//! let scanner = FileScanner::new();
//! let files = scanner.list_media_files(Path::new("/media/movies")).unwrap_or_default();
//! for file in files {
//!     println!("{}", file.display());
//! }
//! ```

mod scanner;

pub use scanner::{is_hidden, FileScanner};
