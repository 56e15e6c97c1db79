//! Content discovery. Walks a section's source directory and collects its
//! items, decoding each item's optional YAML front matter into the site's
//! metadata type. Item bodies are left alone; turning them into HTML is the
//! hosting pipeline's job.

use serde::de::DeserializeOwned;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MARKDOWN_EXTENSION: &str = ".md";
const FENCE: &str = "---";

/// A discovered content item. Generic over the metadata type decoded from
/// the item's front matter; the site instantiates it with
/// [`crate::site::ItemMetadata`].
#[derive(Debug)]
pub struct Item<M> {
    /// The item identifier: the source file name without its extension.
    pub id: String,

    /// The source file the item was read from.
    pub path: PathBuf,

    /// Metadata decoded from the item's front matter, or the default value
    /// when the item has none.
    pub metadata: M,
}

impl<M: DeserializeOwned + Default> Item<M> {
    /// Parses an item from its source text. Front matter is optional; when
    /// present it must open the file with a `---` line and close with
    /// another.
    pub fn from_str(id: &str, path: &Path, input: &str) -> Result<Item<M>> {
        let metadata = if input.starts_with(FENCE) {
            match input[FENCE.len()..].find(FENCE) {
                None => {
                    return Err(Error::UnclosedFrontMatter {
                        path: path.to_owned(),
                    })
                }
                Some(offset) => {
                    let yaml = &input[FENCE.len()..FENCE.len() + offset];
                    if yaml.trim().is_empty() {
                        M::default()
                    } else {
                        serde_yaml::from_str(yaml).map_err(|err| Error::Metadata {
                            path: path.to_owned(),
                            err,
                        })?
                    }
                }
            }
        } else {
            M::default()
        };

        Ok(Item {
            id: id.to_owned(),
            path: path.to_owned(),
            metadata,
        })
    }
}

/// Walks `dir` and returns the section's items ordered by id. A declared
/// section whose directory is missing is an error, not an empty section.
pub fn discover_items<M: DeserializeOwned + Default>(dir: &Path) -> Result<Vec<Item<M>>> {
    if !dir.is_dir() {
        return Err(Error::MissingDirectory {
            path: dir.to_owned(),
        });
    }

    let mut items: Vec<Item<M>> = Vec::new();
    for result in WalkDir::new(dir) {
        let entry = result?;
        let os_file_name = entry.file_name().to_owned();
        let file_name = os_file_name.to_string_lossy();
        if entry.file_type().is_file() && file_name.ends_with(MARKDOWN_EXTENSION) {
            let id = file_name.trim_end_matches(MARKDOWN_EXTENSION);
            let mut contents = String::new();
            File::open(entry.path())?.read_to_string(&mut contents)?;
            items.push(Item::from_str(id, entry.path(), &contents)?);
        }
    }

    items.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(items)
}

/// The result of a fallible content-discovery operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a content-discovery operation.
#[derive(Debug)]
pub enum Error {
    /// A declared section has no source directory.
    MissingDirectory { path: PathBuf },

    /// An item opens a front-matter fence but never closes it.
    UnclosedFrontMatter { path: PathBuf },

    /// An item's front matter is not valid metadata.
    Metadata {
        path: PathBuf,
        err: serde_yaml::Error,
    },

    /// An error while walking the section directory.
    Walk(walkdir::Error),

    /// An error reading an item's source file.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingDirectory { path } => {
                write!(f, "Missing content directory '{}'", path.display())
            }
            Error::UnclosedFrontMatter { path } => {
                write!(f, "Missing closing `---` in '{}'", path.display())
            }
            Error::Metadata { path, err } => {
                write!(f, "Decoding front matter of '{}': {}", path.display(), err)
            }
            Error::Walk(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingDirectory { .. } => None,
            Error::UnclosedFrontMatter { .. } => None,
            Error::Metadata { path: _, err } => Some(err),
            Error::Walk(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<walkdir::Error> for Error {
    /// Converts [`walkdir::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: walkdir::Error) -> Error {
        Error::Walk(err)
    }
}

impl From<io::Error> for Error {
    /// Converts [`io::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}
