//! The site descriptor: the one configuration value the rest of the crate
//! consumes. It is built once in `main` and never mutated afterwards.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Identifies a content section of the site. The set of sections is closed:
/// adding a section means adding a variant here and listing it in
/// [`SectionId::all`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Posts,
}

impl SectionId {
    /// Every section the site declares, each exactly once.
    pub fn all() -> &'static [SectionId] {
        &[SectionId::Posts]
    }

    /// The identifier used for the section's content directory and URL
    /// component.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Posts => "posts",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The content locale. Currently the site only publishes in English.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
}

impl Language {
    /// The IETF language tag for the locale.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Site-specific metadata attached to individual content items, decoded
/// from an item's YAML front matter. Fields added here become available on
/// every [`crate::content::Item`]; front-matter keys with no matching field
/// are ignored, and an item without front matter gets the default value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ItemMetadata {}

/// The configuration for the website.
pub struct Site {
    /// The absolute URL the site is published under.
    pub url: Url,

    /// Human-readable site title.
    pub name: String,

    /// Short free-text summary of the site.
    pub description: String,

    /// The content locale.
    pub language: Language,

    /// Optional default social-preview image, relative to the site root.
    pub image_path: Option<PathBuf>,

    /// The content sections the site organizes items under.
    pub sections: Vec<SectionId>,
}
