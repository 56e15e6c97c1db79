//! Exports the [`publish`] function which stitches together the high-level
//! steps of a publish run: scanning each declared section for content
//! ([`crate::content`]) and assembling the [`Report`] of what would be
//! generated and where it would be deployed. Rendering and the Git push are
//! the hosting pipeline's job; a run of this crate is deterministic and
//! never touches the network.

use crate::content;
use crate::content::Item;
use crate::deploy::DeploymentMethod;
use crate::site::{ItemMetadata, Language, SectionId, Site};
use crate::theme::Theme;
use std::fmt;
use std::path::Path;

/// Publishes the site: discovers the items of every declared section under
/// `content_root` and returns the [`Report`]. The first failure aborts the
/// run; there are no partial results.
pub fn publish(
    site: &Site,
    theme: Theme,
    method: &DeploymentMethod,
    content_root: &Path,
) -> Result<Report> {
    let mut sections = Vec::with_capacity(site.sections.len());
    for id in &site.sections {
        let items: Vec<Item<ItemMetadata>> =
            content::discover_items(&content_root.join(id.as_str()))
                .map_err(|err| Error::Section { id: *id, err })?;
        sections.push(SectionReport {
            id: *id,
            item_ids: items.into_iter().map(|item| item.id).collect(),
        });
    }

    Ok(Report {
        name: site.name.clone(),
        url: site.url.to_string(),
        description: site.description.clone(),
        language: site.language,
        theme,
        sections,
        target: method.to_string(),
    })
}

/// The outcome of a successful publish run. Its [`fmt::Display`] impl
/// renders the report the binary prints; the final line is always
/// `would deploy to <target>`.
#[derive(Debug)]
pub struct Report {
    pub name: String,
    pub url: String,
    pub description: String,
    pub language: Language,
    pub theme: Theme,
    pub sections: Vec<SectionReport>,
    pub target: String,
}

/// One declared section and the ids of the items discovered under it.
#[derive(Debug)]
pub struct SectionReport {
    pub id: SectionId,
    pub item_ids: Vec<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} <{}>", self.name, self.url)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "language: {}", self.language)?;
        writeln!(f, "theme: {}", self.theme)?;
        for section in &self.sections {
            match &*section.item_ids {
                [] => writeln!(f, "{}: no items", section.id)?,
                [id] => writeln!(f, "{}: 1 item ({})", section.id, id)?,
                ids => writeln!(f, "{}: {} items ({})", section.id, ids.len(), ids.join(", "))?,
            }
        }
        write!(f, "would deploy to {}", self.target)
    }
}

/// The result of a fallible publish operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a publish operation.
#[derive(Debug)]
pub enum Error {
    /// Returned when scanning a declared section fails.
    Section { id: SectionId, err: content::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Section { id, err } => write!(f, "Scanning section `{}`: {}", id, err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Section { id: _, err } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use url::Url;

    fn fixture_site() -> Site {
        Site {
            url: Url::parse("https://your-website-url.com").unwrap(),
            name: "Morgan's Portfolio".to_owned(),
            description: "A description".to_owned(),
            language: Language::English,
            image_path: None,
            sections: SectionId::all().to_vec(),
        }
    }

    fn fixture_target() -> DeploymentMethod {
        DeploymentMethod::git_hub(
            "morganzellers/morganzellers.github.io",
            "refs/remotes/origin/gh-pages",
        )
    }

    fn fixture_content(posts: &[(&str, &str)]) -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        let posts_dir = root.path().join("posts");
        fs::create_dir(&posts_dir).unwrap();
        for (name, body) in posts {
            fs::write(posts_dir.join(name), body).unwrap();
        }
        root
    }

    #[test]
    fn test_publish_end_to_end() {
        let root = fixture_content(&[("first-post.md", "# Hello\n")]);
        let report = publish(
            &fixture_site(),
            Theme::Foundation,
            &fixture_target(),
            root.path(),
        )
        .unwrap();

        assert_eq!(report.name, "Morgan's Portfolio");
        assert_eq!(report.description, "A description");
        assert_eq!(report.url, "https://your-website-url.com/");
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].item_ids, vec!["first-post"]);

        let rendered = report.to_string();
        assert_eq!(
            rendered.lines().last().unwrap(),
            "would deploy to branch gh-pages of morganzellers/morganzellers.github.io",
        );
    }

    #[test]
    fn test_publish_report_is_deterministic() {
        let root = fixture_content(&[("b.md", "b\n"), ("a.md", "a\n")]);
        let site = fixture_site();
        let first = publish(&site, Theme::Foundation, &fixture_target(), root.path())
            .unwrap()
            .to_string();
        let second = publish(&site, Theme::Foundation, &fixture_target(), root.path())
            .unwrap()
            .to_string();
        assert_eq!(first, second);
        assert!(first.contains("posts: 2 items (a, b)"));
    }

    #[test]
    fn test_publish_empty_section() {
        let root = fixture_content(&[]);
        let report = publish(
            &fixture_site(),
            Theme::Foundation,
            &fixture_target(),
            root.path(),
        )
        .unwrap();
        assert!(report.to_string().contains("posts: no items"));
    }

    #[test]
    fn test_publish_missing_section_directory() {
        let root = tempfile::tempdir().unwrap();
        let err = publish(
            &fixture_site(),
            Theme::Foundation,
            &fixture_target(),
            root.path(),
        )
        .unwrap_err();
        match err {
            Error::Section {
                id: SectionId::Posts,
                err: content::Error::MissingDirectory { .. },
            } => {}
            other => panic!("expected missing posts directory, got {:?}", other),
        }
    }

    #[test]
    fn test_publish_missing_content_root() {
        let err = publish(
            &fixture_site(),
            Theme::Foundation,
            &fixture_target(),
            &PathBuf::from("/no/such/content/root"),
        )
        .unwrap_err();
        match err {
            Error::Section { .. } => {}
        }
    }
}
