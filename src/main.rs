use anyhow::{Context, Result};
use portfolio_site::deploy::DeploymentMethod;
use portfolio_site::publish::publish;
use portfolio_site::site::{Language, SectionId, Site};
use portfolio_site::theme::Theme;
use std::path::Path;
use url::Url;

fn main() -> Result<()> {
    // Update these values to configure the website.
    let site = Site {
        url: Url::parse("https://your-website-url.com").context("Parsing site URL")?,
        name: "Morgan's Portfolio".to_owned(),
        description: "A description".to_owned(),
        language: Language::English,
        image_path: None,
        sections: SectionId::all().to_vec(),
    };

    let report = publish(
        &site,
        Theme::Foundation,
        &DeploymentMethod::git_hub(
            "morganzellers/morganzellers.github.io",
            "refs/remotes/origin/gh-pages",
        ),
        Path::new("Content"),
    )
    .context("Publishing site")?;

    println!("{}", report);
    Ok(())
}
