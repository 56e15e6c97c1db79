//! Deployment targets. A target is only described here; pushing generated
//! output to it is the hosting pipeline's job.

use std::fmt;

/// Where the generated site would be published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeploymentMethod {
    /// A GitHub Pages repository, identified as `owner/name`, and the
    /// branch that serves the site.
    GitHub { repository: String, branch: String },
}

impl DeploymentMethod {
    /// Constructs a GitHub Pages target. `branch` may be a short name
    /// (`gh-pages`) or a fully qualified ref
    /// (`refs/remotes/origin/gh-pages`).
    pub fn git_hub(repository: &str, branch: &str) -> DeploymentMethod {
        DeploymentMethod::GitHub {
            repository: repository.to_owned(),
            branch: branch.to_owned(),
        }
    }

    /// The short branch name, with any `refs/heads/` or
    /// `refs/remotes/<remote>/` prefix removed.
    pub fn branch_name(&self) -> &str {
        match self {
            DeploymentMethod::GitHub { branch, .. } => short_branch(branch),
        }
    }
}

impl fmt::Display for DeploymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeploymentMethod::GitHub { repository, .. } => {
                write!(f, "branch {} of {}", self.branch_name(), repository)
            }
        }
    }
}

fn short_branch(branch: &str) -> &str {
    if let Some(rest) = branch.strip_prefix("refs/heads/") {
        return rest;
    }
    if let Some(rest) = branch.strip_prefix("refs/remotes/") {
        // the first component names the remote
        return match rest.find('/') {
            Some(i) => &rest[i + 1..],
            None => rest,
        };
    }
    branch
}
