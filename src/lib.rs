//! The library code for Morgan's portfolio website. The whole program is a
//! single configuration value plus the publish step it feeds:
//!
//! 1. Describing the site ([`crate::site`]): URL, name, description,
//!    language, optional social-preview image, and the declared content
//!    sections.
//! 2. Publishing ([`crate::publish`]): discovering the items under each
//!    declared section ([`crate::content`]) and producing the deterministic
//!    report of what would be generated and where it would be deployed
//!    ([`crate::deploy`]).
//!
//! Rendering and the actual Git push are the business of the hosting
//! pipeline, not this crate; the publish step here stops at the "would
//! deploy to branch X of Y" report, so a run never needs network access.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod content;
pub mod deploy;
pub mod publish;
pub mod site;
pub mod theme;
