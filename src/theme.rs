use std::fmt;

/// Selects the bundled visual template set applied during generation.
/// Rendering happens in the hosting pipeline, not in this crate; the
/// selector only names the theme in the publish report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    /// The framework's built-in default theme.
    Foundation,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Foundation => "foundation",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
