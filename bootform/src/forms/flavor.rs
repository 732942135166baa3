//! Output flavors
//!
//! A flavor decides the attribute *names* the renderer writes. Renaming
//! happens as each attribute is emitted, so text content is never touched.

/// Templating convention of the generated markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    /// Plain HTML
    #[default]
    Default,
    /// React JSX: `ref` bindings, `className`/`htmlFor`, inline error slots
    React,
}

impl Flavor {
    /// Select a flavor from the `--react` switch
    #[must_use]
    pub const fn from_react_flag(react: bool) -> Self {
        if react {
            Self::React
        } else {
            Self::Default
        }
    }

    /// Check if this is the React flavor
    #[must_use]
    pub const fn is_react(self) -> bool {
        matches!(self, Self::React)
    }

    /// Attribute binding a control to form state
    #[must_use]
    pub const fn binding_attr(self) -> &'static str {
        match self {
            Self::Default => "name",
            Self::React => "ref",
        }
    }

    /// Attribute carrying CSS classes
    #[must_use]
    pub const fn class_attr(self) -> &'static str {
        match self {
            Self::Default => "class",
            Self::React => "className",
        }
    }

    /// Attribute pointing a label at its control
    #[must_use]
    pub const fn for_attr(self) -> &'static str {
        match self {
            Self::Default => "for",
            Self::React => "htmlFor",
        }
    }
}
