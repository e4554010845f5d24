//! Tool brands.

/// Brand of a rentable tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    /// Stihl.
    Stihl,
    /// Werner.
    Werner,
    /// DeWalt.
    DeWalt,
    /// Ridgid.
    Ridgid,
}

impl Brand {
    /// Display label (e.g. `"DeWalt"`).
    pub fn label(&self) -> &'static str {
        match self {
            Brand::Stihl => "Stihl",
            Brand::Werner => "Werner",
            Brand::DeWalt => "DeWalt",
            Brand::Ridgid => "Ridgid",
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
