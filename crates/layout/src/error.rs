use core_types::FontSpec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The font provider has no font for this size/weight/style.
    UnresolvableFont(FontSpec),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::UnresolvableFont(spec) => write!(f, "cannot resolve font {spec}"),
        }
    }
}

impl std::error::Error for LayoutError {}
