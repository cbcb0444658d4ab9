/// Stroke weight of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Slant of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Roman,
    Italic,
}

/// A font configuration: the key under which font handles are cached.
///
/// `size` is a signed point size because `<small>` can push it below zero;
/// whether such a size resolves is up to the font provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub size: i32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontSpec {
    pub const fn new(size: i32, weight: FontWeight, style: FontStyle) -> Self {
        Self {
            size,
            weight,
            style,
        }
    }

    pub fn is_bold(self) -> bool {
        self.weight == FontWeight::Bold
    }

    pub fn is_italic(self) -> bool {
        self.style == FontStyle::Italic
    }
}

impl std::fmt::Display for FontSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let weight = match self.weight {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        };
        let style = match self.style {
            FontStyle::Roman => "roman",
            FontStyle::Italic => "italic",
        };
        write!(f, "{}pt {weight} {style}", self.size)
    }
}
