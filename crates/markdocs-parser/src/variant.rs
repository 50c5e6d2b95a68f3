//! Schema variants of the plugin descriptor.

use std::fmt;

/// The container shape a descriptor uses for its goals.
///
/// Both shapes carry the same fields per goal; only the container and item
/// tags differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVariant {
    /// Goals listed as `<goals><goal>...</goal></goals>`
    Goals,
    /// Goals listed as `<mojos><mojo>...</mojo></mojos>`
    Mojos,
}

impl SchemaVariant {
    /// All variants, in detection order.
    pub const ALL: [Self; 2] = [Self::Goals, Self::Mojos];

    /// Tag of the element holding the goal items.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_parser::SchemaVariant;
    ///
    /// assert_eq!(SchemaVariant::Goals.container_tag(), "goals");
    /// assert_eq!(SchemaVariant::Mojos.container_tag(), "mojos");
    /// ```
    #[must_use]
    pub const fn container_tag(self) -> &'static str {
        match self {
            Self::Goals => "goals",
            Self::Mojos => "mojos",
        }
    }

    /// Tag of each goal item below the container.
    #[must_use]
    pub const fn item_tag(self) -> &'static str {
        match self {
            Self::Goals => "goal",
            Self::Mojos => "mojo",
        }
    }

    /// Tag carrying the goal name inside an item.
    ///
    /// Real Maven descriptors name a mojo through a nested `<goal>` element,
    /// so this is `goal` for both shapes.
    #[must_use]
    pub const fn name_tag(self) -> &'static str {
        match self {
            Self::Goals | Self::Mojos => "goal",
        }
    }

    /// Tags tried in order when reading the goal name.
    #[must_use]
    pub const fn name_tags(self) -> &'static [&'static str] {
        match self {
            Self::Goals => &["goal"],
            Self::Mojos => &["goal", "mojo"],
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container_tag(), self.item_tag())
    }
}
