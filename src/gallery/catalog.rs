//! The fixed image catalog behind the gallery.
//!
//! Defined at compile time and never mutated. Paths are file names
//! under the asset directory; ids are unique and stable so the grid can
//! key on them.

/// What an image documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Events,
    Awards,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Events => "Events",
            Category::Awards => "Awards",
        }
    }
}

/// One gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub id: u32,
    pub path: &'static str,
    pub label: &'static str,
    pub category: Category,
}

const CATALOG: [ImageDescriptor; 9] = [
    ImageDescriptor { id: 1, path: "about.webp", label: "Annual Exhibition", category: Category::Events },
    ImageDescriptor { id: 2, path: "about2.webp", label: "Leadership Summit", category: Category::Events },
    ImageDescriptor { id: 3, path: "about3.webp", label: "Recognition Awards", category: Category::Awards },
    ImageDescriptor { id: 4, path: "impact.webp", label: "Workshop Series", category: Category::Events },
    ImageDescriptor { id: 5, path: "about.webp", label: "Community Fair", category: Category::Events },
    ImageDescriptor { id: 6, path: "about2.webp", label: "Achievement Ceremony", category: Category::Awards },
    ImageDescriptor { id: 7, path: "about3.webp", label: "Women Entrepreneur Meet", category: Category::Events },
    ImageDescriptor { id: 8, path: "impact.webp", label: "Excellence Awards 2023", category: Category::Awards },
    ImageDescriptor { id: 9, path: "about.webp", label: "Skill Development Workshop", category: Category::Events },
];

/// The catalog, in its authored order.
pub fn catalog() -> &'static [ImageDescriptor] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_non_empty() {
        assert!(!catalog().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<u32> = catalog().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }
}
