use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// Products carry no identifier; two entries are told apart by their
/// position in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Price in minor currency units.
    pub price: u32,
    pub color: String,
    pub description: String,
    pub image_url: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: u32,
        color: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            color: color.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.color == color
    }
}
