use std::path::PathBuf;

pub type ItemId = u32;

/// One photo in the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    pub date: String,
    pub location: String,
    pub participants: u32,
    pub description: String,
    pub featured: bool,
    /// File the front end loads for this item. `None` renders a placeholder.
    pub image: Option<PathBuf>,
}

impl GalleryItem {
    pub fn new(id: ItemId, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            date: String::new(),
            location: String::new(),
            participants: 0,
            description: String::new(),
            featured: false,
            image: None,
        }
    }

    /// Text copied to the clipboard when native sharing is unavailable.
    pub fn share_text(&self) -> String {
        format!("{} - {}", self.title, self.description)
    }
}
