//! Filterable photo gallery with like state and a lightbox viewer.
//!
//! The lightbox always navigates the *filtered* subset. Its selection is kept
//! by item id, so re-filtering can never leave it pointing past the end of
//! the list.

pub mod filter;
pub mod item;

use std::collections::HashMap;
use tracing::debug;

pub use filter::CategoryFilter;
pub use item::{GalleryItem, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Masonry,
}

/// Lightbox keys. Anything else is ignored by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    ArrowRight,
    ArrowLeft,
    Escape,
}

/// Summary figures shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryStats {
    pub moments: usize,
    pub categories: usize,
    pub featured: usize,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    liked: HashMap<ItemId, bool>,
    filter: CategoryFilter,
    view_mode: ViewMode,
    selected: Option<ItemId>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            liked: HashMap::new(),
            filter: CategoryFilter::All,
            view_mode: ViewMode::default(),
            selected: None,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn filtered(&self) -> Vec<&GalleryItem> {
        self.items.iter().filter(|item| self.filter.matches(item)).collect()
    }

    /// Replaces the active filter. Closes the lightbox if its item is filtered out.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        debug!(%filter, "gallery filter changed");
        self.filter = filter;
        if let Some(id) = self.selected {
            if self.filtered_position(id).is_none() {
                self.selected = None;
            }
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_like(&mut self, id: ItemId) {
        let liked = self.liked.entry(id).or_insert(false);
        *liked = !*liked;
    }

    pub fn is_liked(&self, id: ItemId) -> bool {
        self.liked.get(&id).copied().unwrap_or(false)
    }

    pub fn liked_count(&self) -> usize {
        self.liked.values().filter(|liked| **liked).count()
    }

    pub fn stats(&self) -> GalleryStats {
        let mut categories: Vec<String> = self.items.iter().map(|i| i.category.to_lowercase()).collect();
        categories.sort();
        categories.dedup();
        GalleryStats {
            moments: self.items.len(),
            categories: categories.len(),
            featured: self.items.iter().filter(|i| i.featured).count(),
        }
    }

    // --- Lightbox ---

    /// Opens the lightbox on `id`. Items outside the filtered subset are refused.
    pub fn open(&mut self, id: ItemId) -> bool {
        if self.filtered_position(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&GalleryItem> {
        let id = self.selected?;
        self.items.iter().find(|item| item.id == id)
    }

    /// Position of the lightbox item within the filtered subset, and that subset's length.
    pub fn position(&self) -> Option<(usize, usize)> {
        let id = self.selected?;
        let filtered = self.filtered();
        let index = filtered.iter().position(|item| item.id == id)?;
        Some((index, filtered.len()))
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    pub fn handle_key(&mut self, key: LightboxKey) {
        if !self.is_open() {
            return;
        }
        match key {
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::Escape => self.close(),
        }
    }

    fn step(&mut self, delta: isize) {
        let Some((index, len)) = self.position() else {
            return;
        };
        let next = (index as isize + delta).rem_euclid(len as isize) as usize;
        self.selected = self.filtered().get(next).map(|item| item.id);
    }

    fn filtered_position(&self, id: ItemId) -> Option<usize> {
        self.filtered().iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gallery {
        let categories = ["Events", "Education", "Events", "Workshops", "Events", "Movements", "Community", "Workshops"];
        let items = categories
            .iter()
            .enumerate()
            .map(|(i, category)| GalleryItem::new(i as ItemId + 1, format!("Item {}", i + 1), *category))
            .collect();
        Gallery::new(items)
    }

    #[test]
    fn events_filter_yields_three_items_and_wraps() {
        let mut gallery = sample();
        gallery.set_filter(CategoryFilter::parse("Events"));
        let ids: Vec<ItemId> = gallery.filtered().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);

        assert!(gallery.open(5));
        assert_eq!(gallery.position(), Some((2, 3)));
        gallery.next();
        assert_eq!(gallery.position(), Some((0, 3)));
        gallery.previous();
        assert_eq!(gallery.selected().map(|i| i.id), Some(5));
    }

    #[test]
    fn refilter_keeps_likes() {
        let mut gallery = sample();
        gallery.toggle_like(2);
        gallery.set_filter(CategoryFilter::parse("events"));
        gallery.set_filter(CategoryFilter::All);
        assert!(gallery.is_liked(2));
        gallery.toggle_like(2);
        assert!(!gallery.is_liked(2));
        assert_eq!(gallery.liked_count(), 0);
    }

    #[test]
    fn refilter_closes_lightbox_on_hidden_item() {
        let mut gallery = sample();
        assert!(gallery.open(2));
        gallery.set_filter(CategoryFilter::parse("Events"));
        assert!(!gallery.is_open());

        assert!(gallery.open(3));
        gallery.set_filter(CategoryFilter::parse("EVENTS"));
        assert_eq!(gallery.selected().map(|i| i.id), Some(3));
    }

    #[test]
    fn open_refuses_items_outside_filter() {
        let mut gallery = sample();
        gallery.set_filter(CategoryFilter::parse("Workshops"));
        assert!(!gallery.open(1));
        assert!(gallery.open(8));
    }

    #[test]
    fn keys_drive_lightbox_only_when_open() {
        let mut gallery = sample();
        gallery.handle_key(LightboxKey::ArrowRight);
        assert!(!gallery.is_open());

        gallery.open(8);
        gallery.handle_key(LightboxKey::ArrowRight);
        assert_eq!(gallery.selected().map(|i| i.id), Some(1));
        gallery.handle_key(LightboxKey::ArrowLeft);
        assert_eq!(gallery.selected().map(|i| i.id), Some(8));
        gallery.handle_key(LightboxKey::Escape);
        assert!(!gallery.is_open());
    }

    #[test]
    fn stats_count_distinct_categories() {
        let stats = sample().stats();
        assert_eq!(stats.moments, 8);
        assert_eq!(stats.categories, 5);
        assert_eq!(stats.featured, 0);
    }
}
