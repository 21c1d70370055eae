use raylib::prelude::*;
use std::collections::HashMap;
use tracing::info;

use hrm_showcase::content::CATEGORIES;
use hrm_showcase::gallery::{CategoryFilter, Gallery, GalleryItem, ItemId, LightboxKey, ViewMode};
use crate::engine::{Effect, FrameInput, Page};
use crate::widgets::{self, GOLD, HEART, MUTED, NAVY, PANEL, TEXT};

const MARGIN: f32 = 60.0;
const GAP: f32 = 16.0;
const COLUMNS: usize = 4;
const GRID_TOP: f32 = 210.0;

pub struct GalleryPage {
    gallery: Gallery,
    textures: HashMap<ItemId, Texture2D>,
    mouse: Vector2,
    width: f32,
    height: f32,
}

/// Hit areas of the lightbox controls.
struct LightboxLayout {
    content: Rectangle,
    image: Rectangle,
    prev: Rectangle,
    next: Rectangle,
    close: Rectangle,
    like: Rectangle,
    share: Rectangle,
    download: Rectangle,
}

impl GalleryPage {
    pub fn new(gallery: Gallery, textures: HashMap<ItemId, Texture2D>, width: f32, height: f32) -> Self {
        Self { gallery, textures, mouse: Vector2::new(0.0, 0.0), width, height }
    }

    fn hovered(&self, area: Rectangle) -> bool {
        area.check_collision_point_rec(self.mouse)
    }

    fn filter_tab_areas(&self) -> Vec<(&'static str, Rectangle)> {
        CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, label)| (*label, Rectangle::new(MARGIN + i as f32 * 136.0, 150.0, 128.0, 40.0)))
            .collect()
    }

    fn view_toggle_areas(&self) -> (Rectangle, Rectangle) {
        let x = self.width - MARGIN - 230.0;
        (Rectangle::new(x, 150.0, 100.0, 40.0), Rectangle::new(x + 110.0, 150.0, 120.0, 40.0))
    }

    /// Tile rectangles for the filtered items, in display order.
    fn tile_areas(&self) -> Vec<(ItemId, Rectangle)> {
        let tile_width = (self.width - 2.0 * MARGIN - GAP * (COLUMNS - 1) as f32) / COLUMNS as f32;
        let mut column_bottoms = [GRID_TOP; COLUMNS];

        self.gallery
            .filtered()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let (column, height) = match self.gallery.view_mode() {
                    ViewMode::Grid => (i % COLUMNS, 170.0),
                    ViewMode::Masonry => {
                        // Shortest column first, featured items run taller
                        let column = (0..COLUMNS)
                            .min_by(|a, b| column_bottoms[*a].total_cmp(&column_bottoms[*b]))
                            .unwrap_or(0);
                        (column, if item.featured { 240.0 } else { 150.0 })
                    }
                };
                let y = match self.gallery.view_mode() {
                    ViewMode::Grid => GRID_TOP + (i / COLUMNS) as f32 * (height + GAP),
                    ViewMode::Masonry => column_bottoms[column],
                };
                column_bottoms[column] = y + height + GAP;
                let x = MARGIN + column as f32 * (tile_width + GAP);
                (item.id, Rectangle::new(x, y, tile_width, height))
            })
            .collect()
    }

    fn heart_area(tile: Rectangle) -> Rectangle {
        Rectangle::new(tile.x + tile.width - 36.0, tile.y + 8.0, 28.0, 28.0)
    }

    fn lightbox_layout(&self) -> LightboxLayout {
        let content = Rectangle::new(MARGIN, 70.0, self.width - 2.0 * MARGIN, self.height - 170.0);
        let image = Rectangle::new(content.x + 20.0, content.y + 20.0, content.width * 0.6, content.height - 40.0);
        let side_x = image.x + image.width + 24.0;
        let actions_y = content.y + content.height - 60.0;
        LightboxLayout {
            content,
            image,
            prev: Rectangle::new(image.x + 8.0, image.y + image.height / 2.0 - 24.0, 40.0, 48.0),
            next: Rectangle::new(image.x + image.width - 48.0, image.y + image.height / 2.0 - 24.0, 40.0, 48.0),
            close: Rectangle::new(content.x + content.width - 48.0, content.y + 8.0, 40.0, 40.0),
            like: Rectangle::new(side_x, actions_y, 90.0, 40.0),
            share: Rectangle::new(side_x + 100.0, actions_y, 90.0, 40.0),
            download: Rectangle::new(side_x + 200.0, actions_y, 120.0, 40.0),
        }
    }

    fn thumbnail_areas(&self) -> Vec<(ItemId, Rectangle)> {
        let y = self.height - 90.0;
        self.gallery
            .filtered()
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id, Rectangle::new(MARGIN + i as f32 * 92.0, y, 84.0, 64.0)))
            .collect()
    }

    fn update_lightbox(&mut self, input: &FrameInput) -> Vec<Effect> {
        let mut effects = Vec::new();

        for (key, action) in [
            (KeyboardKey::KEY_RIGHT, LightboxKey::ArrowRight),
            (KeyboardKey::KEY_LEFT, LightboxKey::ArrowLeft),
            (KeyboardKey::KEY_ESCAPE, LightboxKey::Escape),
        ] {
            if input.pressed(key) {
                self.gallery.handle_key(action);
            }
        }
        if !input.clicked {
            return effects;
        }

        let layout = self.lightbox_layout();
        let Some(item) = self.gallery.selected().cloned() else {
            return effects;
        };

        if input.clicked_in(layout.close) {
            self.gallery.close();
        } else if input.clicked_in(layout.prev) {
            self.gallery.previous();
        } else if input.clicked_in(layout.next) {
            self.gallery.next();
        } else if input.clicked_in(layout.like) {
            self.gallery.toggle_like(item.id);
        } else if input.clicked_in(layout.share) {
            effects.push(Effect::CopyToClipboard(item.share_text()));
            effects.push(Effect::Notify("Image info copied to clipboard!".to_string()));
        } else if input.clicked_in(layout.download) {
            info!(id = item.id, "download requested");
            effects.push(Effect::Notify(format!("Downloading {}...", item.title)));
        } else if let Some((id, _)) = self.thumbnail_areas().into_iter().find(|(_, area)| input.clicked_in(*area)) {
            self.gallery.open(id);
        } else if !input.clicked_in(layout.content) {
            // Backdrop click dismisses
            self.gallery.close();
        }

        effects
    }

    fn update_grid(&mut self, input: &FrameInput) {
        if !input.clicked {
            return;
        }

        if let Some((label, _)) = self.filter_tab_areas().into_iter().find(|(_, area)| input.clicked_in(*area)) {
            self.gallery.set_filter(CategoryFilter::parse(label));
            return;
        }

        let (grid, masonry) = self.view_toggle_areas();
        if input.clicked_in(grid) {
            self.gallery.set_view_mode(ViewMode::Grid);
            return;
        }
        if input.clicked_in(masonry) {
            self.gallery.set_view_mode(ViewMode::Masonry);
            return;
        }

        for (id, tile) in self.tile_areas() {
            // The heart sits on top of the tile and must not open the lightbox
            if input.clicked_in(Self::heart_area(tile)) {
                self.gallery.toggle_like(id);
                return;
            }
            if input.clicked_in(tile) {
                self.gallery.open(id);
                return;
            }
        }
    }

    fn draw_picture(&self, d: &mut RaylibDrawHandle, item: &GalleryItem, area: Rectangle) {
        match self.textures.get(&item.id) {
            Some(texture) => widgets::draw_cover(d, texture, area, Color::WHITE),
            None => {
                d.draw_rectangle_rec(area, PANEL);
                d.draw_text(&item.category, area.x as i32 + 12, (area.y + area.height / 2.0) as i32 - 10, 20, MUTED);
            }
        }
    }

    fn draw_grid(&self, d: &mut RaylibDrawHandle) {
        let stats = self.gallery.stats();
        d.draw_text("Moments in Action", MARGIN as i32, 80, 36, TEXT);
        d.draw_text(
            &format!(
                "{}+ Moments   {} Categories   {} Featured   {} Liked",
                stats.moments,
                stats.categories,
                stats.featured,
                self.gallery.liked_count()
            ),
            MARGIN as i32,
            122,
            18,
            MUTED,
        );

        let active = self.gallery.filter().to_string();
        for (label, area) in self.filter_tab_areas() {
            widgets::draw_button(d, area, label, active == label.to_lowercase(), self.hovered(area));
        }
        let (grid, masonry) = self.view_toggle_areas();
        let mode = self.gallery.view_mode();
        widgets::draw_button(d, grid, "Grid", mode == ViewMode::Grid, self.hovered(grid));
        widgets::draw_button(d, masonry, "Masonry", mode == ViewMode::Masonry, self.hovered(masonry));

        let filtered = self.gallery.filtered();
        for ((_, tile), item) in self.tile_areas().into_iter().zip(filtered) {
            self.draw_picture(d, item, tile);
            if self.hovered(tile) {
                d.draw_rectangle_lines_ex(tile, 3.0, GOLD);
            }

            let caption = Rectangle::new(tile.x, tile.y + tile.height - 44.0, tile.width, 44.0);
            d.draw_rectangle_rec(caption, widgets::with_alpha(NAVY, 0.75));
            d.draw_text(&item.title, caption.x as i32 + 10, caption.y as i32 + 6, 16, TEXT);
            d.draw_text(&item.date, caption.x as i32 + 10, caption.y as i32 + 25, 14, MUTED);
            if item.featured {
                d.draw_text("Featured", tile.x as i32 + 10, tile.y as i32 + 10, 14, GOLD);
            }

            let heart = Self::heart_area(tile);
            let color = if self.gallery.is_liked(item.id) { HEART } else { MUTED };
            d.draw_circle((heart.x + 14.0) as i32, (heart.y + 14.0) as i32, 12.0, color);
        }
    }

    fn draw_lightbox(&self, d: &mut RaylibDrawHandle) {
        let Some(item) = self.gallery.selected() else {
            return;
        };
        let layout = self.lightbox_layout();

        d.draw_rectangle(0, 0, self.width as i32, self.height as i32, widgets::with_alpha(Color::BLACK, 0.85));
        d.draw_rectangle_rec(layout.content, NAVY);
        self.draw_picture(d, item, layout.image);

        let x = (layout.image.x + layout.image.width + 24.0) as i32;
        let mut y = layout.content.y as i32 + 30;
        d.draw_text(&item.category, x, y, 16, GOLD);
        y += 28;
        y = widgets::draw_wrapped(d, &item.title, x, y, 28, layout.content.width * 0.33, TEXT);
        for line in [
            format!("Date: {}", item.date),
            format!("Location: {}", item.location),
            format!("Participants: {}+", item.participants),
        ] {
            y += 8;
            d.draw_text(&line, x, y, 16, MUTED);
            y += 16;
        }
        widgets::draw_wrapped(d, &item.description, x, y + 20, 18, layout.content.width * 0.33, TEXT);

        if let Some((index, len)) = self.gallery.position() {
            d.draw_text(&format!("{} / {}", index + 1, len), x, layout.like.y as i32 - 36, 18, MUTED);
        }

        widgets::draw_button(d, layout.prev, "<", false, self.hovered(layout.prev));
        widgets::draw_button(d, layout.next, ">", false, self.hovered(layout.next));
        widgets::draw_button(d, layout.close, "X", false, self.hovered(layout.close));
        let liked = self.gallery.is_liked(item.id);
        widgets::draw_button(d, layout.like, if liked { "Liked" } else { "Like" }, liked, self.hovered(layout.like));
        widgets::draw_button(d, layout.share, "Share", false, self.hovered(layout.share));
        widgets::draw_button(d, layout.download, "Download", false, self.hovered(layout.download));

        let filtered = self.gallery.filtered();
        for ((id, area), thumb) in self.thumbnail_areas().into_iter().zip(filtered) {
            self.draw_picture(d, thumb, area);
            if id == item.id {
                d.draw_rectangle_lines_ex(area, 3.0, GOLD);
            }
        }
    }
}

impl Page for GalleryPage {
    fn title(&self) -> &'static str {
        "Gallery"
    }

    fn update(&mut self, input: &FrameInput, _dt: f32) -> Vec<Effect> {
        self.mouse = input.mouse;
        if self.gallery.is_open() {
            self.update_lightbox(input)
        } else {
            self.update_grid(input);
            Vec::new()
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        self.draw_grid(d);
        if self.gallery.is_open() {
            self.draw_lightbox(d);
        }
    }
}
