use rand::Rng;
use raylib::prelude::*;

use hrm_showcase::constants::*;
use crate::widgets::{self, GOLD, PANEL, TEXT};

/// One hero image: crossfades in and out and pans slowly while shown.
pub struct Slide {
    image: Option<Texture2D>,
    pub title: String,
    pub description: String,

    opacity: f32,
    tween_fade: Option<ease::Tween>,
    fade_timer: f32,

    // Ken Burns effect parameters while shown
    ken_burns_pan_direction: i32,
    ken_burns_pan: Vector2,
    ken_burns_scale: f32,
    tween_ken_burns_scale: ease::Tween,
    tween_ken_burns_pan: (ease::Tween, ease::Tween),
}

impl Slide {
    pub fn new(image: Option<Texture2D>, title: &str, description: &str) -> Self {
        let (direction, tween_ken_burns_scale, tween_ken_burns_pan) = Self::ken_burns();
        Self {
            image,
            title: title.to_string(),
            description: description.to_string(),
            opacity: 0.0,
            tween_fade: None,
            fade_timer: 0.0,
            ken_burns_pan_direction: direction,
            ken_burns_pan: Vector2::new(0.0, 0.0),
            ken_burns_scale: 1.0,
            tween_ken_burns_scale,
            tween_ken_burns_pan,
        }
    }

    // Random panning direction: left-to-right, right-to-left, top-to-bottom, or bottom-to-top
    fn ken_burns() -> (i32, ease::Tween, (ease::Tween, ease::Tween)) {
        let direction = rand::rng().random_range(0..4);
        let end = match direction {
            0 => Vector2::new(0.06, 0.0),
            1 => Vector2::new(-0.06, 0.0),
            2 => Vector2::new(0.0, 0.06),
            _ => Vector2::new(0.0, -0.06),
        };
        (
            direction,
            ease::Tween::new(ease::linear_none, 1.0, 0.9, KEN_BURNS_DURATION),
            (
                ease::Tween::new(ease::linear_none, 0.0, end.x, KEN_BURNS_DURATION),
                ease::Tween::new(ease::linear_none, 0.0, end.y, KEN_BURNS_DURATION),
            ),
        )
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 || self.tween_fade.is_some()
    }

    /// Shows the slide at full opacity without a transition.
    pub fn show_now(&mut self) {
        self.opacity = 1.0;
        self.tween_fade = None;
    }

    pub fn show(&mut self) {
        self.tween_fade = Some(ease::Tween::new(ease::cubic_out, self.opacity, 1.0, CROSSFADE_DURATION));
        self.fade_timer = 0.0;
        let (direction, scale, pan) = Self::ken_burns();
        self.ken_burns_pan_direction = direction;
        self.ken_burns_pan = Vector2::new(0.0, 0.0);
        self.ken_burns_scale = 1.0;
        self.tween_ken_burns_scale = scale;
        self.tween_ken_burns_pan = pan;
    }

    pub fn hide(&mut self) {
        self.tween_fade = Some(ease::Tween::new(ease::cubic_out, self.opacity, 0.0, CROSSFADE_DURATION));
        self.fade_timer = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(tween) = self.tween_fade.as_mut() {
            self.opacity = tween.apply(dt);
            self.fade_timer += dt;
            if self.fade_timer >= CROSSFADE_DURATION {
                self.tween_fade = None;
            }
        }
        if self.opacity > 0.0 {
            self.ken_burns_scale = self.tween_ken_burns_scale.apply(dt);
            self.ken_burns_pan.x = self.tween_ken_burns_pan.0.apply(dt);
            self.ken_burns_pan.y = self.tween_ken_burns_pan.1.apply(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, dest: Rectangle) {
        if self.opacity <= 0.0 {
            return;
        }

        let Some(image) = &self.image else {
            d.draw_rectangle_rec(dest, widgets::with_alpha(PANEL, self.opacity));
            d.draw_rectangle_lines_ex(dest, 2.0, widgets::with_alpha(GOLD, self.opacity));
            d.draw_text(
                &self.title,
                dest.x as i32 + 24,
                (dest.y + dest.height / 2.0) as i32 - 14,
                28,
                widgets::with_alpha(TEXT, self.opacity),
            );
            return;
        };

        let tex_width = image.width() as f32;
        let tex_height = image.height() as f32;

        // Crop the texture to the destination aspect ratio (cover fit)
        let dest_ratio = dest.width / dest.height;
        let (crop_width, crop_height) = if tex_width / tex_height > dest_ratio {
            (tex_height * dest_ratio, tex_height)
        } else {
            (tex_width, tex_width / dest_ratio)
        };
        let crop_width = crop_width * self.ken_burns_scale;
        let crop_height = crop_height * self.ken_burns_scale;

        let pan_origin = match self.ken_burns_pan_direction {
            0 => Vector2::new(0.0, (tex_height - crop_height) * 0.5), // left-to-right
            1 => Vector2::new(tex_width - crop_width, (tex_height - crop_height) * 0.5), // right-to-left
            2 => Vector2::new((tex_width - crop_width) * 0.5, 0.0), // top-to-bottom
            _ => Vector2::new((tex_width - crop_width) * 0.5, tex_height - crop_height), // bottom-to-top
        };
        let source_rec = Rectangle::new(
            (pan_origin.x + self.ken_burns_pan.x * tex_width).clamp(0.0, tex_width - crop_width),
            (pan_origin.y + self.ken_burns_pan.y * tex_height).clamp(0.0, tex_height - crop_height),
            crop_width,
            crop_height,
        );

        d.draw_texture_pro(
            image,
            source_rec,
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            widgets::with_alpha(Color::WHITE, self.opacity),
        );
    }
}
