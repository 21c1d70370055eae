use raylib::prelude::*;

use hrm_showcase::content::{HERO_STATS, INTRO, TAGLINE};
use hrm_showcase::rotation::RotationController;
use crate::engine::{AppClock, Effect, FrameInput, Page};
use crate::slide::Slide;
use crate::widgets::{self, GOLD, MUTED, NAVY, TEXT};

pub struct HomePage {
    carousel: RotationController<AppClock>,
    slides: Vec<Slide>,
    shown: usize,
    mouse: Vector2,
    width: f32,
    height: f32,
}

impl HomePage {
    pub fn new(mut slides: Vec<Slide>, carousel: RotationController<AppClock>, width: f32, height: f32) -> Self {
        if let Some(first) = slides.first_mut() {
            first.show_now();
        }
        Self { carousel, slides, shown: 0, mouse: Vector2::new(0.0, 0.0), width, height }
    }

    fn hero_area(&self) -> Rectangle {
        Rectangle::new(self.width * 0.5, 90.0, self.width * 0.46, self.height - 130.0)
    }

    fn arrow_areas(&self) -> (Rectangle, Rectangle) {
        let hero = self.hero_area();
        let y = hero.y + hero.height / 2.0 - 24.0;
        (
            Rectangle::new(hero.x + 12.0, y, 40.0, 48.0),
            Rectangle::new(hero.x + hero.width - 52.0, y, 40.0, 48.0),
        )
    }

    fn dot_areas(&self) -> Vec<Rectangle> {
        let hero = self.hero_area();
        widgets::dot_areas(self.slides.len(), hero.x + hero.width / 2.0, hero.y + hero.height - 24.0)
    }
}

impl Page for HomePage {
    fn title(&self) -> &'static str {
        "Home"
    }

    fn update(&mut self, input: &FrameInput, dt: f32) -> Vec<Effect> {
        self.mouse = input.mouse;
        self.carousel.set_hover(input.hovering(self.hero_area()));

        let (prev_area, next_area) = self.arrow_areas();
        if input.pressed(KeyboardKey::KEY_LEFT) || input.clicked_in(prev_area) {
            self.carousel.previous();
        }
        if input.pressed(KeyboardKey::KEY_RIGHT) || input.clicked_in(next_area) {
            self.carousel.next();
        }
        if let Some(index) = self.dot_areas().iter().position(|area| input.clicked_in(*area)) {
            self.carousel.go_to(index);
        }

        self.carousel.update();

        // Crossfade from the slide on screen to the one the carousel selected
        let index = self.carousel.index();
        if index != self.shown && index < self.slides.len() {
            self.slides[self.shown].hide();
            self.slides[index].show();
            self.shown = index;
        }
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }

        Vec::new()
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        // --- Left: introduction ---
        let left = 60;
        d.draw_text(TAGLINE, left, 110, 18, GOLD);
        d.draw_text("Human Rights", left, 145, 52, TEXT);
        d.draw_text("Movement", left, 200, 52, GOLD);
        let y = widgets::draw_wrapped(d, INTRO, left, 275, 20, self.width * 0.4, MUTED);

        for (i, (value, label)) in HERO_STATS.iter().enumerate() {
            let x = left + i as i32 * 170;
            d.draw_text(value, x, y + 40, 36, GOLD);
            d.draw_text(label, x, y + 82, 16, MUTED);
        }

        // --- Right: rotating hero gallery ---
        let hero = self.hero_area();
        d.draw_rectangle_rec(hero, NAVY);

        // Outgoing slide first so the incoming one fades in on top
        for (i, slide) in self.slides.iter().enumerate() {
            if i != self.shown && slide.is_visible() {
                slide.draw(d, hero);
            }
        }
        if let Some(slide) = self.slides.get(self.shown) {
            slide.draw(d, hero);

            let caption_y = (hero.y + hero.height) as i32 - 110;
            d.draw_rectangle(hero.x as i32, caption_y - 10, hero.width as i32, 110, widgets::with_alpha(NAVY, 0.7));
            d.draw_text(&slide.title, hero.x as i32 + 24, caption_y, 28, TEXT);
            d.draw_text(&slide.description, hero.x as i32 + 24, caption_y + 36, 18, MUTED);
        }

        let (prev_area, next_area) = self.arrow_areas();
        widgets::draw_button(d, prev_area, "<", false, prev_area.check_collision_point_rec(self.mouse));
        widgets::draw_button(d, next_area, ">", false, next_area.check_collision_point_rec(self.mouse));
        widgets::draw_dots(d, &self.dot_areas(), self.carousel.index());

        if self.carousel.is_paused() {
            d.draw_text("paused", hero.x as i32 + 12, hero.y as i32 + 12, 16, MUTED);
        }
    }
}
