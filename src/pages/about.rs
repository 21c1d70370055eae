use raylib::prelude::*;

use hrm_showcase::content::{Testimonial, MISSION, VISION};
use hrm_showcase::rotation::RotationController;
use crate::engine::{AppClock, Effect, FrameInput, Page};
use crate::widgets::{self, GOLD, MUTED, PANEL, TEXT};

pub struct AboutPage {
    carousel: RotationController<AppClock>,
    testimonials: Vec<Testimonial>,
    mouse: Vector2,
    width: f32,
    height: f32,
}

impl AboutPage {
    pub fn new(testimonials: Vec<Testimonial>, carousel: RotationController<AppClock>, width: f32, height: f32) -> Self {
        Self { carousel, testimonials, mouse: Vector2::new(0.0, 0.0), width, height }
    }

    fn panel_area(&self) -> Rectangle {
        Rectangle::new(self.width * 0.1, self.height * 0.45, self.width * 0.8, self.height * 0.45)
    }

    fn arrow_areas(&self) -> (Rectangle, Rectangle) {
        let panel = self.panel_area();
        let y = panel.y + panel.height - 56.0;
        (
            Rectangle::new(panel.x + 16.0, y, 40.0, 40.0),
            Rectangle::new(panel.x + panel.width - 56.0, y, 40.0, 40.0),
        )
    }

    fn dot_areas(&self) -> Vec<Rectangle> {
        let panel = self.panel_area();
        widgets::dot_areas(self.testimonials.len(), panel.x + panel.width / 2.0, panel.y + panel.height - 36.0)
    }
}

impl Page for AboutPage {
    fn title(&self) -> &'static str {
        "About"
    }

    fn update(&mut self, input: &FrameInput, _dt: f32) -> Vec<Effect> {
        self.mouse = input.mouse;
        self.carousel.set_hover(input.hovering(self.panel_area()));

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
        Vec::new()
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        let column = self.width * 0.38;
        let left = (self.width * 0.1) as i32;
        let right = (self.width * 0.52) as i32;

        d.draw_text("Our Mission", left, 100, 28, GOLD);
        widgets::draw_wrapped(d, MISSION, left, 140, 18, column, MUTED);
        d.draw_text("Our Vision", right, 100, 28, GOLD);
        widgets::draw_wrapped(d, VISION, right, 140, 18, column, MUTED);

        let panel = self.panel_area();
        d.draw_rectangle_rec(panel, PANEL);
        d.draw_rectangle_lines_ex(panel, 2.0, GOLD);

        let Some(testimonial) = self.testimonials.get(self.carousel.index()) else {
            return;
        };

        let x = panel.x as i32 + 40;
        let mut y = panel.y as i32 + 30;
        d.draw_text("\"", x - 24, y - 8, 48, GOLD);
        y = widgets::draw_wrapped(d, testimonial.content, x, y, 22, panel.width - 80.0, TEXT);

        for star in 0..testimonial.rating {
            d.draw_circle(x + 8 + star as i32 * 22, y + 18, 7.0, GOLD);
        }
        d.draw_text(testimonial.name, x, y + 40, 22, TEXT);
        d.draw_text(testimonial.position, x, y + 68, 16, MUTED);

        let (prev_area, next_area) = self.arrow_areas();
        widgets::draw_button(d, prev_area, "<", false, prev_area.check_collision_point_rec(self.mouse));
        widgets::draw_button(d, next_area, ">", false, next_area.check_collision_point_rec(self.mouse));
        widgets::draw_dots(d, &self.dot_areas(), self.carousel.index());
    }
}
