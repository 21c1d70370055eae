use raylib::prelude::*;
use tracing::debug;

use hrm_showcase::contact::{ContactSubmission, Field, FieldError, SubmissionStatus, SubmitError};
use hrm_showcase::content::{OFFICE_ADDRESS, OFFICE_PHONE};
use crate::engine::{AppClock, Effect, FrameInput, Page};
use crate::widgets::{self, GOLD, HEART, MUTED, PANEL, TEXT};

const FIELD_LIMIT: usize = 600;

pub struct ContactPage {
    submission: ContactSubmission<AppClock>,
    recipient: String,
    focused: Option<Field>,
    errors: Vec<FieldError>,
    mouse: Vector2,
    width: f32,
}

impl ContactPage {
    pub fn new(submission: ContactSubmission<AppClock>, recipient: String, width: f32) -> Self {
        Self {
            submission,
            recipient,
            focused: None,
            errors: Vec::new(),
            mouse: Vector2::new(0.0, 0.0),
            width,
        }
    }

    fn field_area(&self, field: Field) -> Rectangle {
        let x = self.width * 0.45;
        let width = self.width * 0.5;
        match field {
            Field::Name => Rectangle::new(x, 140.0, width, 44.0),
            Field::Email => Rectangle::new(x, 220.0, width, 44.0),
            Field::Subject => Rectangle::new(x, 300.0, width, 44.0),
            Field::Message => Rectangle::new(x, 380.0, width, 150.0),
        }
    }

    fn send_area(&self) -> Rectangle {
        Rectangle::new(self.width * 0.45, 550.0, 180.0, 48.0)
    }

    fn focus_next(&mut self) {
        let next = match self.focused {
            None | Some(Field::Message) => Field::Name,
            Some(Field::Name) => Field::Email,
            Some(Field::Email) => Field::Subject,
            Some(Field::Subject) => Field::Message,
        };
        self.focused = Some(next);
    }

    fn submit(&mut self) {
        match self.submission.submit() {
            Ok(()) => {
                self.errors.clear();
                self.focused = None;
            }
            Err(SubmitError::Invalid(errors)) => self.errors = errors,
            Err(SubmitError::Busy) => debug!("ignoring submit while a message is in flight"),
        }
    }
}

impl Page for ContactPage {
    fn title(&self) -> &'static str {
        "Contact"
    }

    fn captures_text(&self) -> bool {
        self.focused.is_some()
    }

    fn update(&mut self, input: &FrameInput, _dt: f32) -> Vec<Effect> {
        self.mouse = input.mouse;

        if input.clicked {
            self.focused = Field::ALL.into_iter().find(|field| input.clicked_in(self.field_area(*field)));
            if input.clicked_in(self.send_area()) {
                self.submit();
            }
        }

        if input.pressed(KeyboardKey::KEY_TAB) {
            self.focus_next();
        }
        if input.pressed(KeyboardKey::KEY_ESCAPE) {
            self.focused = None;
        }

        if self.submission.status() == SubmissionStatus::Idle {
            if let Some(field) = self.focused {
                let value = self.submission.form_mut().field_mut(field);
                for c in &input.chars {
                    if value.chars().count() < FIELD_LIMIT {
                        value.push(*c);
                    }
                }
                if input.pressed(KeyboardKey::KEY_BACKSPACE) {
                    value.pop();
                }
                if input.pressed(KeyboardKey::KEY_ENTER) {
                    if field == Field::Message {
                        value.push('\n');
                    } else {
                        self.submit();
                    }
                }
            }
        }

        match self.submission.update() {
            Some(uri) => vec![Effect::OpenUri(uri)],
            None => Vec::new(),
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        // --- Office information ---
        let left = 60;
        d.draw_text("Get in Touch", left, 90, 40, TEXT);
        d.draw_text("Office Information", left, 160, 24, GOLD);
        widgets::draw_wrapped(d, OFFICE_ADDRESS, left, 200, 18, self.width * 0.32, MUTED);
        d.draw_text(OFFICE_PHONE, left, 260, 18, MUTED);
        d.draw_text(&self.recipient, left, 290, 18, MUTED);

        // --- Form ---
        d.draw_text("Send a Message", (self.width * 0.45) as i32, 90, 24, GOLD);
        let form = self.submission.form();
        for field in Field::ALL {
            let area = self.field_area(field);
            d.draw_text(field.label(), area.x as i32, area.y as i32 - 22, 16, MUTED);
            d.draw_rectangle_rec(area, PANEL);
            let border = if self.focused == Some(field) { GOLD } else { MUTED };
            d.draw_rectangle_lines_ex(area, 2.0, border);

            let mut text = form.field(field).to_string();
            if self.focused == Some(field) {
                text.push('_');
            }
            let mut y = area.y as i32 + 12;
            for line in text.split('\n') {
                for wrapped in widgets::wrap_text(line, 18, area.width - 24.0) {
                    if y > (area.y + area.height) as i32 - 22 {
                        break;
                    }
                    d.draw_text(&wrapped, area.x as i32 + 12, y, 18, TEXT);
                    y += 22;
                }
            }
        }

        let send = self.send_area();
        let busy = self.submission.status() != SubmissionStatus::Idle;
        let label = if busy { "Sending" } else { "Send Message" };
        widgets::draw_button(d, send, label, busy, send.check_collision_point_rec(self.mouse));

        let status_y = (send.y + send.height) as i32 + 16;
        let status = self.submission.status_message();
        if !status.is_empty() {
            d.draw_text(status, send.x as i32, status_y, 18, GOLD);
        }
        for (i, error) in self.errors.iter().enumerate() {
            d.draw_text(&error.to_string(), send.x as i32 + 200, send.y as i32 + i as i32 * 20, 16, HEART);
        }
    }
}
