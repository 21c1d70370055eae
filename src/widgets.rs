use raylib::prelude::*;

pub const NAVY: Color = Color::new(15, 23, 42, 255);
pub const PANEL: Color = Color::new(30, 41, 59, 255);
pub const GOLD: Color = Color::new(212, 175, 55, 255);
pub const TEXT: Color = Color::new(226, 232, 240, 255);
pub const MUTED: Color = Color::new(148, 163, 184, 255);
pub const HEART: Color = Color::new(239, 68, 68, 255);

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Greedy word wrap on an estimated glyph width (half the font size).
pub fn wrap_text(text: &str, font_size: i32, max_width: f32) -> Vec<String> {
    let max_chars = ((max_width / (font_size as f32 * 0.5)) as usize).max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn draw_wrapped(d: &mut RaylibDrawHandle, text: &str, x: i32, y: i32, font_size: i32, max_width: f32, color: Color) -> i32 {
    let mut y = y;
    for line in wrap_text(text, font_size, max_width) {
        d.draw_text(&line, x, y, font_size, color);
        y += font_size + 6;
    }
    y
}

pub fn draw_button(d: &mut RaylibDrawHandle, area: Rectangle, label: &str, active: bool, hovered: bool) {
    let fill = if active {
        GOLD
    } else if hovered {
        with_alpha(GOLD, 0.35)
    } else {
        PANEL
    };
    d.draw_rectangle_rec(area, fill);
    let text_color = if active { NAVY } else { TEXT };
    d.draw_text(label, area.x as i32 + 12, (area.y + area.height / 2.0) as i32 - 9, 18, text_color);
}

/// Draws `texture` cropped to fill `dest` without stretching.
pub fn draw_cover(d: &mut RaylibDrawHandle, texture: &Texture2D, dest: Rectangle, tint: Color) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    let dest_ratio = dest.width / dest.height;
    let source = if tex_width / tex_height > dest_ratio {
        let width = tex_height * dest_ratio;
        Rectangle::new((tex_width - width) * 0.5, 0.0, width, tex_height)
    } else {
        let height = tex_width / dest_ratio;
        Rectangle::new(0.0, (tex_height - height) * 0.5, tex_width, height)
    };
    d.draw_texture_pro(texture, source, dest, Vector2::new(0.0, 0.0), 0.0, tint);
}

/// Indicator dots for a carousel, centred under `center_x`. Returns their hit areas.
pub fn dot_areas(count: usize, center_x: f32, y: f32) -> Vec<Rectangle> {
    let spacing = 24.0;
    let start = center_x - spacing * (count.saturating_sub(1)) as f32 / 2.0;
    (0..count)
        .map(|i| Rectangle::new(start + spacing * i as f32 - 8.0, y - 8.0, 16.0, 16.0))
        .collect()
}

pub fn draw_dots(d: &mut RaylibDrawHandle, areas: &[Rectangle], active: usize) {
    for (i, area) in areas.iter().enumerate() {
        let cx = (area.x + area.width / 2.0) as i32;
        let cy = (area.y + area.height / 2.0) as i32;
        let (radius, color) = if i == active { (7.0, GOLD) } else { (5.0, MUTED) };
        d.draw_circle(cx, cy, radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_estimated_width() {
        let lines = wrap_text("one two three four five", 20, 100.0);
        assert_eq!(lines, vec!["one two", "three four", "five"]);
    }

    #[test]
    fn dots_are_centred() {
        let areas = dot_areas(3, 100.0, 50.0);
        assert_eq!(areas[1].x + areas[1].width / 2.0, 100.0);
    }
}
