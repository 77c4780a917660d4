use raylib::prelude::*;

use crate::constants::*;

/// Mirrors one slide's active flag; drawn as a dot, clickable to jump
/// directly to that slide.
pub struct Indicator {
    pub active: bool,
}

impl Indicator {
    pub fn new() -> Self {
        Self { active: false }
    }
}

/// Screen regions of the slideshow chrome, recomputed from the window
/// size every frame so resizing just works.
pub struct Layout {
    pub slide_area: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
    indicator_origin: Vector2,
    indicator_count: usize,
}

impl Layout {
    pub fn compute(screen_width: f32, screen_height: f32, indicator_count: usize) -> Self {
        let slide_area = Rectangle::new(
            0.0,
            0.0,
            screen_width,
            (screen_height - INDICATOR_STRIP_HEIGHT).max(0.0),
        );
        let button_y = (slide_area.height - NAV_BUTTON_HEIGHT) * 0.5;
        let prev_button = Rectangle::new(0.0, button_y, NAV_BUTTON_WIDTH, NAV_BUTTON_HEIGHT);
        let next_button = Rectangle::new(
            screen_width - NAV_BUTTON_WIDTH,
            button_y,
            NAV_BUTTON_WIDTH,
            NAV_BUTTON_HEIGHT,
        );
        let strip_width = indicator_count.saturating_sub(1) as f32 * INDICATOR_SPACING;
        let indicator_origin = Vector2::new(
            (screen_width - strip_width) * 0.5,
            screen_height - INDICATOR_STRIP_HEIGHT * 0.5,
        );
        Self {
            slide_area,
            prev_button,
            next_button,
            indicator_origin,
            indicator_count,
        }
    }

    pub fn indicator_center(&self, index: usize) -> Vector2 {
        Vector2::new(
            self.indicator_origin.x + index as f32 * INDICATOR_SPACING,
            self.indicator_origin.y,
        )
    }

    /// Index of the indicator dot under the point, if any. The hit circle
    /// is larger than the drawn dot.
    pub fn indicator_at(&self, point: Vector2) -> Option<usize> {
        for index in 0..self.indicator_count {
            let center = self.indicator_center(index);
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            if dx * dx + dy * dy <= INDICATOR_HIT_RADIUS * INDICATOR_HIT_RADIUS {
                return Some(index);
            }
        }
        None
    }
}

pub fn draw_nav_buttons(d: &mut RaylibDrawHandle, layout: &Layout, mouse: Vector2) {
    draw_chevron(
        d,
        layout.prev_button,
        true,
        layout.prev_button.check_collision_point_rec(mouse),
    );
    draw_chevron(
        d,
        layout.next_button,
        false,
        layout.next_button.check_collision_point_rec(mouse),
    );
}

fn draw_chevron(d: &mut RaylibDrawHandle, zone: Rectangle, left: bool, hovered: bool) {
    let cx = zone.x + zone.width * 0.5;
    let cy = zone.y + zone.height * 0.5;
    let half = 12.0;
    let color = if hovered {
        Color::new(255, 255, 255, 230)
    } else {
        Color::new(255, 255, 255, 120)
    };
    let tip_x = if left { cx - half } else { cx + half };
    let base_x = if left { cx + half } else { cx - half };
    d.draw_line_ex(
        Vector2::new(base_x, cy - half),
        Vector2::new(tip_x, cy),
        3.0,
        color,
    );
    d.draw_line_ex(
        Vector2::new(tip_x, cy),
        Vector2::new(base_x, cy + half),
        3.0,
        color,
    );
}

pub fn draw_indicators(d: &mut RaylibDrawHandle, layout: &Layout, indicators: &[Indicator]) {
    for (index, indicator) in indicators.iter().enumerate() {
        let center = layout.indicator_center(index);
        if indicator.active {
            d.draw_circle_v(center, INDICATOR_RADIUS, Color::RAYWHITE);
        } else {
            d.draw_circle_v(center, INDICATOR_RADIUS * 0.75, Color::new(255, 255, 255, 90));
        }
    }
}

pub fn draw_empty_hint(d: &mut RaylibDrawHandle, directory: &str) {
    d.draw_text(
        &format!("No images found in {directory}"),
        20,
        20,
        20,
        Color::GRAY,
    );
}
