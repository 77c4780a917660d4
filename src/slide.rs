use raylib::prelude::*;

use crate::constants::SLIDE_FADE_DURATION;

pub struct Slide {
    texture: Texture2D,

    pub active: bool,

    // Opacity ramp since the last activation, 0.0 to 1.0
    fade: f32,
}

impl Slide {
    pub fn new(texture: Texture2D) -> Self {
        Self {
            texture,
            active: false,
            fade: 0.0,
        }
    }

    /// Makes this slide the visible one; its fade-in restarts.
    pub fn activate(&mut self) {
        self.active = true;
        self.fade = 0.0;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn update(&mut self, dt: f32) {
        if self.active && self.fade < 1.0 {
            self.fade = (self.fade + dt / SLIDE_FADE_DURATION).min(1.0);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if !self.active {
            return;
        }

        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        // Fit inside the slide area, centered, preserving aspect ratio.
        // Images smaller than the area are not upscaled.
        let scale = (area.width / tex_width)
            .min(area.height / tex_height)
            .min(1.0);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            area.x + (area.width - scaled_width) * 0.5,
            area.y + (area.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        let tint = Color::new(255, 255, 255, (self.fade * 255.0) as u8);
        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::zero(),
            0.0,
            tint,
        );
    }
}
