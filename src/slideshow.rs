use raylib::prelude::*;
use tracing::debug;

use crate::slide::Slide;
use crate::state::{Change, Event, SlideshowState};
use crate::ui::{self, Indicator, Layout};

/// The slideshow component: owns the slides, their indicators and the
/// state machine, translates raw frame input into events, and keeps
/// exactly one slide and its matching indicator active.
pub struct Slideshow {
    slides: Vec<Slide>,
    indicators: Vec<Indicator>,
    state: SlideshowState,
    hovering: bool,
    dragging: bool,
    touching: bool,
    last_touch_x: f32,
}

impl Slideshow {
    pub fn new(slides: Vec<Slide>, interval: f32) -> Self {
        let indicators = (0..slides.len()).map(|_| Indicator::new()).collect();
        let state = SlideshowState::new(slides.len(), interval);
        let mut slideshow = Self {
            slides,
            indicators,
            state,
            hovering: false,
            dragging: false,
            touching: false,
            last_touch_x: 0.0,
        };
        if !slideshow.state.is_empty() {
            slideshow.apply(Change { from: 0, to: 0 });
        }
        slideshow
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Translates this frame's mouse, touch and keyboard state into
    /// slideshow events. Inert when there are no slides.
    pub fn handle_input(&mut self, rl: &RaylibHandle, layout: &Layout) {
        if self.is_empty() {
            return;
        }

        let mouse = rl.get_mouse_position();

        // Hovering the slide area pauses autoplay; leaving re-arms it
        let over = layout.slide_area.check_collision_point_rec(mouse);
        if over != self.hovering {
            self.hovering = over;
            self.dispatch(if over {
                Event::HoverEnter
            } else {
                Event::HoverLeave
            });
        }

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.dispatch(Event::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.dispatch(Event::Prev);
        }

        // Controls claim the press first; only the bare surface starts a drag
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if layout.prev_button.check_collision_point_rec(mouse) {
                self.dispatch(Event::Prev);
            } else if layout.next_button.check_collision_point_rec(mouse) {
                self.dispatch(Event::Next);
            } else if let Some(index) = layout.indicator_at(mouse) {
                self.dispatch(Event::GoTo(index));
            } else if over {
                self.dragging = true;
                self.dispatch(Event::PointerDown(mouse.x));
            }
        }
        if self.dragging {
            if !over {
                // The pointer left the surface mid-drag: cancel, never navigate
                self.dragging = false;
                self.dispatch(Event::PointerLeave);
            } else if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
                self.dragging = false;
                self.dispatch(Event::PointerUp(mouse.x));
            }
        }

        // Touch swipes are tracked separately from the mouse pointer and
        // only start on the slide surface
        if rl.get_touch_point_count() > 0 {
            let touch = rl.get_touch_position(0);
            self.last_touch_x = touch.x;
            if !self.touching && layout.slide_area.check_collision_point_rec(touch) {
                self.touching = true;
                self.dispatch(Event::TouchStart(touch.x));
            }
        } else if self.touching {
            self.touching = false;
            // a touch end reports no position, use the last sampled one
            self.dispatch(Event::TouchEnd(self.last_touch_x));
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(change) = self.state.tick(dt) {
            self.apply(change);
        }
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, layout: &Layout, mouse: Vector2) {
        if self.is_empty() {
            return;
        }
        if let Some(slide) = self.slides.get(self.state.current()) {
            slide.draw(d, layout.slide_area);
        }
        ui::draw_nav_buttons(d, layout, mouse);
        ui::draw_indicators(d, layout, &self.indicators);
    }

    fn dispatch(&mut self, event: Event) {
        if let Some(change) = self.state.transition(event) {
            self.apply(change);
        }
    }

    // Sole consumer of Change: deactivates the outgoing slide/indicator
    // pair and activates the incoming one.
    fn apply(&mut self, change: Change) {
        self.slides[change.from].deactivate();
        self.indicators[change.from].active = false;
        self.slides[change.to].activate();
        self.indicators[change.to].active = true;
        debug!(from = change.from, to = change.to, "slide change");
    }
}
