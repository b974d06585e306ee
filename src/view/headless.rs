//! Runs a `Context` frame by frame without a window, feeding it synthetic
//! pointer input, so widgets and screens can be clicked and dragged in tests.

use egui::{Context, Modifiers, PointerButton, Pos2, RawInput, Rect};

/// Same size as the default window.
pub const SCREEN: egui::Vec2 = egui::vec2(390.0, 844.0);
const FRAME: f64 = 1.0 / 60.0;

#[derive(Default)]
pub struct Headless {
    ctx: Context,
    time: f64,
}

impl Headless {
    /// One frame, `dt` seconds after the previous one, with `events` as its input.
    pub fn frame(
        &mut self,
        events: Vec<egui::Event>,
        dt: f64,
        run_ui: &mut impl FnMut(&Context),
    ) {
        self.time += dt;
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let _output = self.ctx.run(input, |ctx| run_ui(ctx));
    }

    /// Frames without input until `seconds` have passed.
    pub fn idle(&mut self, seconds: f64, mut run_ui: impl FnMut(&Context)) {
        let mut left = seconds;
        while left > 0.0 {
            let dt = left.min(0.1);
            self.frame(Vec::new(), dt, &mut run_ui);
            left -= dt;
        }
    }

    /// Move there, press, release, one frame each.
    pub fn click(&mut self, pos: Pos2, mut run_ui: impl FnMut(&Context)) {
        self.frame(vec![egui::Event::PointerMoved(pos)], FRAME, &mut run_ui);
        self.frame(vec![button(pos, true)], FRAME, &mut run_ui);
        self.frame(vec![button(pos, false)], FRAME, &mut run_ui);
        self.frame(Vec::new(), FRAME, &mut run_ui);
    }

    /// Press at `from`, move to `to` in `steps` frames, release.
    pub fn drag(&mut self, from: Pos2, to: Pos2, steps: u16, mut run_ui: impl FnMut(&Context)) {
        self.frame(vec![egui::Event::PointerMoved(from)], FRAME, &mut run_ui);
        self.frame(vec![button(from, true)], FRAME, &mut run_ui);
        for step in 1..=steps {
            let pos = from.lerp(to, f32::from(step) / f32::from(steps));
            self.frame(vec![egui::Event::PointerMoved(pos)], FRAME, &mut run_ui);
        }
        self.frame(vec![button(to, false)], FRAME, &mut run_ui);
        self.frame(Vec::new(), FRAME, &mut run_ui);
    }
}

fn button(pos: Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}
