use egui::{Color32, Rect, Response, Sense, Shape, Stroke, Ui, Vec2, Widget};
use strum::{Display, EnumIter};

use super::paint;

/// diameter of every gradient button
pub const BUTTON_SIZE: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Icon {
    #[strum(serialize = "chevron.left")]
    ChevronLeft,
    #[strum(serialize = "magnifyingglass")]
    MagnifyingGlass,
}

impl Icon {
    /// Line art for the icon, scaled to fill `rect`.
    pub fn shapes(self, rect: Rect, stroke: Stroke) -> Vec<Shape> {
        match self {
            Icon::ChevronLeft => vec![Shape::line(
                vec![rect.right_top(), rect.left_center(), rect.right_bottom()],
                stroke,
            )],
            Icon::MagnifyingGlass => {
                let radius = rect.width().min(rect.height()) * 0.35;
                let center = rect.left_top() + Vec2::splat(radius + stroke.width / 2.0);
                let handle_start = center + Vec2::splat(radius * std::f32::consts::FRAC_1_SQRT_2);
                vec![
                    Shape::circle_stroke(center, radius, stroke),
                    Shape::line_segment([handle_start, rect.right_bottom()], stroke),
                ]
            }
        }
    }
}

/// Round button with a gradient background and an icon on top.
pub struct GradientIconButton<'a> {
    icon: Icon,
    icon_size: Vec2,
    colors: (Color32, Color32),
    icon_color: Color32,
    action: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> GradientIconButton<'a> {
    pub fn new(icon: Icon, width: f32, height: f32) -> Self {
        Self {
            icon,
            icon_size: egui::vec2(width, height),
            colors: (crate::config::PURPLE, crate::config::BLUE),
            icon_color: Color32::WHITE,
            action: None,
        }
    }

    pub fn colors(mut self, start: Color32, end: Color32) -> Self {
        self.colors = (start, end);
        self
    }

    pub fn icon_color(mut self, color: Color32) -> Self {
        self.icon_color = color;
        self
    }

    /// Called right away when the button is clicked.
    pub fn on_click(mut self, action: impl FnOnce() + 'a) -> Self {
        self.action = Some(Box::new(action));
        self
    }
}

impl Widget for GradientIconButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            icon,
            icon_size,
            colors,
            icon_color,
            action,
        } = self;

        let (rect, response) = ui.allocate_exact_size(Vec2::splat(BUTTON_SIZE), Sense::click());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.add(paint::gradient_circle(
                rect.center(),
                BUTTON_SIZE / 2.0,
                colors.0,
                colors.1,
            ));
            let icon_rect = Rect::from_center_size(rect.center(), icon_size);
            painter.extend(icon.shapes(icon_rect, Stroke::new(2.0, icon_color)));
        }

        if response.clicked() {
            log::debug!("{icon} button clicked");
            if let Some(action) = action {
                action();
            }
        }
        response
    }
}
