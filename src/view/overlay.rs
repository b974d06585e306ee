use egui::{Align2, Color32, FontId, Layout, Rect, Sense};

use super::gradient_button::{GradientIconButton, Icon, BUTTON_SIZE};
use super::paint::{self, Direction};
use super::View;
use crate::assets::ImageRef;
use crate::config::Theme;
use crate::destination::Destination;
use crate::message::Event;

/// How a destination panel is drawn, shared by the inline card and the overlay.
pub struct PanelStyle<'a> {
    pub theme: &'a Theme,
    pub corner_radius: f32,
    pub opacity: f32,
    pub show_controls: bool,
}

/// Size of the picture on a panel, relative to the whole screen.
pub fn image_size(screen: Rect) -> egui::Vec2 {
    egui::vec2(screen.width() / 1.2, screen.height() / 3.0)
}

/// Draws the picture, the title and place, and, if requested, the back and
/// search buttons into `area`. Button clicks are pushed onto `events`.
pub fn ui_destination_panel(
    ui: &mut egui::Ui,
    area: Rect,
    destination: &Destination,
    image: &ImageRef,
    style: &PanelStyle<'_>,
    events: &mut Vec<Event>,
) {
    let opacity = style.opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }
    let screen = ui.ctx().screen_rect();
    let size = image_size(screen);
    let image_rect = Rect::from_min_size(
        egui::pos2(area.center().x - size.x / 2.0, area.top()),
        size,
    );

    image.paint(ui, image_rect, style.corner_radius, opacity);
    let painter = ui.painter();
    // darken the bottom so the text stays readable
    painter.add(paint::gradient_rounded_rect(
        image_rect,
        style.corner_radius,
        Direction::Vertical,
        Color32::TRANSPARENT,
        Color32::BLACK.gamma_multiply(0.8 * opacity),
    ));

    let text_color = style.theme.text.gamma_multiply(opacity);
    let text_pos = image_rect.center_top() + egui::vec2(0.0, 10.0);
    let title_rect = painter.text(
        text_pos,
        Align2::CENTER_TOP,
        &destination.title,
        FontId::proportional(18.0),
        text_color,
    );
    painter.text(
        title_rect.center_bottom() + egui::vec2(0.0, 2.0),
        Align2::CENTER_TOP,
        &destination.place,
        FontId::proportional(14.0),
        text_color,
    );

    if !style.show_controls {
        return;
    }

    let row = Rect::from_min_max(
        egui::pos2(area.left() + 20.0, area.top() + 40.0),
        egui::pos2(area.right() - 20.0, area.top() + 40.0 + BUTTON_SIZE),
    );
    let mut controls = ui.child_ui_with_id_source(
        row,
        Layout::left_to_right(egui::Align::Center),
        ("controls", destination.id),
    );
    let (start, end) = (
        style.theme.button_start.gamma_multiply(opacity),
        style.theme.button_end.gamma_multiply(opacity),
    );
    controls.add(
        GradientIconButton::new(Icon::ChevronLeft, 8.0, 15.0)
            .colors(start, end)
            .icon_color(text_color)
            .on_click(|| events.push(Event::Back)),
    );
    controls.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
        ui.add(
            GradientIconButton::new(Icon::MagnifyingGlass, 15.0, 15.0)
                .colors(start, end)
                .icon_color(text_color)
                .on_click(|| events.push(Event::Search)),
        );
    });
}

impl View {
    /// The standalone full screen overlay, drawn above the list while a card is
    /// expanded and while it fades out again.
    pub(crate) fn ui_overlay(&self, ctx: &egui::Context, now: f64, events: &mut Vec<Event>) {
        let progress = self.ui_data.overlay.value(now).clamp(0.0, 1.0);
        if progress <= 0.001 {
            return;
        }
        let index = self.presenter.active_index();
        let (Some(destination), Some(card)) = (
            self.presenter.catalog().get(index),
            self.ui_data.cards.get(index),
        ) else {
            return;
        };
        let style = PanelStyle {
            theme: &self.config.theme,
            corner_radius: self.config.cards.corner_radius,
            opacity: progress,
            show_controls: self.presenter.overlay_visible(),
        };

        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("detail overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                // cover the whole screen so the list underneath gets no input
                let (rect, _response) = ui.allocate_exact_size(screen.size(), Sense::hover());
                ui_destination_panel(ui, rect, destination, &card.image, &style, events);
            });
    }
}
