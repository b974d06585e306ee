use egui::{Align, Layout, RichText, Sense, Stroke};

use super::data::CardData;
use super::gradient_button::Icon;
use super::overlay::{ui_destination_panel, PanelStyle};
use super::paint::{self, Direction};
use super::View;
use crate::config::AppConfig;
use crate::destination::Destination;
use crate::message::Event;

const AVATAR_SIZE: f32 = 80.0;
const SIDE_PADDING: f32 = 16.0;

/// Where and how visible a card is for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisuals {
    pub height: f32,
    /// vertical shift applied on top of the card's place in the list
    pub offset_y: f32,
    pub opacity: f32,
}

/// `expansion` and `overlay` are the animation progress (0..1, may overshoot)
/// of this card and of the overlay. `min_y` is the distance from the top of
/// the viewport to the card's slot, so an expanding card slides up to the top
/// no matter how far the list is scrolled, while all other cards fade out.
pub fn card_visuals(
    compact_height: f32,
    expanded_height: f32,
    expansion: f32,
    overlay: f32,
    min_y: f32,
) -> CardVisuals {
    let height = compact_height + (expanded_height - compact_height) * expansion;
    let opacity = if expansion > 0.001 {
        1.0
    } else {
        (1.0 - overlay).clamp(0.0, 1.0)
    };
    CardVisuals {
        height: height.max(0.0),
        offset_y: -min_y * expansion,
        opacity,
    }
}

impl View {
    pub(crate) fn ui_list(&mut self, ctx: &egui::Context, now: f64, events: &mut Vec<Event>) {
        let Self {
            presenter,
            ui_data,
            config,
        } = self;
        let overlay_progress = ui_data.overlay.value(now);
        let scrolling = !presenter.overlay_visible();

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(0.0))
            .show(ctx, |ui| {
                let viewport = ui.max_rect();
                ui.painter().add(paint::gradient_rounded_rect(
                    viewport,
                    0.0,
                    Direction::Diagonal,
                    config.theme.background_start,
                    config.theme.background_end,
                ));

                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                    .enable_scrolling(scrolling)
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.y = config.cards.spacing;
                        ui_header(ui, config);
                        ui_avatars(ui, &ui_data.cards);
                        ui_section_title(ui, config);

                        let destinations = presenter.catalog().list();
                        for (index, (destination, card)) in
                            destinations.iter().zip(ui_data.cards.iter_mut()).enumerate()
                        {
                            let visuals = {
                                let expansion = card.expansion.value(now);
                                let min_y = ui.cursor().top() - viewport.top();
                                card_visuals(
                                    config.cards.compact_height,
                                    viewport.height(),
                                    expansion,
                                    overlay_progress,
                                    min_y,
                                )
                            };
                            ui_card(
                                ui,
                                index,
                                destination,
                                card,
                                visuals,
                                scrolling,
                                config,
                                events,
                            );
                        }
                    });
                ui_data.scroll_offset = output.state.offset.y;
            });
    }
}

fn ui_header(ui: &mut egui::Ui, config: &AppConfig) {
    ui.horizontal(|ui| {
        ui.add_space(SIDE_PADDING);
        ui.label(
            RichText::new("Let's Travel")
                .size(20.0)
                .strong()
                .color(config.theme.text),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.add_space(SIDE_PADDING);
            let (rect, _response) = ui.allocate_exact_size(egui::vec2(20.0, 20.0), Sense::hover());
            ui.painter().extend(
                Icon::MagnifyingGlass.shapes(rect, Stroke::new(2.0, config.theme.text)),
            );
        });
    });
}

fn ui_avatars(ui: &mut egui::Ui, cards: &[CardData]) {
    egui::ScrollArea::horizontal()
        .id_source("avatars")
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 15.0;
                ui.add_space(SIDE_PADDING);
                for card in cards {
                    let (rect, _response) =
                        ui.allocate_exact_size(egui::Vec2::splat(AVATAR_SIZE), Sense::hover());
                    card.image.paint(ui, rect, AVATAR_SIZE / 2.0, 1.0);
                }
                ui.add_space(SIDE_PADDING);
            });
        });
}

fn ui_section_title(ui: &mut egui::Ui, config: &AppConfig) {
    ui.horizontal(|ui| {
        ui.add_space(SIDE_PADDING);
        ui.label(
            RichText::new("Destinations")
                .size(13.0)
                .strong()
                .color(config.theme.text),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.add_space(SIDE_PADDING);
            ui.label(
                RichText::new("See all")
                    .size(13.0)
                    .color(config.theme.text.gamma_multiply(0.7)),
            );
        });
    });
}

#[allow(clippy::too_many_arguments)]
fn ui_card(
    ui: &mut egui::Ui,
    index: usize,
    destination: &Destination,
    card: &mut CardData,
    visuals: CardVisuals,
    scrolling: bool,
    config: &AppConfig,
    events: &mut Vec<Event>,
) {
    // an expanded card only listens for drags, so the buttons on it get the clicks
    let sense = if destination.expanded {
        Sense::drag()
    } else {
        Sense::click_and_drag()
    };
    let (slot, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), visuals.height), sense);

    if response.clicked() && !destination.expanded {
        events.push(Event::TapCard(index));
    }
    if response.dragged() {
        // the card keeps the drag for itself, so move the list along by hand
        if scrolling {
            ui.scroll_with_delta(egui::vec2(0.0, response.drag_delta().y));
        }
        card.drag_distance += response.drag_delta().length();
        events.push(Event::Drag {
            index,
            distance: card.drag_distance,
        });
    }
    if response.drag_released() {
        card.drag_distance = 0.0;
    }

    if !ui.is_rect_visible(slot) && visuals.offset_y.abs() < f32::EPSILON {
        return;
    }
    let area = slot.translate(egui::vec2(0.0, visuals.offset_y));
    let style = PanelStyle {
        theme: &config.theme,
        corner_radius: config.cards.corner_radius,
        opacity: visuals.opacity,
        show_controls: destination.expanded,
    };
    ui_destination_panel(ui, area, destination, &card.image, &style, events);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_card_without_overlay() {
        let v = card_visuals(250.0, 800.0, 0.0, 0.0, 420.0);
        assert_eq!(
            v,
            CardVisuals {
                height: 250.0,
                offset_y: 0.0,
                opacity: 1.0
            }
        );
    }

    #[test]
    fn expanded_card_fills_the_screen_and_pins_to_the_top() {
        let v = card_visuals(250.0, 800.0, 1.0, 1.0, 420.0);
        assert!((v.height - 800.0).abs() < 1e-3);
        assert!((v.offset_y + 420.0).abs() < 1e-3);
        assert!((v.opacity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn other_cards_fade_while_overlay_is_shown() {
        let halfway = card_visuals(250.0, 800.0, 0.0, 0.5, 100.0);
        assert!((halfway.opacity - 0.5).abs() < 1e-6);
        let hidden = card_visuals(250.0, 800.0, 0.0, 1.0, 100.0);
        assert!(hidden.opacity.abs() < f32::EPSILON);
        assert!(hidden.offset_y.abs() < f32::EPSILON);
        // overshooting springs never push the opacity out of range
        let overshoot = card_visuals(250.0, 800.0, 0.0, 1.2, 100.0);
        assert!(overshoot.opacity.abs() < f32::EPSILON);
    }

    #[test]
    fn pinning_follows_the_scroll_position() {
        let near = card_visuals(250.0, 800.0, 0.5, 0.5, 100.0);
        let far = card_visuals(250.0, 800.0, 0.5, 0.5, 900.0);
        assert!((near.offset_y + 50.0).abs() < 1e-3);
        assert!((far.offset_y + 450.0).abs() < 1e-3);
        assert!((near.height - 525.0).abs() < 1e-3);
    }
}
