mod data;
pub(crate) mod gradient_button;
#[cfg(test)]
mod headless;
mod list;
mod overlay;
pub(crate) mod paint;

use log::{debug, info};

use crate::assets::AssetCatalog;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::message::Event;
use crate::presenter::Presenter;
use crate::view::data::Data;

pub struct View {
    presenter: Presenter,
    ui_data: Data,
    config: AppConfig,
}

impl View {
    pub fn new(config: AppConfig) -> Self {
        let presenter = Presenter::new(Catalog::seeded(), config.overlay.follow_tapped_card);
        let assets = AssetCatalog::new(config.assets_dir());
        info!("loading images from {:?}", assets.dir());
        let ui_data = Data::new(&presenter, &assets, config.spring);
        Self {
            presenter,
            ui_data,
            config,
        }
    }

    pub fn new_and_start(config: AppConfig) -> anyhow::Result<()> {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(config.window.title.clone())
                .with_inner_size([config.window.width, config.window.height]),
            ..Default::default()
        };
        let title = config.window.title.clone();
        let view = Self::new(config);
        eframe::run_native(
            &title,
            native_options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
                Box::new(view)
            }),
        )
        .map_err(|err| anyhow::anyhow!("Failed to run the window: {err}"))
    }

    /// Hand the frame's events to the presenter and restart animations if anything changed.
    fn apply_events(&mut self, events: Vec<Event>, now: f64) {
        let mut changed = false;
        for event in events {
            changed |= self.presenter.handle(event);
        }
        if changed {
            debug!(
                "expanded: {:?}, overlay shows: {:?}, list scrolled to {}",
                self.presenter.catalog().expanded_index(),
                self.presenter.overlay_destination().map(|d| &d.title),
                self.ui_data.scroll_offset
            );
            self.ui_data.sync(&self.presenter, now);
        }
    }
}

impl eframe::App for View {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|input| input.time);
        let mut events = Vec::new();

        self.ui_list(ctx, now, &mut events);
        self.ui_overlay(ctx, now, &mut events);

        self.apply_events(events, now);
        if self.ui_data.is_animating(now) {
            ctx.request_repaint();
        }
    }
}
