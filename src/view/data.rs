use crate::animation::{Spring, SpringValue};
use crate::assets::{AssetCatalog, ImageRef};
use crate::presenter::Presenter;

/// animation state of one card in the list
pub struct CardData {
    /// 0 when compact, 1 when expanded
    pub expansion: SpringValue,
    /// accumulated length of the current drag
    pub drag_distance: f32,
    pub image: ImageRef,
}

/// contains all the data required to draw the ui that isn't owned by the presenter.
pub struct Data {
    pub cards: Vec<CardData>,
    /// 0 when hidden, 1 when shown
    pub overlay: SpringValue,
    /// vertical scroll position of the card list
    pub scroll_offset: f32,
}

impl Data {
    pub fn new(presenter: &Presenter, assets: &AssetCatalog, spring: Spring) -> Self {
        let cards = presenter
            .catalog()
            .list()
            .iter()
            .map(|destination| CardData {
                expansion: SpringValue::new(progress_target(destination.expanded), spring),
                drag_distance: 0.0,
                image: assets.resolve_image(&destination.image),
            })
            .collect();
        Self {
            cards,
            overlay: SpringValue::new(progress_target(presenter.overlay_visible()), spring),
            scroll_offset: 0.0,
        }
    }

    /// Point every animation at the presenter's current state.
    pub fn sync(&mut self, presenter: &Presenter, now: f64) {
        for (card, destination) in self.cards.iter_mut().zip(presenter.catalog().list()) {
            card.expansion
                .set_target(progress_target(destination.expanded), now);
        }
        self.overlay
            .set_target(progress_target(presenter.overlay_visible()), now);
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.overlay.is_animating(now) || self.cards.iter().any(|c| c.expansion.is_animating(now))
    }
}

fn progress_target(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::message::Event;

    #[test]
    fn sync_starts_animations_toward_the_new_state() {
        let mut presenter = Presenter::new(Catalog::seeded(), false);
        let assets = AssetCatalog::new("/nonexistent");
        let mut data = Data::new(&presenter, &assets, Spring::default());
        assert_eq!(data.cards.len(), 5);
        assert!(!data.is_animating(0.0));

        presenter.handle(Event::TapCard(2));
        data.sync(&presenter, 0.0);
        assert!(data.is_animating(0.1));
        assert!(!data.cards[0].expansion.is_animating(0.1));

        // long after, everything has settled on the new state
        assert!(!data.is_animating(30.0));
        assert!((data.cards[2].expansion.value(30.0) - 1.0).abs() < f32::EPSILON);
        assert!(data.cards[0].expansion.value(30.0).abs() < f32::EPSILON);
        assert!((data.overlay.value(30.0) - 1.0).abs() < f32::EPSILON);
    }
}
