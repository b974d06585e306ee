use log::debug;

use crate::catalog::Catalog;
use crate::destination::Destination;
use crate::message::Event;

/// A compact card ignores drags shorter than this.
pub const COMPACT_DRAG_THRESHOLD: f32 = 500.0;

/// Owns the catalog and the shared ui flags. The view only reads from here and
/// sends [`Event`]s, so every state change goes through one place.
pub struct Presenter {
    catalog: Catalog,
    overlay_visible: bool,
    active_index: usize,
    follow_tapped_card: bool,
}

impl Presenter {
    pub fn new(catalog: Catalog, follow_tapped_card: bool) -> Self {
        Self {
            catalog,
            overlay_visible: false,
            active_index: 0,
            follow_tapped_card,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The destination drawn by the standalone overlay. This is `active_index`,
    /// which only tracks the tapped card when `follow_tapped_card` is set.
    pub fn overlay_destination(&self) -> Option<&Destination> {
        if self.overlay_visible {
            self.catalog.get(self.active_index)
        } else {
            None
        }
    }

    /// Apply an event, returns whether any state changed.
    pub fn handle(&mut self, event: Event) -> bool {
        debug!("{event}");
        match event {
            Event::TapCard(index) => self.tap_card(index),
            Event::Back => self.back(),
            Event::Search => self.search(),
            Event::Drag { index, distance } => self.drag(index, distance),
        }
    }

    /// Expand the card at `index`. Ignored while any card is expanded.
    pub fn tap_card(&mut self, index: usize) -> bool {
        let Some(destination) = self.catalog.get(index) else {
            return false;
        };
        if self.overlay_visible || self.catalog.expanded_index().is_some() {
            debug!("ignoring tap on {index}, a card is already expanded");
            return false;
        }
        let id = destination.id;
        self.catalog.toggle_expand(id);
        self.overlay_visible = true;
        if self.follow_tapped_card {
            self.active_index = index;
        }
        true
    }

    /// Collapse the expanded card and hide the overlay.
    pub fn back(&mut self) -> bool {
        let mut changed = false;
        if let Some(index) = self.catalog.expanded_index() {
            let id = self.catalog.list()[index].id;
            changed |= self.catalog.toggle_expand(id);
        }
        if self.overlay_visible {
            self.overlay_visible = false;
            changed = true;
        }
        changed
    }

    #[allow(clippy::unused_self)]
    pub fn search(&mut self) -> bool {
        false
    }

    /// Drags never change state, they only get logged once past the threshold.
    pub fn drag(&mut self, index: usize, distance: f32) -> bool {
        let Some(destination) = self.catalog.get(index) else {
            return false;
        };
        if distance >= drag_threshold(destination.expanded) {
            debug!("dragging card {index}");
        }
        false
    }
}

/// minimum drag distance before a card reacts to a drag
pub fn drag_threshold(expanded: bool) -> f32 {
    if expanded {
        0.0
    } else {
        COMPACT_DRAG_THRESHOLD
    }
}
