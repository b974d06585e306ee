use log::debug;

use crate::destination::Destination;

/// The fixed, ordered set of destinations shown by the app. Records are never
/// added or removed after construction, only their `expanded` flag changes.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    pub fn seeded() -> Self {
        Self::from_destinations(vec![
            Destination::new(1, "Pokemon 1", "Kanto Region", "poke1"),
            Destination::new(2, "Pokemon 2", "Gunma Region", "poke2"),
            Destination::new(3, "Pokemon 3", "Tohoku Region", "poke3"),
            Destination::new(4, "Pokemon 4", "Kansai Region", "poke4"),
            Destination::new(5, "Pokemon 5", "Chubu Region", "poke5"),
        ])
    }

    pub fn from_destinations(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    pub fn list(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn get(&self, index: usize) -> Option<&Destination> {
        self.destinations.get(index)
    }

    /// Flip the `expanded` flag of the destination with the given id.
    /// Returns whether a destination was found. Unknown ids are ignored.
    pub fn toggle_expand(&mut self, id: u32) -> bool {
        if let Some(destination) = self.destinations.iter_mut().find(|d| d.id == id) {
            destination.expanded = !destination.expanded;
            true
        } else {
            debug!("toggle_expand: no destination with id {id}");
            false
        }
    }

    /// index of the first expanded destination, if any
    pub fn expanded_index(&self) -> Option<usize> {
        self.destinations.iter().position(|d| d.expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_is_ordered_and_collapsed() {
        let catalog = Catalog::seeded();
        let ids: Vec<u32> = catalog.list().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(catalog.list().iter().all(|d| !d.expanded));
        assert_eq!(catalog.get(0).map(|d| d.image.as_str()), Some("poke1"));
        assert_eq!(catalog.get(4).map(|d| d.image.as_str()), Some("poke5"));
        assert_eq!(catalog.expanded_index(), None);
    }

    #[test]
    fn toggle_expand_flips_only_the_matching_record() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.toggle_expand(3));
        assert_eq!(catalog.expanded_index(), Some(2));
        assert_eq!(catalog.list().iter().filter(|d| d.expanded).count(), 1);

        assert!(catalog.toggle_expand(3));
        assert_eq!(catalog.expanded_index(), None);
    }

    #[test]
    fn toggle_expand_with_unknown_id_is_a_noop() {
        let mut catalog = Catalog::seeded();
        let before = catalog.list().to_vec();
        assert!(!catalog.toggle_expand(42));
        assert_eq!(catalog.list(), before.as_slice());
    }
}
