#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub id: u32,
    pub title: String,
    pub place: String,
    /// key into the asset catalog, e.g. "poke1"
    pub image: String,
    pub expanded: bool,
}

impl Destination {
    pub fn new(id: u32, title: &str, place: &str, image: &str) -> Self {
        Self {
            id,
            title: title.to_owned(),
            place: place.to_owned(),
            image: image.to_owned(),
            expanded: false,
        }
    }
}
