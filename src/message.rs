use core::fmt;

/// Events emitted by the view. Widgets never touch the catalog themselves,
/// they push one of these and the presenter applies it after the frame is laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    TapCard(usize),
    Back,
    Search,
    Drag { index: usize, distance: f32 },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::TapCard(index) => write!(f, "Event::TapCard({index})"),
            Event::Back => write!(f, "Event::Back"),
            Event::Search => write!(f, "Event::Search"),
            Event::Drag { index, distance } => {
                write!(f, "Event::Drag({index}, {distance:.1}px)")
            }
        }
    }
}
