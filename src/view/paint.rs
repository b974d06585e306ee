use egui::{Color32, Mesh, Pos2, Rect, Shape};

/// segments per quarter circle for rounded corners
const CORNER_SEGMENTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// top to bottom
    Vertical,
    /// top left to bottom right
    Diagonal,
}

pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let [r0, g0, b0, a0] = from.to_array();
    let [r1, g1, b1, a1] = to.to_array();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Color32::from_rgba_premultiplied(mix(r0, r1), mix(g0, g1), mix(b0, b1), mix(a0, a1))
}

/// Where inside `rect` the point lies along the gradient, 0 at the start.
fn gradient_t(rect: Rect, direction: Direction, p: Pos2) -> f32 {
    match direction {
        Direction::Vertical => (p.y - rect.top()) / rect.height().max(1.0),
        Direction::Diagonal => {
            let along = (p.x - rect.left()) + (p.y - rect.top());
            along / (rect.width() + rect.height()).max(1.0)
        }
    }
}

/// Outline of a rounded rectangle, clockwise starting at the top left corner.
pub fn rounded_rect_outline(rect: Rect, rounding: f32) -> Vec<Pos2> {
    let r = rounding.clamp(0.0, rect.width().min(rect.height()) / 2.0);
    if r <= 0.0 {
        return vec![
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ];
    }
    let corners = [
        (egui::pos2(rect.left() + r, rect.top() + r), 180.0_f32),
        (egui::pos2(rect.right() - r, rect.top() + r), 270.0),
        (egui::pos2(rect.right() - r, rect.bottom() - r), 0.0),
        (egui::pos2(rect.left() + r, rect.bottom() - r), 90.0),
    ];
    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    for (center, start_deg) in corners {
        for i in 0..=CORNER_SEGMENTS {
            #[allow(clippy::cast_precision_loss)]
            let angle = (start_deg + 90.0 * i as f32 / CORNER_SEGMENTS as f32).to_radians();
            points.push(center + r * egui::vec2(angle.cos(), angle.sin()));
        }
    }
    points
}

/// A filled rounded rect whose colour runs from `start` to `end`. The outline is
/// convex, so a fan around the centre is enough and the colour stays linear.
pub fn gradient_rounded_rect(
    rect: Rect,
    rounding: f32,
    direction: Direction,
    start: Color32,
    end: Color32,
) -> Shape {
    let color_at = |p: Pos2| lerp_color(start, end, gradient_t(rect, direction, p));
    let outline = rounded_rect_outline(rect, rounding);

    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.center(), color_at(rect.center()));
    for p in &outline {
        mesh.colored_vertex(*p, color_at(*p));
    }
    #[allow(clippy::cast_possible_truncation)]
    let n = outline.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    Shape::mesh(mesh)
}

pub fn gradient_circle(center: Pos2, radius: f32, start: Color32, end: Color32) -> Shape {
    let rect = Rect::from_center_size(center, egui::Vec2::splat(radius * 2.0));
    gradient_rounded_rect(rect, radius, Direction::Diagonal, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_color_hits_both_ends() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color32::from_rgb(100, 50, 25));
        // clamped
        assert_eq!(lerp_color(a, b, 3.0), b);
    }

    #[test]
    fn outline_stays_inside_rect() {
        let rect = Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 50.0));
        let outline = rounded_rect_outline(rect, 20.0);
        assert_eq!(outline.len(), 4 * (CORNER_SEGMENTS + 1));
        let grown = rect.expand(0.01);
        assert!(outline.iter().all(|p| grown.contains(*p)));
    }

    #[test]
    fn square_outline_without_rounding() {
        let rect = Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(4.0, 4.0));
        assert_eq!(rounded_rect_outline(rect, 0.0).len(), 4);
    }

    #[test]
    fn gradient_mesh_is_a_fan() {
        let rect = Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(50.0, 50.0));
        let Shape::Mesh(mesh) = gradient_circle(rect.center(), 25.0, Color32::RED, Color32::BLUE)
        else {
            panic!("expected a mesh");
        };
        let ring = 4 * (CORNER_SEGMENTS + 1);
        assert_eq!(mesh.vertices.len(), ring + 1);
        assert_eq!(mesh.indices.len(), ring * 3);
    }
}
