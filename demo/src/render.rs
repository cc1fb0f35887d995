//! Drawing of a round: checkerboard cells, the highlighted path node and the
//! weighted edges.

use gridpath_core::{Canvas, Color, Point};
use gridpath_paths::Graph;

pub const BACKGROUND: Color = Color::PURPLE;
pub const LIGHT_CELL: Color = Color::from_rgb(200, 200, 200);
pub const DARK_CELL: Color = Color::from_rgb(100, 100, 100);
pub const HIGHLIGHT: Color = Color::RED;
pub const EDGE_THICKNESS: i32 = 2;

/// Checkerboard colour of a cell.
pub fn cell_color(p: Point) -> Color {
    if (p.x + p.y).rem_euclid(2) == 0 {
        LIGHT_CELL
    } else {
        DARK_CELL
    }
}

/// Edge colour, brighter for shorter edges.
pub fn edge_color(length: i32) -> Color {
    let v = (255 / length.max(1)) as u8;
    Color::from_rgb(0, v, v)
}

/// Pixel at the centre of cell `p`.
#[inline]
pub fn cell_center(p: Point, cell_size: i32) -> Point {
    Point::new(
        p.x * cell_size + cell_size / 2,
        p.y * cell_size + cell_size / 2,
    )
}

/// Draw every node of `graph` as a cell, `highlight` in red, then every edge
/// as a line between cell centres.
pub fn draw_round(canvas: &mut Canvas, graph: &Graph, highlight: Option<Point>, cell_size: i32) {
    canvas.fill(BACKGROUND);

    for &p in graph.nodes() {
        let color = if Some(p) == highlight {
            HIGHLIGHT
        } else {
            cell_color(p)
        };
        canvas.fill_rect(p.x * cell_size, p.y * cell_size, cell_size, cell_size, color);
    }

    for e in graph.edges() {
        canvas.draw_line(
            cell_center(e.a, cell_size),
            cell_center(e.b, cell_size),
            edge_color(e.length),
            EDGE_THICKNESS,
        );
    }
}
