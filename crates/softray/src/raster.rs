//! Wireframe rasterizer over [`Canvas`]: lines, triangles, and indexed
//! triangle lists

use thiserror::Error;

use crate::canvas::{Canvas, Color};

/// Integer device-space vertex, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
    #[error("index buffer length {0} is not a multiple of 3")]
    PartialTriangle(usize),
}

pub struct WireframeRender<'a> {
    canvas: &'a mut Canvas,
}

impl<'a> WireframeRender<'a> {
    pub fn new(canvas: &'a mut Canvas) -> WireframeRender<'a> {
        WireframeRender { canvas }
    }

    pub fn clear(&mut self, color: Color) {
        for y in 0..self.canvas.height() {
            for x in 0..self.canvas.width() {
                self.canvas.set_pixel(x, y, color);
            }
        }
    }

    /// Bresenham over all octants. Pixels falling outside the canvas are
    /// dropped, matching the tracer's device-write behavior.
    pub fn draw_line(&mut self, from: Position, to: Position, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let step_x = if from.x < to.x { 1 } else { -1 };
        let step_y = if from.y < to.y { 1 } else { -1 };

        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.put(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    pub fn draw_triangle(&mut self, v0: Position, v1: Position, v2: Position, color: Color) {
        self.draw_line(v0, v1, color);
        self.draw_line(v1, v2, color);
        self.draw_line(v2, v0, color);
    }

    /// Draws every consecutive index triple as a triangle edge loop.
    pub fn draw_triangles(
        &mut self,
        vertices: &[Position],
        indices: &[u32],
        color: Color,
    ) -> Result<(), RasterError> {
        if indices.len() % 3 != 0 {
            return Err(RasterError::PartialTriangle(indices.len()));
        }

        for tri in indices.chunks_exact(3) {
            let [v0, v1, v2] = [
                self.vertex(vertices, tri[0])?,
                self.vertex(vertices, tri[1])?,
                self.vertex(vertices, tri[2])?,
            ];
            self.draw_triangle(v0, v1, v2, color);
        }
        Ok(())
    }

    fn vertex(&self, vertices: &[Position], index: u32) -> Result<Position, RasterError> {
        vertices
            .get(index as usize)
            .copied()
            .ok_or(RasterError::IndexOutOfRange {
                index,
                vertices: vertices.len(),
            })
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || x >= self.canvas.width() as i32 || y < 0 || y >= self.canvas.height() as i32 {
            return;
        }
        self.canvas.set_pixel(x as usize, y as usize, color);
    }
}

/// Vertex and index buffers for a `cells_x` by `cells_y` grid of quads, each
/// split into two triangles. The demo content the indexed renderer ships with.
pub fn grid_mesh(
    width: usize,
    height: usize,
    cells_x: usize,
    cells_y: usize,
) -> (Vec<Position>, Vec<u32>) {
    let step_x = (width as i32 - 1) / cells_x as i32;
    let step_y = (height as i32 - 1) / cells_y as i32;
    let stride = (cells_x + 1) as u32;

    let mut vertices = Vec::with_capacity((cells_x + 1) * (cells_y + 1));
    for row in 0..=cells_y {
        for col in 0..=cells_x {
            vertices.push(Position {
                x: col as i32 * step_x,
                y: row as i32 * step_y,
            });
        }
    }

    let mut indices = Vec::with_capacity(cells_x * cells_y * 6);
    for row in 0..cells_y as u32 {
        for col in 0..cells_x as u32 {
            let top_left = row * stride + col;
            let top_right = top_left + 1;
            let bottom_left = top_left + stride;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[top_left, bottom_right, bottom_left]);
            indices.extend_from_slice(&[top_left, top_right, bottom_right]);
        }
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    #[test]
    fn line_covers_both_endpoints() {
        let mut canvas = Canvas::new(16, 16);
        let mut render = WireframeRender::new(&mut canvas);
        render.draw_line(Position { x: 2, y: 3 }, Position { x: 12, y: 9 }, GREEN);

        assert_eq!(canvas.get_pixel(2, 3), GREEN);
        assert_eq!(canvas.get_pixel(12, 9), GREEN);
    }

    #[test]
    fn steep_line_is_connected() {
        let mut canvas = Canvas::new(16, 16);
        let mut render = WireframeRender::new(&mut canvas);
        render.draw_line(Position { x: 3, y: 0 }, Position { x: 5, y: 15 }, GREEN);

        // every row between the endpoints got exactly one run of pixels
        for y in 0..16 {
            let lit = (0..16).filter(|&x| canvas.get_pixel(x, y) == GREEN).count();
            assert!(lit >= 1, "row {y} has no pixels");
        }
    }

    #[test]
    fn out_of_canvas_pixels_are_dropped() {
        let mut canvas = Canvas::new(8, 8);
        let mut render = WireframeRender::new(&mut canvas);
        render.draw_line(Position { x: -4, y: 4 }, Position { x: 11, y: 4 }, GREEN);

        assert_eq!(canvas.get_pixel(0, 4), GREEN);
        assert_eq!(canvas.get_pixel(7, 4), GREEN);
    }

    #[test]
    fn indexed_draw_rejects_bad_indices() {
        let mut canvas = Canvas::new(8, 8);
        let mut render = WireframeRender::new(&mut canvas);
        let vertices = [
            Position { x: 0, y: 0 },
            Position { x: 7, y: 0 },
            Position { x: 0, y: 7 },
        ];

        let result = render.draw_triangles(&vertices, &[0, 1, 9], GREEN);
        assert!(matches!(
            result,
            Err(RasterError::IndexOutOfRange { index: 9, vertices: 3 })
        ));

        let result = render.draw_triangles(&vertices, &[0, 1], GREEN);
        assert!(matches!(result, Err(RasterError::PartialTriangle(2))));
    }

    // the indexed-grid demo's original self-check: draw, save, reload, compare
    #[test]
    fn grid_demo_survives_ppm_round_trip() {
        let (width, height) = (320, 240);
        let mut canvas = Canvas::new(width, height);

        let (vertices, indices) = grid_mesh(width, height, 10, 10);
        let mut render = WireframeRender::new(&mut canvas);
        render.clear(BLACK);
        render.draw_triangles(&vertices, &indices, GREEN).unwrap();

        let path = std::env::temp_dir().join("softray_grid_demo.ppm");
        canvas.save_ppm(&path).unwrap();
        let reloaded = Canvas::load_ppm(&path).unwrap();

        assert_eq!(canvas, reloaded);
    }
}
