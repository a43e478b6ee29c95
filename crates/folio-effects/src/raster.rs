//! Rasterizes drawing commands onto a grid of terminal cells.

use folio_core::Theme;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::chars::{LINK_CHAR, particle_char};
use crate::color::blend;
use crate::surface::Surface;

/// Default width of a terminal cell in virtual pixels.
pub const DEFAULT_CELL_WIDTH: f32 = 8.0;

/// Default height of a terminal cell in virtual pixels.
pub const DEFAULT_CELL_HEIGHT: f32 = 16.0;

/// What has been painted into a single cell this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Cell {
    /// Opacity of the most opaque particle in the cell.
    particle: f32,
    /// Radius of the largest particle in the cell.
    radius: f32,
    /// Summed opacity of the lines crossing the cell, capped at 1.
    link: f32,
}

/// A [`Surface`] backed by a `cols × rows` grid of terminal cells.
#[derive(Debug, Clone)]
pub struct CellSurface {
    cols: u16,
    rows: u16,
    cell_width: f32,
    cell_height: f32,
    cells: Vec<Cell>,
}

impl CellSurface {
    /// Create a surface for a terminal area, each cell covering
    /// `cell_width × cell_height` virtual pixels.
    pub fn new(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        Self {
            cols,
            rows,
            cell_width: cell_width.max(1.0),
            cell_height: cell_height.max(1.0),
            cells: vec![Cell::default(); cols as usize * rows as usize],
        }
    }

    /// Match a new terminal area, discarding everything drawn.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![Cell::default(); cols as usize * rows as usize];
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Width of the visible area in virtual pixels.
    pub fn pixel_width(&self) -> f32 {
        self.cols as f32 * self.cell_width
    }

    /// Height of the visible area in virtual pixels.
    pub fn pixel_height(&self) -> f32 {
        self.rows as f32 * self.cell_height
    }

    /// Grid index of the cell containing a virtual pixel, if visible.
    fn cell_index(&self, x: f32, y: f32) -> Option<usize> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let col = (x / self.cell_width) as usize;
        let row = (y / self.cell_height) as usize;
        if col >= self.cols as usize || row >= self.rows as usize {
            return None;
        }
        Some(row * self.cols as usize + col)
    }

    /// Particle opacity painted at a cell.
    pub fn particle_alpha(&self, col: u16, row: u16) -> f32 {
        self.cell(col, row).map_or(0.0, |c| c.particle)
    }

    /// Line opacity painted at a cell.
    pub fn link_alpha(&self, col: u16, row: u16) -> f32 {
        self.cell(col, row).map_or(0.0, |c| c.link)
    }

    fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    /// Convert the grid to styled lines using the theme's colors.
    pub fn to_lines(&self, theme: Theme) -> Vec<Line<'static>> {
        let background = theme.background();
        let foreground = theme.foreground();

        self.cells
            .chunks(self.cols.max(1) as usize)
            .take(self.rows as usize)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| {
                        if cell.particle > 0.0 {
                            let color = blend(background, foreground, cell.particle);
                            Span::styled(
                                particle_char(cell.radius).to_string(),
                                Style::new().fg(color),
                            )
                        } else if cell.link > 0.0 {
                            let color = blend(background, foreground, cell.link);
                            Span::styled(LINK_CHAR.to_string(), Style::new().fg(color))
                        } else {
                            Span::raw(" ")
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Surface for CellSurface {
    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, alpha: f32) {
        // Particles are far smaller than a cell, so only the centre cell is lit.
        let Some(idx) = self.cell_index(x, y) else {
            return;
        };
        let cell = &mut self.cells[idx];
        cell.particle = cell.particle.max(alpha);
        cell.radius = cell.radius.max(radius);
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), alpha: f32) {
        let dc = (to.0 - from.0) / self.cell_width;
        let dr = (to.1 - from.1) / self.cell_height;
        let steps = dc.abs().max(dr.abs()).ceil().max(1.0) as usize;

        let mut last = None;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            let Some(idx) = self.cell_index(x, y) else {
                continue;
            };
            if last == Some(idx) {
                continue;
            }
            last = Some(idx);
            let cell = &mut self.cells[idx];
            cell.link = (cell.link + alpha).min(1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_lands_in_containing_cell() {
        let mut surface = CellSurface::new(10, 5, 8.0, 16.0);
        surface.fill_circle(20.0, 40.0, 1.0, 0.6);
        assert_eq!(surface.particle_alpha(2, 2), 0.6);
        assert_eq!(surface.particle_alpha(0, 0), 0.0);
    }

    #[test]
    fn test_off_surface_shapes_are_clipped() {
        let mut surface = CellSurface::new(10, 5, 8.0, 16.0);
        surface.fill_circle(-0.1, 10.0, 1.0, 0.8);
        surface.fill_circle(80.0, 10.0, 1.0, 0.8);
        surface.fill_circle(10.0, 650.0, 1.0, 0.8);
        assert!(surface.cells.iter().all(|c| c.particle == 0.0));

        surface.stroke_line((-50.0, 8.0), (20.0, 8.0), 0.1);
        assert!(surface.link_alpha(0, 0) > 0.0);
        assert!(surface.link_alpha(2, 0) > 0.0);
        assert_eq!(surface.link_alpha(3, 0), 0.0);
    }

    #[test]
    fn test_line_covers_cells_once() {
        let mut surface = CellSurface::new(10, 5, 8.0, 16.0);
        surface.stroke_line((4.0, 8.0), (76.0, 8.0), 0.1);
        for col in 0..10 {
            assert!((surface.link_alpha(col, 0) - 0.1).abs() < 1e-6, "col {col}");
        }
        assert_eq!(surface.link_alpha(0, 1), 0.0);
    }

    #[test]
    fn test_line_opacity_accumulates_and_caps() {
        let mut surface = CellSurface::new(4, 1, 8.0, 16.0);
        for _ in 0..20 {
            surface.stroke_line((0.0, 0.0), (31.0, 0.0), 0.12);
        }
        assert_eq!(surface.link_alpha(1, 0), 1.0);
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut surface = CellSurface::new(4, 4, 8.0, 16.0);
        surface.fill_circle(1.0, 1.0, 1.0, 0.5);
        surface.clear();
        assert_eq!(surface.particle_alpha(0, 0), 0.0);
    }

    #[test]
    fn test_to_lines_blends_with_theme() {
        let mut surface = CellSurface::new(3, 2, 8.0, 16.0);
        surface.fill_circle(1.0, 1.0, 2.0, 1.0);
        let lines = surface.to_lines(Theme::Dark);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 3);
        assert_eq!(lines[0].spans[0].content, "●");
        assert_eq!(lines[0].spans[0].style.fg, Some(Theme::Dark.foreground()));
        assert_eq!(lines[0].spans[1].content, " ");
        assert_eq!(lines[1].spans[2].content, " ");
    }

    #[test]
    fn test_pixel_dimensions() {
        let surface = CellSurface::new(120, 40, 8.0, 16.0);
        assert_eq!(surface.pixel_width(), 960.0);
        assert_eq!(surface.pixel_height(), 640.0);
    }
}
