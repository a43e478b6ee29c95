//! Particle background state management.

use folio_core::Theme;
use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::animations::particles::{ParticleField, surface_size};
use crate::lifecycle::FrameToken;
use crate::raster::CellSurface;

/// Particle field mounted behind the page, drawn once per event loop pass.
#[derive(Debug)]
pub struct ParticleBackground {
    /// The simulation.
    field: ParticleField,
    /// Cell grid the field is rasterized onto.
    surface: CellSurface,
    /// Token for the next scheduled frame, `None` once torn down.
    next_frame: Option<FrameToken>,
    /// Last known terminal width.
    last_width: u16,
    /// Last known terminal height.
    last_height: u16,
}

impl ParticleBackground {
    /// Create an unmounted background with the given particle ceiling and
    /// virtual pixels per terminal cell.
    pub fn new(density: usize, cell_width: f32, cell_height: f32) -> Self {
        Self::with_field(ParticleField::new(density), cell_width, cell_height)
    }

    /// Create an unmounted background around an existing field.
    pub fn with_field(field: ParticleField, cell_width: f32, cell_height: f32) -> Self {
        Self {
            field,
            surface: CellSurface::new(0, 0, cell_width, cell_height),
            next_frame: None,
            last_width: 0,
            last_height: 0,
        }
    }

    /// Mount the field on a terminal area.
    pub fn start(&mut self, area: Rect) {
        self.surface.resize(area.width, area.height);
        self.last_width = area.width;
        self.last_height = area.height;
        let size = surface_size(self.surface.pixel_width(), self.surface.pixel_height());
        self.next_frame = Some(self.field.start(size));
    }

    /// React to the terminal being resized.
    ///
    /// The particle set is rebuilt before the next frame is drawn.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.next_frame.is_none() || (width == self.last_width && height == self.last_height) {
            return;
        }
        self.last_width = width;
        self.last_height = height;
        self.surface.resize(width, height);
        let size = surface_size(self.surface.pixel_width(), self.surface.pixel_height());
        self.field.resize(size);
    }

    /// Advance one frame and draw it over the whole frame area.
    pub fn render(&mut self, frame: &mut Frame, theme: Theme) {
        let area = frame.area();
        self.render_area(frame, area, theme);
    }

    /// Advance one frame and draw it into `area`.
    pub fn render_area(&mut self, frame: &mut Frame, area: Rect, theme: Theme) {
        let Some(token) = self.next_frame else {
            return;
        };

        // Catch size changes the host didn't signal
        self.resize(area.width, area.height);

        if area.width == 0 || area.height == 0 {
            tracing::trace!("Skipping particle frame on an empty area");
            return;
        }

        self.next_frame = self.field.frame(token, &mut self.surface);
        if self.next_frame.is_none() {
            tracing::warn!("Particle field stopped rescheduling; background left blank");
            return;
        }

        frame.render_widget(Paragraph::new(self.surface.to_lines(theme)), area);
    }

    /// Tear the background down. Further renders draw nothing.
    pub fn stop(&mut self) {
        self.next_frame = None;
        self.field.stop();
    }

    pub fn is_running(&self) -> bool {
        self.next_frame.is_some() && self.field.is_running()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn background() -> ParticleBackground {
        ParticleBackground::with_field(ParticleField::with_seed(80, 11), 8.0, 16.0)
    }

    #[test]
    fn test_start_sizes_surface_with_min_height() {
        let mut bg = background();
        bg.start(Rect::new(0, 0, 120, 30));
        let size = bg.field().size();
        assert_eq!(size.width, 960.0);
        assert_eq!(size.height, 700.0);
        assert_eq!(bg.field().particles().len(), 37);
        assert!(bg.is_running());
    }

    #[test]
    fn test_resize_rebuilds_field() {
        let mut bg = background();
        bg.start(Rect::new(0, 0, 120, 30));
        bg.resize(240, 60);
        assert_eq!(bg.field().size().width, 1920.0);
        assert_eq!(bg.field().size().height, 960.0);
        assert_eq!(bg.field().particles().len(), 80);
    }

    #[test]
    fn test_render_draws_particles() {
        let mut bg = background();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("test terminal");
        bg.start(Rect::new(0, 0, 120, 30));

        terminal
            .draw(|frame| bg.render(frame, Theme::Dark))
            .expect("draw");

        let buffer = terminal.backend().buffer();
        let lit = buffer
            .content()
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count();
        assert!(lit > 0);
    }

    #[test]
    fn test_render_after_stop_draws_nothing() {
        let mut bg = background();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("test terminal");
        bg.start(Rect::new(0, 0, 120, 30));
        bg.stop();

        terminal
            .draw(|frame| bg.render(frame, Theme::Dark))
            .expect("draw");

        let buffer = terminal.backend().buffer();
        assert!(buffer.content().iter().all(|cell| cell.symbol() == " "));
        assert!(!bg.is_running());
    }
}
