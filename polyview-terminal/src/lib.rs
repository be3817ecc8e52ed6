//! Terminal frontend: raw-mode event loop wiring pointer drags to the
//! rendering pipeline.

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use polyview_core::{CanvasProjection, InteractionController, Polyhedron, RenderOptions};
use std::io::{self, stdout, Write};
use tracing::debug;

pub mod canvas;

pub use canvas::CellCanvas;

/// Width-to-height compensation for terminal cells, which are roughly
/// twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Default drag sensitivity in radians per cell of pointer travel.
pub const DEFAULT_SENSITIVITY: f64 = 0.05;

/// Viewer configuration assembled by the CLI.
#[derive(Debug, Clone, Copy)]
pub struct ViewerConfig {
    /// Radians of rotation per cell of pointer travel.
    pub sensitivity: f64,
    /// Zoom multiplier on the default fit-to-window scale.
    pub zoom: f64,
    /// Draw a dot on each face corner.
    pub vertex_markers: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            zoom: 1.0,
            vertex_markers: false,
        }
    }
}

/// Interactive viewer session over one mesh.
///
/// The loop is fully event-driven: it blocks on the next terminal event
/// and redraws only when a drag actually rotated the mesh or the window
/// was resized. No timers, no background threads.
pub struct TerminalApp {
    mesh: Polyhedron,
    controller: InteractionController,
    canvas: CellCanvas,
    projection: CanvasProjection,
    options: RenderOptions,
    zoom: f64,
    status: String,
    running: bool,
}

impl TerminalApp {
    pub fn new(mesh: Polyhedron, config: ViewerConfig, title: &str) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let status = format!(
            "polyview | {} | {} vertices, {} faces | drag to rotate, q to quit",
            title,
            mesh.vertex_count(),
            mesh.face_count()
        );

        Ok(Self {
            mesh,
            controller: InteractionController::new(config.sensitivity),
            canvas: CellCanvas::new(width as usize, height as usize),
            projection: Self::projection_for(width, height, config.zoom),
            options: RenderOptions {
                vertex_markers: config.vertex_markers,
            },
            zoom: config.zoom,
            status,
            running: true,
        })
    }

    fn projection_for(width: u16, height: u16, zoom: f64) -> CanvasProjection {
        let mut projection =
            CanvasProjection::for_canvas(width as f64, height as f64, CELL_ASPECT);
        projection.scale *= zoom;
        projection
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.event_loop();

        // Cleanup
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;

        result
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.redraw()?;
        while self.running {
            let event = event::read()?;
            self.handle_event(event)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Key(KeyEvent {
                code, modifiers, ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.running = false;
                }
                _ => {}
            },
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => match kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    self.controller.pointer_down(column as f64, row as f64);
                }
                MouseEventKind::Drag(MouseButton::Left) => {
                    if self
                        .controller
                        .pointer_move(column as f64, row as f64, &mut self.mesh)
                    {
                        self.redraw()?;
                    }
                }
                MouseEventKind::Up(MouseButton::Left) => self.controller.pointer_up(),
                _ => {}
            },
            Event::Resize(width, height) => {
                debug!("terminal resized to {}x{}", width, height);
                self.canvas = CellCanvas::new(width as usize, height as usize);
                self.projection = Self::projection_for(width, height, self.zoom);
                self.redraw()?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Run the pipeline for the current positions and repaint the screen.
    fn redraw(&mut self) -> io::Result<()> {
        let frame = self
            .controller
            .render_frame(&self.mesh, &self.projection, &self.options);
        self.canvas.clear();
        self.canvas.paint(&frame);

        let mut stdout = stdout();
        queue!(stdout, Clear(ClearType::All))?;
        self.canvas.draw(&mut stdout)?;
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(&self.status),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }
}
