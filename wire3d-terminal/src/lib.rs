/// Terminal frontend for the wireframe viewer
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use log::{debug, info, warn};
use std::io::{self, stdout, Write};
use std::time::Duration;
use wire3d_core::{draw_wireframe, Controls, FrameStats, KeySet, Scene, ViewerConfig};

pub mod error;
pub mod input;
pub mod renderer;

pub use error::{Result, ViewerError};
pub use input::KeyTracker;
pub use renderer::AsciiCanvas;

/// Main application struct for the terminal viewer
pub struct TerminalApp {
    config: ViewerConfig,
    scene: Scene,
    controls: Controls,
    canvas: AsciiCanvas,
    keys: KeyTracker,
    last_stats: FrameStats,
    frame_count: u64,
}

impl TerminalApp {
    pub fn new(config: ViewerConfig) -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::with_size(config, cols, rows))
    }

    /// Build the app for a `cols` x `rows` terminal without touching the terminal
    pub fn with_size(config: ViewerConfig, cols: u16, rows: u16) -> Self {
        Self {
            scene: Scene::from_config(&config),
            controls: Controls::from_config(&config),
            canvas: AsciiCanvas::new(
                config.screen_width,
                config.screen_height,
                cols as usize,
                rows as usize,
            ),
            keys: KeyTracker::new(false),
            last_stats: FrameStats::default(),
            frame_count: 0,
            config,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn canvas(&self) -> &AsciiCanvas {
        &self.canvas
    }

    pub fn frames(&self) -> u64 {
        self.frame_count
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            debug!("terminal reports key releases");
        } else {
            warn!("terminal does not report key releases; keys act on press and auto-repeat");
        }
        self.keys = KeyTracker::new(enhanced);

        let result = self.main_loop();

        // Cleanup
        let restored = restore_terminal(enhanced);
        result?;
        restored?;
        Ok(())
    }

    fn main_loop(&mut self) -> Result<()> {
        let mut stdout = stdout();
        info!(
            "viewer running on {}x{} cells",
            self.canvas.cols(),
            self.canvas.rows()
        );

        loop {
            self.poll_events()?;
            if self.keys.quit_requested() {
                info!("quit requested");
                return Ok(());
            }

            let keys = self.keys.take_frame_keys();
            self.frame(keys);
            self.present(&mut stdout)?;

            std::thread::sleep(self.config.frame_delay);
        }
    }

    fn poll_events(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => self.keys.handle(&key),
                Event::Resize(cols, rows) => {
                    debug!("resized to {cols}x{rows}");
                    self.canvas.resize(cols as usize, rows as usize);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply one frame of held keys and redraw the canvas
    pub fn frame(&mut self, keys: KeySet) -> FrameStats {
        self.scene.step(keys, &self.controls);

        self.canvas.clear();
        self.last_stats = draw_wireframe(
            &mut self.canvas,
            &self.scene.shape,
            &self.scene.camera,
            self.config.line_color,
        );
        self.frame_count += 1;
        self.last_stats
    }

    /// One-line overlay describing the current view
    pub fn status_line(&self) -> String {
        let camera = &self.scene.camera;
        let p = camera.position;
        format!(
            "Wire3D | {} | rotate: {} | camera ({:.0}, {:.0}, {:.0}) f={:.0} | edges {}/{} | WASDQE=Move Arrows/N/M=Rotate R=Reset Esc=Quit",
            camera.mode,
            self.controls.rotation,
            p.x,
            p.y,
            p.z,
            camera.focal_distance,
            self.last_stats.drawn,
            self.last_stats.drawn + self.last_stats.skipped,
        )
    }

    fn present<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.canvas.present(writer)?;

        let status: String = self.status_line().chars().take(self.canvas.cols()).collect();
        queue!(
            writer,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        writer.flush()
    }
}

fn restore_terminal(enhanced: bool) -> io::Result<()> {
    let mut stdout = stdout();
    if enhanced {
        execute!(stdout, PopKeyboardEnhancementFlags)?;
    }
    terminal::disable_raw_mode()?;
    execute!(stdout, terminal::LeaveAlternateScreen, cursor::Show)
}
