use std::{
    io::{self, stdout, Stdout, Write},
    thread,
    time::Duration,
};

use crate::Result;

pub use canvas::Canvas;
mod canvas;

pub use capture::Capture;
mod capture;

/// Delay between two painted generations.
pub const PACE_INTERVAL: Duration = Duration::from_secs(1);

/// The sink a simulation paints its generations to.
pub trait Output {
    fn canvas(&self) -> &Canvas;
    fn canvas_mut(&mut self) -> &mut Canvas;

    /// Paints what was recorded with [`Output::set`] since the last call.
    fn out(&mut self) -> Result<()>;

    fn is_inside_grid(&self, x: i64, y: i64) -> bool {
        self.canvas().is_inside(x, y)
    }

    /// records a cell for the next paint, `false` when out of bounds.
    fn set(&mut self, x: i64, y: i64, active: bool) -> bool {
        self.canvas_mut().set(x, y, active)
    }

    /// Pacing primitive: tells whether the next generation must be played.
    ///
    /// When the population changed, waits [`PACE_INTERVAL`] first.
    fn run(&mut self, has_changed: bool) -> bool {
        if has_changed {
            thread::sleep(PACE_INTERVAL);
        }
        has_changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// one line per generation
    #[default]
    Flat,
    /// the grid repainted in place
    #[value(name = "2d")]
    TwoD,
}

/// Paints generations as `0`/`1` text.
pub struct Terminal<W = Stdout>
where
    W: Write,
{
    canvas: Canvas,
    mode: Mode,
    writer: W,
    painted: bool,
}

impl Terminal<Stdout> {
    pub fn new(width: u32, height: u32, mode: Mode) -> Result<Self> {
        Self::with_writer(width, height, mode, stdout())
    }
}

impl<W> Terminal<W>
where
    W: Write,
{
    pub fn with_writer(width: u32, height: u32, mode: Mode, writer: W) -> Result<Self> {
        let canvas = Canvas::new(width, height)?;
        Ok(Self {
            canvas,
            mode,
            writer,
            painted: false,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn paint(&mut self) -> io::Result<()> {
        let lines: Vec<String> = self.canvas.lines().collect();
        match self.mode {
            Mode::Flat => writeln!(self.writer, "{}", lines.join(" "))?,
            Mode::TwoD => {
                if self.painted {
                    let rows = self.canvas.height().min(u16::MAX.into()) as u16;
                    let up = termion::cursor::Up(rows);
                    write!(self.writer, "{up}")?;
                }
                for line in lines {
                    writeln!(self.writer, "{line}")?;
                }
            }
        }
        self.writer.flush()
    }
}

impl<W> Output for Terminal<W>
where
    W: Write,
{
    fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn out(&mut self) -> Result<()> {
        self.paint()?;
        self.painted = true;
        self.canvas.clear();
        Ok(())
    }
}
