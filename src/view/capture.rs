use crate::{Canvas, Output, Result};

/// Keeps every painted frame in memory and never waits between them.
#[derive(Debug, Clone)]
pub struct Capture {
    canvas: Canvas,
    frames: Vec<Vec<Vec<u8>>>,
}

impl Capture {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let canvas = Canvas::new(width, height)?;
        Ok(Self {
            canvas,
            frames: vec![],
        })
    }

    pub fn frames(&self) -> &[Vec<Vec<u8>>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Vec<Vec<u8>>> {
        self.frames.last()
    }
}

impl Output for Capture {
    fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn out(&mut self) -> Result<()> {
        self.frames.push(self.canvas.rows().to_vec());
        self.canvas.clear();
        Ok(())
    }

    fn run(&mut self, has_changed: bool) -> bool {
        has_changed
    }
}

#[test]
fn test_frames() {
    let mut capture = Capture::new(2, 1).unwrap();
    capture.set(1, 0, true);
    capture.out().unwrap();
    capture.out().unwrap();
    assert_eq!(capture.frames(), [vec![vec![0, 1]], vec![vec![0, 0]]]);
    assert_eq!(capture.last_frame(), Some(&vec![vec![0, 0]]));
    assert!(capture.run(true));
}
