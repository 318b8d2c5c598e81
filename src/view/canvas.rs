use crate::{Grid, Result};

/// Dense backing buffer an output paints from, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<u8>>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let rows = Grid::create_array(width, height)?;
        Ok(Self {
            rows,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_inside(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// records a cell, returns `false` when it falls outside the canvas.
    pub fn set(&mut self, x: i64, y: i64, active: bool) -> bool {
        if !self.is_inside(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = u8::from(active);
        true
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn clear(&mut self) {
        self.rows.iter_mut().for_each(|row| row.fill(0));
    }

    /// each row as its cells joined by a single space.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| {
            row.iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}

#[test]
fn test_bounds() {
    let canvas = Canvas::new(1, 1).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (1, 1));
    assert!(canvas.is_inside(0, 0));
    for (x, y) in [(1, 0), (0, 1), (1, 1), (-1, 0), (0, -1), (-1, -1)] {
        assert!(!canvas.is_inside(x, y));
    }
    assert!(Canvas::new(0, 1).is_err());
    assert!(Canvas::new(1, 0).is_err());
}

#[test]
fn test_set() {
    let mut canvas = Canvas::new(3, 2).unwrap();
    assert!(canvas.set(2, 1, true));
    assert!(!canvas.set(3, 1, true));
    assert!(!canvas.set(-1, 0, true));
    assert_eq!(canvas.rows(), [vec![0, 0, 0], vec![0, 0, 1]]);
    assert_eq!(canvas.lines().collect::<Vec<_>>(), ["0 0 0", "0 0 1"]);
    assert!(canvas.set(2, 1, false));
    assert_eq!(canvas.rows()[1][2], 0);
    canvas.set(0, 0, true);
    canvas.clear();
    assert_eq!(canvas, Canvas::new(3, 2).unwrap());
}
