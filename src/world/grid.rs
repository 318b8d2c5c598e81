use std::collections::HashMap;

use metrohash::MetroBuildHasher;

use crate::{Cell, CellId, Error, Result};

/// A sparse set of cells keyed by their identity.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: HashMap<CellId, Cell, MetroBuildHasher>,
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        });
    }
    Ok(())
}

/// integer prefix of a seed token, after leading whitespace.
fn leading_int(token: &str) -> Option<i64> {
    let token = token.trim_start();
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let prefix = &token[..token.len() - digits.len() + end];
    prefix.parse().ok()
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// inserts the cell, replacing whatever was stored under its identity.
    pub fn add(&mut self, cell: Cell) -> &mut Self {
        self.cells.insert(cell.id(), cell);
        self
    }

    pub fn get(&self, id: CellId) -> Result<&Cell> {
        self.cells
            .get(&id)
            .ok_or_else(|| Error::UnknownIdentity(id.to_string()))
    }

    pub fn has(&self, id: CellId) -> bool {
        self.cells.contains_key(&id)
    }

    pub fn get_all(&self) -> &HashMap<CellId, Cell, MetroBuildHasher> {
        &self.cells
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.cells().filter(|cell| cell.is_active()).count()
    }

    /// Canonical serialization, only meant for comparing two generations.
    ///
    /// A JSON array of `"x,y,1"` / `"x,y,0"` tokens sorted by the textual id,
    /// so insertion order never matters.
    pub fn as_string(&self) -> String {
        let mut entries: Vec<(String, bool)> = self
            .cells
            .iter()
            .map(|(id, cell)| (id.to_string(), cell.is_active()))
            .collect();
        entries.sort_unstable();
        let tokens: Vec<String> = entries
            .into_iter()
            .map(|(id, active)| format!("{id},{}", u8::from(active)))
            .collect();
        serde_json::Value::from(tokens).to_string()
    }

    pub fn count_active_neighbors(&self, cell: &Cell, infected: bool) -> usize {
        cell.neighbors(infected)
            .iter()
            .filter(|neighbor| {
                self.cells
                    .get(&neighbor.id())
                    .map_or(false, |stored| stored.is_active())
            })
            .count()
    }

    /// Builds a grid with one active cell per `[x, y]` pair.
    pub fn from_array<I, P>(coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[i64]>,
    {
        let mut grid = Self::new();
        for pair in coords {
            match *pair.as_ref() {
                [x, y] => grid.add(Cell::try_new(x, y, true)?),
                ref other => {
                    return Err(Error::InvalidInput(format!(
                        "expected an [x, y] pair, got {other:?}"
                    )))
                }
            };
        }
        Ok(grid)
    }

    /// Parses a row-major stream of `0`/`1` tokens separated by single spaces.
    ///
    /// A token seeds an active cell when it starts with a non-zero integer.
    /// Empty or non-numeric tokens are dead cells that still take up their
    /// index. Tokens past the last row (`index >= width * height`) are
    /// ignored.
    pub fn from_string(encoding: &str, width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        let (width, height) = (u64::from(width), u64::from(height));

        let mut coords = vec![];
        for (index, token) in encoding.split(' ').enumerate() {
            if leading_int(token).unwrap_or(0) == 0 {
                continue;
            }
            let index = index as u64;
            let (x, y) = (index % width, index / width);
            if y >= height {
                continue;
            }
            coords.push([x as i64, y as i64]);
        }
        Self::from_array(coords)
    }

    /// A zero-filled dense buffer of `height` rows by `width` columns.
    pub fn create_array(width: u32, height: u32) -> Result<Vec<Vec<u8>>> {
        check_dimensions(width, height)?;
        Ok(vec![vec![0; width as usize]; height as usize])
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.cells.iter().all(|(id, cell)| {
                other
                    .cells
                    .get(id)
                    .map_or(false, |theirs| theirs.is_active() == cell.is_active())
            })
    }
}

impl Eq for Grid {}
