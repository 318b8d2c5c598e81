use std::{fmt, str::FromStr};

use crate::{pos, Error, Pos, Result};

/// Identity of a cell inside a grid, the packed form of its coordinates.
///
/// Displays and parses as `"x,y"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(u64);

impl CellId {
    pub fn pos(self) -> Pos {
        Pos::unpack(self.0)
    }
}

impl From<Pos> for CellId {
    fn from(pos: Pos) -> Self {
        Self(pos.pack())
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Pos { x, y } = self.pos();
        write!(f, "{x},{y}")
    }
}

impl FromStr for CellId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || Error::UnknownIdentity(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(unknown)?;
        let x = x.trim().parse().map_err(|_| unknown())?;
        let y = y.trim().parse().map_err(|_| unknown())?;
        Ok(pos!(x, y).into())
    }
}

/// An immutable coordinate with an alive/dead flag.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pos: Pos,
    active: bool,
}

impl Cell {
    pub fn new(x: u32, y: u32, active: bool) -> Self {
        Self {
            pos: pos!(x, y),
            active,
        }
    }

    pub fn active(x: u32, y: u32) -> Self {
        Self::new(x, y, true)
    }

    pub fn inactive(x: u32, y: u32) -> Self {
        Self::new(x, y, false)
    }

    /// builds a cell from untrusted coordinates.
    pub fn try_new(x: i64, y: i64, active: bool) -> Result<Self> {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(ux), Ok(uy)) => Ok(Self::new(ux, uy, active)),
            _ => Err(Error::InvalidCoordinate { x, y }),
        }
    }

    pub fn x(&self) -> u32 {
        self.pos.x
    }

    pub fn y(&self) -> u32 {
        self.pos.y
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn id(&self) -> CellId {
        self.pos.into()
    }

    /// Enumerates the neighbor coordinates as inactive cells.
    ///
    /// The orthogonal ones always come first. Unless `infected`, the four
    /// diagonals follow. Nothing left of `x = 0` or above `y = 0` is
    /// produced, so corners and edges yield fewer cells.
    pub fn neighbors(&self, infected: bool) -> Vec<Cell> {
        const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

        let diagonal: &[(i32, i32)] = if infected { &[] } else { &DIAGONAL };
        ORTHOGONAL
            .iter()
            .chain(diagonal)
            .filter_map(|&(dx, dy)| self.pos.offset(dx, dy))
            .map(|Pos { x, y }| Cell::inactive(x, y))
            .collect()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

pub use grid::Grid;
mod grid;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_coordinates() {
        assert!(matches!(
            Cell::try_new(-1, 0, true),
            Err(Error::InvalidCoordinate { x: -1, y: 0 })
        ));
        assert!(Cell::try_new(0, -3, false).is_err());
        assert!(Cell::try_new(i64::from(u32::MAX) + 1, 0, false).is_err());
        let cell = Cell::try_new(4, 2, true).unwrap();
        assert_eq!((cell.x(), cell.y(), cell.is_active()), (4, 2, true));
    }

    #[test]
    fn id_formats_as_coordinates() {
        assert_eq!(Cell::active(3, 14).id().to_string(), "3,14");
        assert_eq!("3,14".parse::<CellId>().unwrap(), Cell::inactive(3, 14).id());
        assert!(matches!(
            "bad".parse::<CellId>(),
            Err(Error::UnknownIdentity(_))
        ));
        assert!("1,-1".parse::<CellId>().is_err());
    }

    #[test]
    fn equality_ignores_activity() {
        assert_eq!(Cell::active(1, 1), Cell::inactive(1, 1));
        assert_ne!(Cell::active(1, 2), Cell::active(2, 1));
    }

    #[test]
    fn moore_neighbors_shrink_near_origin() {
        assert_eq!(Cell::active(1, 1).neighbors(false).len(), 8);
        assert_eq!(Cell::active(0, 0).neighbors(false).len(), 3);
        assert_eq!(Cell::active(1, 0).neighbors(false).len(), 5);
        assert_eq!(Cell::active(0, 1).neighbors(false).len(), 5);
        assert_eq!(Cell::active(10, 20).neighbors(false).len(), 8);
    }

    #[test]
    fn orthogonal_neighbors_when_infected() {
        assert_eq!(Cell::active(1, 1).neighbors(true).len(), 4);
        assert_eq!(Cell::active(0, 0).neighbors(true).len(), 2);
        assert_eq!(Cell::active(1, 0).neighbors(true).len(), 3);
        assert_eq!(Cell::active(0, 1).neighbors(true).len(), 3);

        let ids: Vec<String> = Cell::active(1, 1)
            .neighbors(true)
            .iter()
            .map(|cell| cell.id().to_string())
            .collect();
        assert_eq!(ids, ["0,1", "2,1", "1,0", "1,2"]);
    }

    #[test]
    fn neighbors_are_inactive() {
        assert!(Cell::active(2, 2)
            .neighbors(false)
            .iter()
            .all(|cell| !cell.is_active()));
    }
}
