#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Pos {
    pub x: u32,
    pub y: u32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

impl Pos {
    /// packs both coordinates into a single integer, used as the grid key.
    pub fn pack(self) -> u64 {
        (u64::from(self.x) << 32) | u64::from(self.y)
    }

    pub fn unpack(key: u64) -> Self {
        pos!((key >> 32) as u32, key as u32)
    }

    /// moves by a signed offset, `None` when leaving the non-negative quadrant.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(pos!(x, y))
    }
}

#[test]
fn test_pack() {
    let p = pos!(7, 3);
    assert_eq!(Pos::unpack(p.pack()), p);
    assert_eq!(Pos::unpack(pos!(u32::MAX, 0).pack()), pos!(u32::MAX, 0));
    assert_ne!(pos!(1, 0).pack(), pos!(0, 1).pack());
}

#[test]
fn test_offset() {
    assert_eq!(pos!(0, 0).offset(-1, 0), None);
    assert_eq!(pos!(0, 0).offset(0, -1), None);
    assert_eq!(pos!(2, 2).offset(-1, 1), Some(pos!(1, 3)));
    assert_eq!(pos!(u32::MAX, 0).offset(1, 0), None);
}
