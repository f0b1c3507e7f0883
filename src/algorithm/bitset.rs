use bitvec::bitvec;
use bitvec::vec::BitVec;
use std::fmt;

use crate::spatial::point::Point;

/// Fixed-size membership set over the slots of a grid
///
/// One bit per in-bounds coordinate, laid out row by row. Coordinates outside
/// the mask are never members and cannot be inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl CellMask {
    /// Create an empty mask for a `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Mark a coordinate as a member
    ///
    /// Returns `true` only when the coordinate is inside the mask and was not
    /// already present.
    pub fn insert(&mut self, point: Point) -> bool {
        let Some(index) = self.index(point) else {
            return false;
        };
        match self.bits.get_mut(index) {
            Some(mut bit) => {
                let newly_set = !*bit;
                *bit = true;
                newly_set
            }
            None => false,
        }
    }

    /// Test coordinate membership
    pub fn contains(&self, point: Point) -> bool {
        self.index(point)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if no coordinates are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count member coordinates
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract member coordinates in row-major order
    pub fn points(&self) -> Vec<Point> {
        self.bits
            .iter_ones()
            .filter_map(|index| {
                let x = index.checked_rem(self.width)?;
                let y = index.checked_div(self.width)?;
                Some(Point::new(x as i32, y as i32))
            })
            .collect()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

impl fmt::Display for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellMask({}x{}, {} set)",
            self.width,
            self.height,
            self.count()
        )
    }
}
