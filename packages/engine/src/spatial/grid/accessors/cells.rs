use super::super::*;

impl Grid {
    /// Mutable cell for in-bounds coords.
    /// The row is marked wet up front; the next commit drops stale marks.
    #[inline]
    pub fn at(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let idx = self.checked_index(x, y)?;
        self.row_has_liquid[y as usize] = true;
        self.cells.get_mut(idx)
    }

    /// Cell at coords, or the shared solid wall when out of range
    #[inline]
    pub fn at_or_wall(&self, x: i32, y: i32) -> &Cell {
        match self.checked_index(x, y) {
            Some(idx) => &self.cells[idx],
            None => &WALL,
        }
    }

    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.at_or_wall(x, y).solid
    }

    /// Writes outside the grid are dropped
    pub fn set_solid(&mut self, x: i32, y: i32, solid: bool) {
        if let Some(cell) = self.at(x, y) {
            if solid {
                cell.make_solid();
            } else {
                cell.solid = false;
            }
        }
    }
}
