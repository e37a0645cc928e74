use super::super::*;

impl Grid {
    #[inline]
    pub fn get_liquid(&self, x: i32, y: i32) -> u32 {
        self.at_or_wall(x, y).count
    }

    /// Solid cells and out-of-range coords refuse liquid.
    /// Amounts above `MAX_CELL_UNITS` are capped.
    pub fn set_liquid(&mut self, x: i32, y: i32, amount: u32) {
        let Some(cell) = self.at(x, y) else {
            return;
        };
        if cell.solid {
            return;
        }
        cell.set_count(amount);
    }

    pub fn add_liquid(&mut self, x: i32, y: i32, amount: u32) {
        let current = self.get_liquid(x, y);
        self.set_liquid(x, y, current.saturating_add(amount));
    }

    /// Would `count` units at (x, y) rest on what lies below?
    /// Terrain, the grid edge, or liquid at least as deep all hold them up.
    #[inline]
    pub fn is_supported(&self, x: i32, y: i32, count: u32) -> bool {
        let below = self.at_or_wall(x, y.saturating_add(1));
        below.solid || below.count >= count
    }

    /// Per-unit velocity at coords (zero for walls and empty cells)
    #[inline]
    pub fn velocity(&self, x: i32, y: i32) -> (f32, f32) {
        self.at_or_wall(x, y).unit_velocity()
    }

    pub fn total_liquid(&self) -> u64 {
        self.cells.iter().map(|c| c.count as u64).sum()
    }

    pub fn liquid_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.count > 0).count()
    }
}
