/// Most units a single cell can be given through edits
pub const MAX_CELL_UNITS: u32 = 1 << 16;

/// One grid position.
///
/// `vx`/`vy` hold the momentum of the whole cell (sum over its units), so
/// the velocity of a single unit is `vx / count`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    pub solid: bool,
    pub count: u32,
    pub vx: f32,
    pub vy: f32,

    // Staging, only meaningful between a pass and its commit
    pub d_count: i64,
    pub d_vx: f32,
    pub d_vy: f32,
}

/// Returned for every out-of-range read
pub(crate) static WALL: Cell = Cell {
    solid: true,
    count: 0,
    vx: 0.0,
    vy: 0.0,
    d_count: 0,
    d_vx: 0.0,
    d_vy: 0.0,
};

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Velocity of a single unit (zero for an empty cell)
    #[inline]
    pub fn unit_velocity(&self) -> (f32, f32) {
        if self.count == 0 {
            (0.0, 0.0)
        } else {
            let n = self.count as f32;
            (self.vx / n, self.vy / n)
        }
    }

    /// Turn the cell into a wall: no liquid, no motion
    #[inline]
    pub fn make_solid(&mut self) {
        *self = Cell {
            solid: true,
            ..Cell::default()
        };
    }

    /// Set the unit count (capped at `MAX_CELL_UNITS`), keeping per-unit velocity
    #[inline]
    pub fn set_count(&mut self, amount: u32) {
        let amount = amount.min(MAX_CELL_UNITS);
        if amount == 0 {
            self.count = 0;
            self.vx = 0.0;
            self.vy = 0.0;
            return;
        }
        let (ux, uy) = self.unit_velocity();
        self.count = amount;
        self.vx = ux * amount as f32;
        self.vy = uy * amount as f32;
    }

    #[inline]
    pub(crate) fn clear_staging(&mut self) {
        self.d_count = 0;
        self.d_vx = 0.0;
        self.d_vy = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_count_is_capped() {
        let mut cell = Cell::default();
        cell.set_count(3_000_000_000);
        assert_eq!(cell.count, MAX_CELL_UNITS);
    }

    #[test]
    fn set_count_keeps_unit_velocity() {
        let mut cell = Cell { count: 2, vx: 1.0, vy: -4.0, ..Cell::default() };
        cell.set_count(4);
        assert_eq!(cell.unit_velocity(), (0.5, -2.0));
        cell.set_count(0);
        assert_eq!((cell.vx, cell.vy), (0.0, 0.0));
    }
}
