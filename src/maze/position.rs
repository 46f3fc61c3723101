#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn clockwise(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn move_in_direction(self, direction: Direction, bounds: (usize, usize)) -> Option<Self> {
        let (height, width) = bounds;
        match direction {
            Direction::Up if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            Direction::Down if self.row < height - 1 => Some(Self::new(self.row + 1, self.col)),
            Direction::Left if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            Direction::Right if self.col < width - 1 => Some(Self::new(self.row, self.col + 1)),
            _ => None,
        }
    }

    /// In-bounds neighbors, always enumerated up, down, left, right.
    pub fn neighbors(self, bounds: (usize, usize)) -> Vec<(Self, Direction)> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.move_in_direction(dir, bounds).map(|pos| (pos, dir)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(1, 5);
        let b = Position::new(4, 2);
        assert_eq!(a.manhattan_distance(b), 6);
        assert_eq!(b.manhattan_distance(a), 6);
    }

    #[test]
    fn turns_cycle_through_all_directions() {
        assert_eq!(Direction::Up.clockwise(), Direction::Right);
        assert_eq!(Direction::Up.counter_clockwise(), Direction::Left);
        assert_eq!(Direction::Left.reverse(), Direction::Right);

        let mut dir = Direction::Down;
        for _ in 0..4 {
            dir = dir.clockwise();
        }
        assert_eq!(dir, Direction::Down);
    }

    #[test]
    fn moves_are_bounds_checked() {
        let bounds = (3, 3);
        let corner = Position::new(0, 0);
        assert_eq!(corner.move_in_direction(Direction::Up, bounds), None);
        assert_eq!(corner.move_in_direction(Direction::Left, bounds), None);
        assert_eq!(
            corner.move_in_direction(Direction::Down, bounds),
            Some(Position::new(1, 0))
        );

        let far = Position::new(2, 2);
        assert_eq!(far.move_in_direction(Direction::Down, bounds), None);
        assert_eq!(far.move_in_direction(Direction::Right, bounds), None);
    }

    #[test]
    fn neighbor_enumeration_order_is_stable() {
        let center = Position::new(1, 1);
        let dirs: Vec<Direction> = center
            .neighbors((3, 3))
            .into_iter()
            .map(|(_, dir)| dir)
            .collect();
        assert_eq!(
            dirs,
            vec![
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }
}
