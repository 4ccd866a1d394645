// Cell indexing for the 64-cell board.
//
// Cells are numbered 0..63 in row-major order. Row 0 is rank 8 (Black's back
// rank) and row 7 is rank 1; column 0 is the a-file. So a8 = 0, h8 = 7,
// a1 = 56, h1 = 63.

pub type Square = usize;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const RANKS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

pub fn row_of(sq: Square) -> usize {
    sq / 8
}

pub fn col_of(sq: Square) -> usize {
    sq % 8
}

/// Index of (row, col), or None when the coordinates fall off the board.
pub fn square_at(row: i32, col: i32) -> Option<Square> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row * 8 + col) as Square)
    } else {
        None
    }
}

/// Step from `sq` by a (row, col) offset, None when it leaves the board.
pub fn offset(sq: Square, dr: i32, dc: i32) -> Option<Square> {
    square_at(row_of(sq) as i32 + dr, col_of(sq) as i32 + dc)
}

pub fn to_algebraic(sq: Square) -> String {
    let mut name = String::with_capacity(2);
    name.push(FILES[col_of(sq)]);
    name.push(RANKS[row_of(sq)]);
    name
}

/// Parses names like "e4". Case-insensitive on the file letter.
pub fn from_algebraic(name: &str) -> Option<Square> {
    let mut chars = name.trim().chars();
    let file = chars.next()?.to_ascii_lowercase();
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let col = FILES.iter().position(|&f| f == file)?;
    let row = RANKS.iter().position(|&r| r == rank)?;
    Some(row * 8 + col)
}
