//! Shared primitive types used across the machine.

/// Row index into the visible window. Row 0 is the top row.
pub type Row = usize;

/// Column index. One column per reel, left to right.
pub type Col = usize;

/// A single (row, column) cell on the visible grid.
pub type Cell = (Row, Col);

/// Number of spins settled in a session. The journal is stamped with it.
pub type SpinCount = u64;
