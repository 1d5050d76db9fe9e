use serde::{Deserialize, Serialize};

/// Sourcecode location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub(crate) row: usize,
    pub(crate) column: usize,
}

impl Location {
    pub fn new(row: usize, column: usize) -> Self {
        Location { row, column }
    }

    /// Current row, 1-based.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current column, 0-based. Emitters convert to 1-based for display.
    pub fn column(&self) -> usize {
        self.column
    }
}

/// Byte offsets at which each line of `text` starts. The first line always
/// starts at offset 0.
pub fn line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

/// Row/column of a byte offset, given the line starts of the file. The
/// column counts characters, not bytes, so it doesn't drift on lines with
/// multibyte text before the reference.
pub fn locate(text: &str, offset: usize, line_starts: &[usize]) -> Location {
    let row = line_starts.partition_point(|start| *start <= offset);
    let column = text[line_starts[row - 1]..offset].chars().count();
    Location::new(row, column)
}
