//! Reduction ladder - Pairwise modular collapse of a digit sequence
//!
//! ```text
//!   1 4 2 5 3
//!    5 6 7 8
//!     1 3 5
//!      4 8
//! ```
//!
//! Each row holds `(row[i] + row[i + 1]) mod 10` of the row above. Reduction
//! stops at the first row of length two or less.

use serde::{Deserialize, Serialize};

use crate::types::constants::LADDER_FLOOR;

/// Collapse one row into the next
pub fn next_row(row: &[u8]) -> Vec<u8> {
    row.windows(2)
        .map(|pair| ((u16::from(pair[0]) + u16::from(pair[1])) % 10) as u8)
        .collect()
}

/// Every row of a reduction, top row first
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReductionLadder {
    rows: Vec<Vec<u8>>,
}

impl ReductionLadder {
    /// Reduce a sequence until two or fewer digits remain
    ///
    /// A sequence shorter than two yields an empty ladder. Values are taken
    /// modulo 10 before the first row is stored.
    pub fn reduce(sequence: &[u8]) -> Self {
        if sequence.len() < LADDER_FLOOR {
            return Self::default();
        }

        let mut row: Vec<u8> = sequence.iter().map(|d| d % 10).collect();
        let mut rows = Vec::with_capacity(row.len() - 1);
        while row.len() > LADDER_FLOOR {
            let next = next_row(&row);
            rows.push(row);
            row = next;
        }
        rows.push(row);

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Final row, if any reduction took place
    pub fn last_row(&self) -> Option<&[u8]> {
        self.rows.last().map(Vec::as_slice)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
