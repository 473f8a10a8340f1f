// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Write;

use crate::score::Score;

pub const BEGIN_MARKER: &str = "=== BEGIN Characteristic Matrix ===";
pub const END_MARKER: &str = "=== END Characteristic Matrix ===";

/// Human-readable dump of the characteristic matrix.
///
/// One line per row, entries to three decimals followed by a space,
/// framed by begin/end markers.
pub fn characteristic_matrix(score: &Score) -> String {
    let mut out = String::with_capacity(64 + score.num_cells() * 6);
    out.push('\n');
    out.push_str(BEGIN_MARKER);
    out.push_str("\n\n");
    for row in score.rows() {
        for v in row.iter() {
            // Writing into a String cannot fail.
            let _ = write!(out, "{v:.3} ");
        }
        out.push('\n');
    }
    out.push('\n');
    out.push_str(END_MARKER);
    out.push('\n');
    out
}
