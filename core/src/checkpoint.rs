//! Checkpoint resolution: the nearest label at or before a line.
//!
//! The interpreter can only resume a scene from a label, so every
//! snapshot records the last label the execution line has passed.

use crate::types::{LabelTable, LineNum};

/// Name of the label whose defining line is the greatest value not
/// exceeding `line`. Empty string when no label qualifies, including
/// an empty table or a line before the first label.
///
/// A linear scan with a running best pair; label lines are unique
/// within a scene, so ties cannot occur.
pub fn checkpoint_at(labels: &LabelTable, line: LineNum) -> String {
    let mut best_line: LineNum = -1;
    let mut best_label = "";
    for (name, &label_line) in labels {
        if label_line <= line && label_line > best_line {
            best_line = label_line;
            best_label = name;
        }
    }
    best_label.to_string()
}
