//! Stack state diagram.
//!
//! Renders the pushed arguments of a call as a two-row table, one column per
//! slot, labelled with the `bp` displacement the callee reads it from:
//!
//! ```text
//! ; --------------------------------------------------
//! ; Stack State:
//! ; | bp + 4 |   bp + 6   |   bp + 8  |   bp + 10    |
//! ; |   x    | offset sum | arraySize | offset array |
//! ; --------------------------------------------------
//! ```

use super::pushes::{parse_pushes, PushSequence};
use crate::core::text::{border, center, char_len};

/// Spaces added on each side of a column; values of 1 to 4 read well.
pub const DEFAULT_EXTRA_SPACE: usize = 1;

const ROW_PREFIX: &str = "; |";
const CAPTION: &str = "; Stack State:";

/// Stack diagram renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackDiagram {
    extra_space: usize,
}

impl Default for StackDiagram {
    fn default() -> Self {
        Self::new()
    }
}

impl StackDiagram {
    pub fn new() -> Self {
        Self {
            extra_space: DEFAULT_EXTRA_SPACE,
        }
    }

    /// Set the number of spaces added on each side of every column.
    pub fn extra_space(mut self, extra_space: usize) -> Self {
        self.extra_space = extra_space;
        self
    }

    /// Parse `code` and render its stack state.
    pub fn render(&self, code: &str) -> String {
        self.render_pushes(&parse_pushes(code))
    }

    /// Render an already extracted push sequence.
    pub fn render_pushes(&self, pushes: &PushSequence) -> String {
        let mut labels = String::from(ROW_PREFIX);
        let mut values = String::from(ROW_PREFIX);

        for slot in pushes.slots() {
            let label = slot.label();
            let width = char_len(&label).max(char_len(slot.value)) + self.extra_space * 2;

            labels.push_str(&center(&label, width));
            labels.push('|');
            values.push_str(&center(slot.value, width));
            values.push('|');
        }

        let width = char_len(&labels).max(char_len(&values));
        log::trace!("stack diagram: {} slots, {} columns", pushes.len(), width);

        let rule = border('-', width);
        [rule.clone(), CAPTION.to_string(), labels, values, rule].join("\n")
    }
}

/// Render the stack state of `code` with the default padding.
pub fn stack_state(code: &str) -> String {
    StackDiagram::new().render(code)
}
