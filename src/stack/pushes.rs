//! Push extraction.
//!
//! Collects the operands of the `push` statements that prepare a procedure
//! call. Scanning stops at the first `call`; anything else is ignored.

use crate::core::text::split_lines;

/// Displacement from `bp` of the first argument inside the callee
/// (saved `bp` and the return address sit below it).
pub const FRAME_BASE: u32 = 4;

/// Size of one pushed word.
pub const SLOT_STRIDE: u32 = 2;

const PUSH: &str = "push";
const CALL: &str = "call";

/// Pushed operands ordered from the most recently pushed to the first pushed,
/// i.e. in the order they sit above `bp` inside the callee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushSequence {
    operands: Vec<String>,
}

/// A pushed operand paired with its `bp` displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackSlot<'a> {
    pub offset: u32,
    pub value: &'a str,
}

impl StackSlot<'_> {
    /// `bp + {offset}`
    pub fn label(&self) -> String {
        format!("bp + {}", self.offset)
    }
}

impl PushSequence {
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.operands.iter().map(String::as_str)
    }

    /// Slots at `bp + 4`, `bp + 6`, ... in sequence order.
    pub fn slots(&self) -> impl Iterator<Item = StackSlot<'_>> {
        self.operands.iter().zip(0u32..).map(|(value, idx)| StackSlot {
            offset: FRAME_BASE + idx * SLOT_STRIDE,
            value: value.as_str(),
        })
    }

    pub fn into_vec(self) -> Vec<String> {
        self.operands
    }
}

impl<'a> IntoIterator for &'a PushSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

/// Collect push operands from `code` up to the first `call` line.
pub fn parse_pushes(code: &str) -> PushSequence {
    let mut operands = Vec::new();

    for line in split_lines(code) {
        let line = line.trim();

        if line.is_empty() {
            continue;
        } else if line.starts_with(CALL) {
            log::trace!("stopping at `{}`", line);
            break;
        } else if line.starts_with(PUSH) {
            match line.split_once("push ") {
                Some((_, operand)) => operands.push(operand.to_string()),
                None => log::debug!("skipping push without operand: `{}`", line),
            }
        }
    }

    // Last pushed ends up closest to bp.
    operands.reverse();
    log::debug!("collected {} pushes", operands.len());

    PushSequence { operands }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUM_ARRAY: &str = "push offset array\npush arraySize\npush offset sum\npush x\ncall SumArrayPositive\n";

    #[test]
    fn test_reverse_source_order() {
        let pushes = parse_pushes(SUM_ARRAY);
        assert_eq!(
            pushes.into_vec(),
            vec!["x", "offset sum", "arraySize", "offset array"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_pushes("").is_empty());
        assert!(parse_pushes("\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_stops_at_first_call() {
        let code = "push a\ncall First\npush b\ncall Second\n";
        assert_eq!(parse_pushes(code).into_vec(), vec!["a"]);
    }

    #[test]
    fn test_without_call_consumes_everything() {
        let code = "  push a\n\tpush b  \nmov ax, bx\npush c";
        assert_eq!(parse_pushes(code).into_vec(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ignores_unrelated_lines() {
        let code = "mov bp, sp\n; push commented\nlea si, array\npush si\ncall Proc";
        assert_eq!(parse_pushes(code).into_vec(), vec!["si"]);
    }

    #[test]
    fn test_push_without_operand_is_skipped() {
        let code = "pusha\npushf\npush ax\n";
        assert_eq!(parse_pushes(code).into_vec(), vec!["ax"]);
    }

    #[test]
    fn test_operand_is_kept_verbatim() {
        let code = "push  word ptr [bx+2]\n";
        assert_eq!(parse_pushes(code).into_vec(), vec![" word ptr [bx+2]"]);
    }

    #[test]
    fn test_call_prefix_before_any_push() {
        assert!(parse_pushes("call Early\npush a\n").is_empty());
    }

    #[test]
    fn test_slots_offsets() {
        let pushes = parse_pushes(SUM_ARRAY);
        let slots: Vec<(u32, &str)> = pushes.slots().map(|s| (s.offset, s.value)).collect();
        assert_eq!(
            slots,
            vec![(4, "x"), (6, "offset sum"), (8, "arraySize"), (10, "offset array")]
        );
        assert_eq!(pushes.slots().last().map(|s| s.label()), Some("bp + 10".to_string()));
    }
}
