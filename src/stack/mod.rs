//! Stack layout of a procedure call: push extraction and the stack state diagram.

pub mod diagram;
pub mod pushes;

pub use diagram::{stack_state, StackDiagram, DEFAULT_EXTRA_SPACE};
pub use pushes::{parse_pushes, PushSequence, StackSlot, FRAME_BASE, SLOT_STRIDE};
