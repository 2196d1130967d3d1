//! asmdoc - comment blocks for 8086-style assembly procedures.
//!
//! Two generators turn the push sequence in front of a `call` into comment
//! text that can be pasted straight into the source:
//!
//! ```
//! use asmdoc::{procedure_description, stack_state};
//!
//! let code = "
//!     push offset array
//!     push arraySize
//!     call SumArray
//! ";
//!
//! let diagram = stack_state(code);
//! assert!(diagram.contains("; |   bp + 4  |    bp + 6    |"));
//!
//! let header = procedure_description(Some("sums an array"), None, None, Some(code));
//! assert!(header.contains("; Input  : (By order) [1] arraySize, [2] offset array."));
//! ```
//!
//! # Architecture
//!
//! - [`stack`] - push extraction and the stack state diagram
//! - [`procedure`] - the Descrpt/Input/Output header
//! - [`core`] - text helpers and the error type
//! - [`source`] - reading source text for the command line front end
//!
//! Both generators are pure functions of their input and never fail; lines
//! they do not understand are skipped.

pub mod core;
pub mod procedure;
pub mod source;
pub mod stack;

pub use core::{DocError, DocResult};
pub use procedure::{procedure_description, ProcedureDoc};
pub use stack::{parse_pushes, stack_state, PushSequence, StackDiagram, StackSlot};
