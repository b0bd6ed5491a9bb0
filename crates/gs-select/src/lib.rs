//! gs-select: the cascading selection state machine.
//!
//! Owns the network → component → mode → attribute → view selection and
//! decides, per user event, which backend fetches are required. Pure apart
//! from a monotonically increasing epoch counter; no rendering and no I/O,
//! so every transition is unit-testable.

pub mod machine;

pub use machine::{Command, Epoch, Event, Machine, Mode, Plan, Selection, ViewKind};
