//! Domain Policies
//!
//! Rules that decide *when* something happens, free of I/O.

mod debounce;

pub use debounce::{Armed, DebouncePolicy, Debouncer, Settle};
