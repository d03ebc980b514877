//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros; without it
//! they only borrow their field values, so call sites compile the same either
//! way. Fields are written `name = value`, optionally with a `%` or `?`
//! sigil, followed by a message literal.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! log_noop {
    ($($name:ident = $(%)? $(?)? $value:expr,)* $msg:literal $(,)?) => {{
        $( let _ = &$value; )*
    }};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use log_noop as debug;
#[cfg(not(feature = "tracing"))]
pub(crate) use log_noop as warn;
