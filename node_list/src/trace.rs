//! Internal logging hook. Expands to `tracing` events when the `tracing`
//! feature is enabled and to nothing otherwise.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    (trace, $($arg:tt)+) => { ::tracing::trace!($($arg)+) };
    (debug, $($arg:tt)+) => { ::tracing::debug!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{}};
}
