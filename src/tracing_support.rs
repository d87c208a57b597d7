//! Logging support.
//!
//! With the `tracing` feature enabled, algorithm entry points open
//! `info_span!`s and per-vertex progress is reported with `debug!` events.
//! Without it, the same macros expand to no-ops.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;

    /// Installs a global `fmt` subscriber writing to the test-aware writer.
    /// Safe to call more than once; only the first call has an effect, and a
    /// subscriber installed by someone else is left in place.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_span_events(FmtSpan::CLOSE)
                .with_test_writer()
                .try_init();
        });
    }

    pub use tracing::{debug, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
