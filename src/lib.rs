pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod state;

pub use state::CoreState;

/// Initialize tracing for the hosting process. `RUST_LOG` wins when set.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yasumeshi=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
