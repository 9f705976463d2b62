//! Cart Service Config

use std::time::Duration;

use clap::Args;

use smartcart_app::domain::carts::CartsServiceConfig;

/// Cart write-loop settings.
#[derive(Debug, Args)]
pub struct CartsConfig {
    /// Attempts at the optimistic cart write cycle before answering 409
    #[arg(long, env = "CART_WRITE_ATTEMPTS", default_value_t = 5)]
    pub cart_write_attempts: u32,

    /// Base backoff between conflicting cart writes, in milliseconds
    #[arg(long, env = "CART_BACKOFF_MS", default_value_t = 20)]
    pub cart_backoff_ms: u64,

    /// Deadline for cart store and catalog calls, in milliseconds
    #[arg(long, env = "CART_DEPENDENCY_TIMEOUT_MS", default_value_t = 5_000)]
    pub cart_dependency_timeout_ms: u64,
}

impl CartsConfig {
    /// Build the cart service configuration from these settings.
    #[must_use]
    pub fn service_config(&self) -> CartsServiceConfig {
        CartsServiceConfig {
            write_attempts: self.cart_write_attempts,
            backoff_base: Duration::from_millis(self.cart_backoff_ms),
            dependency_timeout: Duration::from_millis(self.cart_dependency_timeout_ms),
        }
    }
}
