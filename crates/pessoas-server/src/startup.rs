//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ____
   / __ \___  ______________  ____ ______
  / /_/ / _ \/ ___/ ___/ __ \/ __ `/ ___/
 / ____/  __(__  |__  ) /_/ / /_/ (__  )
/_/    \___/____/____/\____/\__,_/____/

    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/pessoas", addr);
    info!("Health:    http://{}/health", addr);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info("0.0.0.0:8080");
    }
}
