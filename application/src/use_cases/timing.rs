//! Timed invocation wrapper

use std::future::Future;
use tokio::time::Instant;

/// Run `operation` and return its output paired with the elapsed wall-clock
/// time in milliseconds.
///
/// Purely observational: whatever the operation produces is returned
/// untouched. Uses the tokio clock so paused-time tests measure virtual
/// time deterministically.
pub(crate) async fn measure<T>(operation: impl Future<Output = T>) -> (T, u64) {
    let start = Instant::now();
    let value = operation.await;
    (value, start.elapsed().as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_measure_reports_elapsed_time() {
        let (value, elapsed_ms) = measure(async {
            tokio::time::sleep(Duration::from_millis(120)).await;
            "done"
        })
        .await;

        assert_eq!(value, "done");
        assert_eq!(elapsed_ms, 120);
    }

    #[tokio::test(start_paused = true)]
    async fn test_measure_preserves_result_values() {
        let (value, elapsed_ms) = measure(async { Err::<(), _>("boom") }).await;
        assert_eq!(value, Err("boom"));
        assert_eq!(elapsed_ms, 0);
    }
}
