//! Volume ratio: last volume against its recent average

use crate::common::math;
use tracing::debug;

/// Last volume divided by the mean of the last `period` volumes.
///
/// Returns 1.0 (no change) when there is no volume or the average is zero.
pub fn calculate_volume_ratio(volumes: &[f64], period: usize) -> f64 {
    let recent = math::tail(volumes, period);
    match (volumes.last(), math::mean(recent)) {
        (Some(last), Some(avg)) if avg > 0.0 => last / avg,
        _ => {
            debug!(count = volumes.len(), "Volume average unavailable, ratio defaults to 1.0");
            1.0
        }
    }
}
