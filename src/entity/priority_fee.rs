/// Priority fee estimate: the median of recent per-slot observations,
/// scaled by the caller's multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityFee {
    pub median: f64,
    pub multiplier: f64,
}

impl PriorityFee {
    /// Builds the estimate from raw observations. An empty set yields zero.
    pub fn from_observations(fees: &[u64], multiplier: f64) -> Self {
        Self {
            median: median(fees),
            multiplier,
        }
    }

    pub fn scaled(&self) -> f64 {
        self.median * self.multiplier
    }

    /// Compute unit price carried by the injected instruction.
    pub fn micro_lamports(&self) -> u64 {
        let scaled = self.scaled();
        if scaled.is_finite() && scaled > 0.0 {
            scaled.floor() as u64
        } else {
            0
        }
    }

    /// Amount sent to the quote step: base amount plus the scaled fee.
    pub fn total_amount(&self, base_amount: u64) -> u64 {
        base_amount.saturating_add(self.micro_lamports())
    }
}

/// Statistical median; the mean of the two middle values for even counts.
pub fn median(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}
