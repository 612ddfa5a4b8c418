/// The state of the optimization at the start of a single step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    /// The index of the step, starting at zero.
    pub step: usize,
    /// The point the step started from.
    pub point: Vec<f64>,
    /// The objective's value at `point`.
    pub value: f64,
    /// The gradient freshly computed at `point`.
    pub gradient: Vec<f64>,
    /// The gradient actually applied, possibly a stale one.
    pub applied: Vec<f64>,
}

/// An append-only, step-indexed log of the optimization.
///
/// Record `k` holds step `k`; once training terminates a last record holds the final point.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<StepRecord>,
}

impl History {
    /// Creates a new empty `History`.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn get(&self, step: usize) -> Option<&StepRecord> {
        self.records.get(step)
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    /// The objective values, one per record.
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }

    /// The visited values of variable `dim`, one per record.
    pub fn coordinates(&self, dim: usize) -> Vec<f64> {
        self.records.iter().map(|r| r.point[dim]).collect()
    }

    /// The applied gradients of variable `dim`, one per record.
    pub fn applied_gradients(&self, dim: usize) -> Vec<f64> {
        self.records.iter().map(|r| r.applied[dim]).collect()
    }

    /// Turns the records into a plottable `Trajectory`.
    ///
    /// # Arguments
    /// * `dims` - The amount of variables.
    ///
    /// # Returns
    /// The path, one column per record, and the length aligned applied gradients.
    pub fn trajectory(&self, dims: usize) -> Trajectory {
        let points = (0..dims).map(|d| self.coordinates(d)).collect();

        let n = self.records.len();
        let gradients = (0..dims)
            .map(|d| {
                if n == 0 {
                    return Vec::new();
                }

                let mut grads = Vec::with_capacity(n);
                grads.push(0.);
                grads.extend(self.records[..n - 1].iter().map(|r| r.applied[d]));
                grads
            })
            .collect();

        Trajectory { points, gradients }
    }
}

/// The path followed by the optimizer, ready to be plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// `points[d][k]` is the value of variable `d` at the `k`-th record.
    pub points: Vec<Vec<f64>>,
    /// `gradients[d]` has the same length as `points[d]`: a leading zero and then the applied
    /// gradients of every record but the last.
    pub gradients: Vec<Vec<f64>>,
}

impl Trajectory {
    /// The amount of points in the path.
    pub fn len(&self) -> usize {
        self.points.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The point at column `k`.
    pub fn point(&self, k: usize) -> Option<Vec<f64>> {
        self.points.iter().map(|row| row.get(k).copied()).collect()
    }
}
