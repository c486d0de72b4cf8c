//! Numerical parameters for a run
//!
//! `Parameters` holds the fixed step size and the number of steps the
//! driver takes. Physical constants live on `DynamicalState`.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub steps: usize, // number of steps
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 0.05,
            steps: 1000,
        }
    }
}

impl Parameters {
    /// Simulated time covered by the run
    pub fn t_end(&self) -> f64 {
        self.dt * self.steps as f64
    }
}
