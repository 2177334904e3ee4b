//! Path generation for Monte Carlo simulation.
//!
//! This module implements Geometric Brownian Motion (GBM) path generation
//! with the exact log-space step:
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! # Memory Layout
//!
//! Paths are stored path-major: `data[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` contains the initial spot price and
//! `step_idx = n_steps` sits exactly at maturity.
//!
//! # Random Streams
//!
//! Path `i` draws its normals from `PricerRng::for_stream(base_seed, i)`,
//! so the sequential and the rayon-parallel generators fill identical
//! matrices for the same seed.

use pricer_core::types::OptionContract;
use rayon::prelude::*;

use crate::rng::PricerRng;

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// ```text
/// dS = r S dt + σ S dW
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionContract;
/// use pricer_pricing::mc::GbmParams;
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let params = GbmParams::from_contract(&contract);
/// assert_eq!(params.spot, 100.0);
/// assert_eq!(params.maturity, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Risk-neutral GBM parameters of a contract.
    #[inline]
    pub fn from_contract(contract: &OptionContract) -> Self {
        Self {
            spot: contract.spot(),
            rate: contract.rate(),
            volatility: contract.volatility(),
            maturity: contract.maturity(),
        }
    }

    /// Per-step drift and diffusion `((r - σ²/2)·dt, σ·√dt)`.
    #[inline]
    pub fn step_coefficients(&self, n_steps: usize) -> (f64, f64) {
        let dt = self.maturity / n_steps as f64;
        let drift_dt = (self.rate - 0.5 * self.volatility * self.volatility) * dt;
        (drift_dt, self.volatility * dt.sqrt())
    }
}

/// Simulated price paths, path-major, `n_steps + 1` entries per path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
    seed: u64,
}

impl PathMatrix {
    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Entries per path (`n_steps + 1`).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_steps + 1
    }

    /// Base seed the paths were generated from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Raw path-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Prices along path `index`, from spot to maturity.
    pub fn path(&self, index: usize) -> Option<&[f64]> {
        if index >= self.n_paths {
            return None;
        }
        let start = index * self.n_rows();
        Some(&self.data[start..start + self.n_rows()])
    }

    /// Prices of every path at time step `step` (0 = spot).
    pub fn step(&self, step: usize) -> Option<Vec<f64>> {
        if step > self.n_steps {
            return None;
        }
        Some(
            self.data
                .iter()
                .skip(step)
                .step_by(self.n_rows())
                .copied()
                .collect(),
        )
    }

    /// Prices at maturity, one per path.
    pub fn terminal(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.chunks_exact(self.n_rows()).map(|path| path[self.n_steps])
    }

    /// The first `count` paths (fewer if the matrix holds fewer).
    pub fn sample_paths(&self, count: usize) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_rows()).take(count)
    }
}

fn fill_path(
    path: &mut [f64],
    index: usize,
    base_seed: u64,
    params: &GbmParams,
    coeffs: (f64, f64),
) {
    let (drift_dt, vol_sqrt_dt) = coeffs;
    let mut rng = PricerRng::for_stream(base_seed, index as u64);
    path[0] = params.spot;
    for t in 1..path.len() {
        let z = rng.gen_normal();
        path[t] = path[t - 1] * (drift_dt + vol_sqrt_dt * z).exp();
    }
}

/// Generates GBM paths with daily log-space steps.
///
/// # Arguments
///
/// * `params` - GBM parameters
/// * `n_paths` - Number of paths to generate (at least 1)
/// * `n_steps` - Number of time steps (at least 1)
/// * `base_seed` - Seed from which each path's stream is derived
/// * `parallel` - Generate on the rayon thread pool
///
/// Callers validate `n_paths` and `n_steps`; see
/// [`MonteCarloConfig::validate_steps`](super::MonteCarloConfig::validate_steps).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{generate_gbm_paths, GbmParams};
///
/// let params = GbmParams { spot: 100.0, rate: 0.05, volatility: 0.2, maturity: 1.0 };
/// let sequential = generate_gbm_paths(params, 64, 12, 42, false);
/// let parallel = generate_gbm_paths(params, 64, 12, 42, true);
///
/// assert_eq!(sequential, parallel);
/// assert_eq!(sequential.path(0).unwrap()[0], 100.0);
/// assert_eq!(sequential.path(0).unwrap().len(), 13);
/// ```
pub fn generate_gbm_paths(
    params: GbmParams,
    n_paths: usize,
    n_steps: usize,
    base_seed: u64,
    parallel: bool,
) -> PathMatrix {
    let n_rows = n_steps + 1;
    let coeffs = params.step_coefficients(n_steps);
    let mut data = vec![0.0; n_paths * n_rows];

    if parallel {
        data.par_chunks_mut(n_rows)
            .enumerate()
            .for_each(|(i, path)| fill_path(path, i, base_seed, &params, coeffs));
    } else {
        data.chunks_mut(n_rows)
            .enumerate()
            .for_each(|(i, path)| fill_path(path, i, base_seed, &params, coeffs));
    }

    PathMatrix {
        data,
        n_paths,
        n_steps,
        seed: base_seed,
    }
}
