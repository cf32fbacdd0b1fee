//! Batched 1-D transform plans over the lattice.
//!
//! A plan describes a family of 1-D lines through the x-fastest lattice
//! array: line `b` of repeat `r` starts at `r * slab + b * dist` and takes
//! `n` elements spaced by `stride`. Twiddle factors are computed once per
//! plan and reused by every [`TransformPlan::execute`] call.

use std::f64::consts::PI;
use std::fmt;

use quench_core::{Axis, Complex64, Extents, PlanHandle, StoreError};
use quench_grid::Grid;
use smallvec::SmallVec;
use tracing::debug;

use crate::status::TransformResult;

/// Transform direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformDirection {
    /// Position to momentum space, `exp(-2πi km/n)`.
    Forward,
    /// Momentum to position space, normalised by `1/n`.
    Inverse,
}

/// Batched line layout of a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineLayout {
    /// Elements per line.
    pub n: usize,
    /// Distance between consecutive elements of a line.
    pub stride: usize,
    /// Distance between the starts of consecutive lines.
    pub dist: usize,
    /// Lines per repeat.
    pub batch: usize,
    /// Number of repeats.
    pub repeats: usize,
    /// Distance between the starts of consecutive repeats.
    pub slab: usize,
}

impl LineLayout {
    /// Start offsets of every line.
    pub fn line_starts(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.repeats)
            .flat_map(move |r| (0..self.batch).map(move |b| r * self.slab + b * self.dist))
    }

    /// Number of lines across all repeats.
    pub fn line_count(&self) -> usize {
        self.batch * self.repeats
    }
}

/// A transform plan: opaque handle plus the layout it executes.
#[derive(Clone, Debug)]
pub struct TransformPlan {
    handle: PlanHandle,
    axis: Axis,
    extents: Extents,
    layout: LineLayout,
    twiddles: Vec<Complex64>,
}

impl TransformPlan {
    fn new(axis: Axis, extents: Extents, layout: LineLayout) -> Self {
        let n = layout.n.max(1);
        let twiddles = (0..n)
            .map(|t| Complex64::from_polar(1.0, -2.0 * PI * t as f64 / n as f64))
            .collect();
        let plan = Self {
            handle: PlanHandle::next(),
            axis,
            extents,
            layout,
            twiddles,
        };
        debug!(
            handle = %plan.handle,
            axis = %axis,
            n = layout.n,
            batch = layout.batch,
            repeats = layout.repeats,
            "transform plan created"
        );
        plan
    }

    /// Plan in one axis of `extents`.
    pub fn along(extents: Extents, axis: Axis) -> Self {
        let Extents { x, y, z } = extents;
        let layout = match axis {
            Axis::X => LineLayout {
                n: x,
                stride: 1,
                dist: x,
                batch: y * z,
                repeats: 1,
                slab: 0,
            },
            Axis::Y => LineLayout {
                n: y,
                stride: x,
                dist: 1,
                batch: x,
                repeats: z,
                slab: x * y,
            },
            Axis::Z => LineLayout {
                n: z,
                stride: x * y,
                dist: 1,
                batch: x * y,
                repeats: 1,
                slab: 0,
            },
        };
        Self::new(axis, extents, layout)
    }

    /// The plan's handle.
    pub fn handle(&self) -> PlanHandle {
        self.handle
    }

    /// Axis the lines run along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Lattice the plan was built for.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Line layout.
    pub fn layout(&self) -> LineLayout {
        self.layout
    }

    /// Transform every line of `data` in place.
    ///
    /// `data` must cover the whole lattice; otherwise nothing is touched
    /// and [`TransformResult::InvalidSize`] is returned.
    pub fn execute(&self, data: &mut [Complex64], direction: TransformDirection) -> TransformResult {
        if data.len() != self.extents.len() {
            return TransformResult::InvalidSize;
        }
        let LineLayout { n, stride, .. } = self.layout;
        if n <= 1 {
            return TransformResult::Success;
        }
        let scale = match direction {
            TransformDirection::Forward => 1.0,
            TransformDirection::Inverse => 1.0 / n as f64,
        };
        let mut line = vec![Complex64::new(0.0, 0.0); n];
        for start in self.layout.line_starts() {
            for (m, slot) in line.iter_mut().enumerate() {
                *slot = data[start + m * stride];
            }
            for k in 0..n {
                let mut acc = Complex64::new(0.0, 0.0);
                for (m, v) in line.iter().enumerate() {
                    let w = self.twiddles[(k * m) % n];
                    let w = match direction {
                        TransformDirection::Forward => w,
                        TransformDirection::Inverse => w.conj(),
                    };
                    acc += v * w;
                }
                data[start + k * stride] = acc * scale;
            }
        }
        TransformResult::Success
    }
}

impl fmt::Display for TransformPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} along {} (n={}, batch={})",
            self.handle,
            self.axis,
            self.layout.n,
            self.layout.line_count()
        )
    }
}

/// Plan along y for a 2-D grid: `yDim` points at stride `xDim`, one line
/// per x index.
pub fn generate_plan_other2d(grid: &Grid) -> Result<TransformPlan, StoreError> {
    let x = dim(grid, "xDim")?;
    let y = dim(grid, "yDim")?;
    Ok(TransformPlan::along(Extents::new_2d(x, y), Axis::Y))
}

/// Plan along `axis` for a 3-D grid.
pub fn generate_plan_other3d(grid: &Grid, axis: Axis) -> Result<TransformPlan, StoreError> {
    let x = dim(grid, "xDim")?;
    let y = dim(grid, "yDim")?;
    let z = dim(grid, "zDim")?;
    Ok(TransformPlan::along(Extents::new_3d(x, y, z), axis))
}

fn dim(grid: &Grid, key: &str) -> Result<usize, StoreError> {
    let v = grid.ival(key)?;
    match usize::try_from(v) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(StoreError::InvalidValue {
            key: key.to_string(),
            reason: format!("plan extent must be positive, got {v}"),
        }),
    }
}

/// Whole-lattice transform composed of one plan per non-trivial axis.
#[derive(Clone, Debug)]
pub struct FullTransform {
    plans: SmallVec<[TransformPlan; 3]>,
}

impl FullTransform {
    /// The axis plans, x first.
    pub fn plans(&self) -> &[TransformPlan] {
        &self.plans
    }

    /// Apply every axis plan; the first failure is returned.
    pub fn execute(&self, data: &mut [Complex64], direction: TransformDirection) -> TransformResult {
        for plan in &self.plans {
            let result = plan.execute(data, direction);
            if !result.is_success() {
                return result;
            }
        }
        TransformResult::Success
    }
}

/// Build the whole-lattice transform for `grid`.
pub fn full_plan(grid: &Grid) -> Result<FullTransform, StoreError> {
    let extents = grid.extents()?;
    let plans = Axis::ALL
        .into_iter()
        .filter(|&axis| extents.along(axis) > 1)
        .map(|axis| TransformPlan::along(extents, axis))
        .collect();
    Ok(FullTransform { plans })
}
