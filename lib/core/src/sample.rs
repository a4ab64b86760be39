use crate::error::{Degeneracy, Error, Result};
use serde::{Deserialize, Serialize};

/// A set of observations sharing one feature space.
///
/// Rows are stored contiguously (row-major) so that distance kernels walk
/// memory linearly. Feature identity is positional: column `f` of one sample
/// is compared with column `f` of another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Sample {
    data: Vec<f64>,
    dim: usize,
    len: usize,
}

impl Sample {
    /// Build a sample from observation rows. All rows must have the same,
    /// non-zero number of features.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = match rows.first() {
            Some(first) => first.len(),
            None => return Ok(Self::empty(0)),
        };
        if dim == 0 {
            return Err(Error::InvalidConfig(
                "observations must have at least one feature".to_string(),
            ));
        }

        let mut data = Vec::with_capacity(rows.len() * dim);
        for row in &rows {
            if row.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            dim,
            len: rows.len(),
        })
    }

    /// Build a sample from row-major values.
    pub fn from_flat(data: Vec<f64>, dim: usize) -> Result<Self> {
        if dim == 0 {
            if data.is_empty() {
                return Ok(Self::empty(0));
            }
            return Err(Error::InvalidConfig(
                "observations must have at least one feature".to_string(),
            ));
        }
        if data.len() % dim != 0 {
            return Err(Error::InvalidConfig(format!(
                "{} values cannot be split into rows of {} features",
                data.len(),
                dim
            )));
        }
        let len = data.len() / dim;
        Ok(Self { data, dim, len })
    }

    /// A sample with no observations.
    #[inline]
    #[must_use]
    pub fn empty(dim: usize) -> Self {
        Self {
            data: Vec::new(),
            dim,
            len: 0,
        }
    }

    /// Number of observations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of features per observation.
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Observation `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.dim;
        &self.data[start..start + self.dim]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.len).map(move |i| self.row(i))
    }

    /// Values of feature `f` across all observations.
    pub fn column(&self, f: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows().map(move |row| row[f])
    }

    /// Fail on the first NaN or infinite value.
    pub fn check_finite(&self) -> Result<()> {
        match self.data.iter().position(|v| !v.is_finite()) {
            None => Ok(()),
            Some(pos) => Err(Error::DegenerateInput(Degeneracy::NonFinite {
                row: pos / self.dim,
                feature: pos % self.dim,
            })),
        }
    }

    /// Rows of `self` followed by rows of `other`.
    pub fn concat(&self, other: &Sample) -> Result<Sample> {
        if self.dim != other.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim,
                actual: other.dim,
            });
        }
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Ok(Sample {
            data,
            dim: self.dim,
            len: self.len + other.len,
        })
    }

    /// Multiply every feature by its factor.
    ///
    /// # Panics
    /// Panics if `factors.len() != self.dim()`.
    #[must_use]
    pub fn scaled(&self, factors: &[f64]) -> Sample {
        assert_eq!(factors.len(), self.dim);
        let data = self
            .data
            .chunks_exact(self.dim.max(1))
            .flat_map(|row| row.iter().zip(factors).map(|(v, s)| v * s))
            .collect();
        Sample {
            data,
            dim: self.dim,
            len: self.len,
        }
    }

    /// Split into even-indexed and odd-indexed observations.
    #[must_use]
    pub fn split_alternate(&self) -> (Sample, Sample) {
        let mut even = Vec::with_capacity((self.len + 1) / 2 * self.dim);
        let mut odd = Vec::with_capacity(self.len / 2 * self.dim);
        for (i, row) in self.rows().enumerate() {
            if i % 2 == 0 {
                even.extend_from_slice(row);
            } else {
                odd.extend_from_slice(row);
            }
        }
        (
            Sample {
                len: (self.len + 1) / 2,
                data: even,
                dim: self.dim,
            },
            Sample {
                len: self.len / 2,
                data: odd,
                dim: self.dim,
            },
        )
    }
}

impl TryFrom<Vec<Vec<f64>>> for Sample {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Sample::new(rows)
    }
}

impl From<Sample> for Vec<Vec<f64>> {
    fn from(sample: Sample) -> Self {
        sample.rows().map(<[f64]>::to_vec).collect()
    }
}
