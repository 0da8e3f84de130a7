//! Vectors and matrices over GF(2), with Gaussian elimination
//!
//! Storage is a plain row-major element vector; the interesting part is
//! [`Gf2Matrix::gauss`], an in-place reduction to reduced row-echelon form
//! over GF(2), where eliminating a row is a single XOR.

use alloc::vec;
use alloc::vec::Vec;

use core::fmt;
use core::ops::{Index, IndexMut};

use zring_api::error::{validate, Result};

use crate::gf2::Gf2;


/// A vector over GF(2)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gf2Vector {
    elems: Vec<Gf2>,
}

impl Gf2Vector {
    /// The zero vector of the given length
    pub fn new(len: usize) -> Self {
        Gf2Vector {
            elems: vec![Gf2::ZERO; len],
        }
    }

    /// Build from bits, taking the low bit of each entry
    pub fn from_bits(bits: &[u64]) -> Self {
        Gf2Vector {
            elems: bits.iter().map(|&b| Gf2::new(b)).collect(),
        }
    }

    /// The length of the vector
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Whether the vector has no entries
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// The entries as a slice
    pub fn as_slice(&self) -> &[Gf2] {
        &self.elems
    }

    /// Entry-wise sum (XOR); fails on length mismatch
    pub fn add(&self, other: &Gf2Vector) -> Result<Gf2Vector> {
        validate::dimension("vector add", other.len(), self.len())?;
        Ok(Gf2Vector {
            elems: self
                .elems
                .iter()
                .zip(&other.elems)
                .map(|(&a, &b)| a + b)
                .collect(),
        })
    }

    /// Inner product; fails on length mismatch
    pub fn dot(&self, other: &Gf2Vector) -> Result<Gf2> {
        validate::dimension("vector dot", other.len(), self.len())?;
        Ok(self
            .elems
            .iter()
            .zip(&other.elems)
            .fold(Gf2::ZERO, |acc, (&a, &b)| acc + a * b))
    }
}

impl Index<usize> for Gf2Vector {
    type Output = Gf2;

    fn index(&self, i: usize) -> &Gf2 {
        &self.elems[i]
    }
}

impl IndexMut<usize> for Gf2Vector {
    fn index_mut(&mut self, i: usize) -> &mut Gf2 {
        &mut self.elems[i]
    }
}

impl fmt::Display for Gf2Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.elems.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")
    }
}

/// A row-major matrix over GF(2)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gf2Matrix {
    nrows: usize,
    ncols: usize,
    elems: Vec<Gf2>,
}

impl Gf2Matrix {
    /// The zero matrix of the given shape
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Gf2Matrix {
            nrows,
            ncols,
            elems: vec![Gf2::ZERO; nrows * ncols],
        }
    }

    /// The n-by-n identity
    pub fn identity(n: usize) -> Self {
        let mut m = Gf2Matrix::new(n, n);
        for i in 0..n {
            m.set(i, i, Gf2::ONE);
        }
        m
    }

    /// Build from rows of bits; fails if the rows are ragged
    pub fn from_rows(rows: &[&[u64]]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut elems = Vec::with_capacity(nrows * ncols);
        for row in rows {
            validate::dimension("matrix row", row.len(), ncols)?;
            elems.extend(row.iter().map(|&b| Gf2::new(b)));
        }
        Ok(Gf2Matrix {
            nrows,
            ncols,
            elems,
        })
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// The entry at `(row, col)`; panics out of bounds
    pub fn get(&self, row: usize, col: usize) -> Gf2 {
        assert!(row < self.nrows && col < self.ncols, "index out of bounds");
        self.elems[row * self.ncols + col]
    }

    /// Write the entry at `(row, col)`; panics out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Gf2) {
        assert!(row < self.nrows && col < self.ncols, "index out of bounds");
        self.elems[row * self.ncols + col] = value;
    }

    /// A single row as a vector
    pub fn row(&self, row: usize) -> Gf2Vector {
        assert!(row < self.nrows, "row index out of bounds");
        Gf2Vector {
            elems: self.elems[row * self.ncols..(row + 1) * self.ncols].to_vec(),
        }
    }

    /// The transpose
    pub fn transpose(&self) -> Gf2Matrix {
        let mut out = Gf2Matrix::new(self.ncols, self.nrows);
        for r in 0..self.nrows {
            for c in 0..self.ncols {
                out.set(c, r, self.get(r, c));
            }
        }
        out
    }

    /// Entry-wise sum (XOR); fails on shape mismatch
    pub fn add(&self, other: &Gf2Matrix) -> Result<Gf2Matrix> {
        validate::dimension("matrix add rows", other.nrows, self.nrows)?;
        validate::dimension("matrix add cols", other.ncols, self.ncols)?;
        Ok(Gf2Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            elems: self
                .elems
                .iter()
                .zip(&other.elems)
                .map(|(&a, &b)| a + b)
                .collect(),
        })
    }

    /// Matrix product; fails unless `self.ncols == other.nrows`
    pub fn mul(&self, other: &Gf2Matrix) -> Result<Gf2Matrix> {
        validate::dimension("matrix mul", other.nrows, self.ncols)?;
        let mut out = Gf2Matrix::new(self.nrows, other.ncols);
        for r in 0..self.nrows {
            for k in 0..self.ncols {
                if self.get(r, k).is_zero() {
                    continue;
                }
                for c in 0..other.ncols {
                    let acc = out.get(r, c) + other.get(k, c);
                    out.set(r, c, acc);
                }
            }
        }
        Ok(out)
    }

    /// Matrix-vector product; fails unless `self.ncols == vector.len()`
    pub fn mul_vector(&self, vector: &Gf2Vector) -> Result<Gf2Vector> {
        validate::dimension("matrix-vector mul", vector.len(), self.ncols)?;
        let mut out = Gf2Vector::new(self.nrows);
        for r in 0..self.nrows {
            out[r] = self.row(r).dot(vector)?;
        }
        Ok(out)
    }

    /// In-place reduction to reduced row-echelon form; returns the rank
    ///
    /// For each column: scan top-down from the current pivot row for a
    /// nonzero entry, swap it up, and XOR it into every other row with a
    /// 1 in that column — below *and* above, so the result is fully
    /// reduced, not just triangular.
    pub fn gauss(&mut self) -> usize {
        let mut rank = 0;
        for col in 0..self.ncols {
            if rank == self.nrows {
                break;
            }
            let pivot = match (rank..self.nrows).find(|&r| self.get(r, col).is_one()) {
                Some(r) => r,
                None => continue,
            };
            self.swap_rows(rank, pivot);
            for r in 0..self.nrows {
                if r != rank && self.get(r, col).is_one() {
                    self.xor_row_into(rank, r);
                }
            }
            rank += 1;
        }
        rank
    }

    /// The rank, computed on a scratch copy; the matrix is left unchanged
    pub fn rank(&self) -> usize {
        self.clone().gauss()
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.ncols {
            self.elems
                .swap(a * self.ncols + c, b * self.ncols + c);
        }
    }

    /// XOR row `src` into row `dst`
    fn xor_row_into(&mut self, src: usize, dst: usize) {
        for c in 0..self.ncols {
            let v = self.get(dst, c) + self.get(src, c);
            self.set(dst, c, v);
        }
    }
}

impl fmt::Display for Gf2Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.nrows {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.row(r))?;
        }
        Ok(())
    }
}
