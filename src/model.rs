use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use ordered_float::OrderedFloat;

/// Cumulative weight along a path, or the weight of a single edge.
/// Distances are totally ordered so they can be used as priority queue keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(OrderedFloat<f64>);

impl Distance {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    /// Distance of a node that cannot be reached from the source.
    pub const INFINITY: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn from_units(units: f64) -> Self {
        Self(OrderedFloat(units))
    }

    pub const fn units(&self) -> f64 {
        self.0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.0.is_finite()
    }

    pub fn is_negative(&self) -> bool {
        self.0.0 < 0.0
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, d| acc + d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{}", self.units())
        } else {
            f.write_str("inf")
        }
    }
}

/// A directed, weighted edge between two labelled nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub weight: Distance,
}

impl<'a> Edge<'a> {
    pub const fn new(from: &'a str, to: &'a str, weight: f64) -> Self {
        Self {
            from,
            to,
            weight: Distance::from_units(weight),
        }
    }
}
