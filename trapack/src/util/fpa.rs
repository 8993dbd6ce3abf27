use std::cmp::Ordering;

/// Float wrapper whose comparisons treat values within [`float_cmp::approx_eq!()`] range as equal.
///
/// Used wherever a measured distance is compared against a user-given threshold,
/// so an overhang of exactly the tolerance is not rejected because of rounding.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}
