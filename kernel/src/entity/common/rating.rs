use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 4.0;

/// A score in the closed range `[MIN_RATING, MAX_RATING]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Fromln, AsRefln)]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: impl Into<f64>) -> error_stack::Result<Self, KernelError> {
        let value = value.into();
        // NaN falls outside every range
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(Report::new(KernelError::InvalidRating).attach_printable(format!(
                "{value} is invalid. Please pass a numeric rating between {MIN_RATING} and {MAX_RATING} inclusive."
            )));
        }
        Ok(Self(value))
    }

    /// Parses an optional raw value; an absent one is rejected like an out of range one.
    pub fn parse(value: Option<f64>) -> error_stack::Result<Self, KernelError> {
        match value {
            Some(value) => Self::new(value),
            None => Err(Report::new(KernelError::InvalidRating)
                .attach_printable("No rating given. Please pass a numeric rating between 0 and 4 inclusive.")),
        }
    }

    pub fn mean<'a>(ratings: impl IntoIterator<Item = &'a Rating>) -> Option<f64> {
        let (total, n) = ratings
            .into_iter()
            .fold((0.0, 0u32), |(total, n), rating| (total + rating.0, n + 1));
        if n == 0 {
            None
        } else {
            Some(total / f64::from(n))
        }
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use crate::entity::Rating;
    use crate::KernelError;

    #[rstest]
    #[case(0.0)]
    #[case(2.5)]
    #[case(4.0)]
    fn accepts_bounds_and_inner_values(#[case] value: f64) {
        let rating = Rating::new(value).unwrap();
        let inner: &f64 = rating.as_ref();
        assert_eq!(*inner, value);
    }

    #[rstest]
    #[case(-0.1)]
    #[case(4.01)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_out_of_range(#[case] value: f64) {
        let report = Rating::new(value).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::InvalidRating);
    }

    #[test]
    fn absent_rating_is_rejected() {
        let report = Rating::parse(None).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::InvalidRating);
    }

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(Rating::mean(&[] as &[Rating]), None);
    }

    #[test]
    fn mean_is_exact() {
        let ratings = [1.0, 2.0, 4.0].map(|r| Rating::new(r).unwrap());
        assert_eq!(Rating::mean(&ratings), Some(7.0 / 3.0));
    }
}
