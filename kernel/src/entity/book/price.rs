use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Fromln, AsRefln)]
pub struct BookPrice(f64);

impl BookPrice {
    pub fn new(price: impl Into<f64>) -> error_stack::Result<Self, KernelError> {
        let price = price.into();
        if !price.is_finite() || price < 0.0 {
            return Err(Report::new(KernelError::InvalidPrice)
                .attach_printable(format!("{price} is not a valid price for a book")));
        }
        Ok(Self(price))
    }
}
