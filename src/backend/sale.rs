use super::{BackendError, BackendResult};

/// Entry point for starting a license sale.
pub trait SaleIntake: Send + Sync {
    fn begin_sale(&self) -> BackendResult<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UnwiredSaleIntake;

impl SaleIntake for UnwiredSaleIntake {
    fn begin_sale(&self) -> BackendResult<()> {
        Err(BackendError::Unwired("sale intake"))
    }
}
