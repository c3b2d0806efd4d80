//! Status codes for integrators

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Interrupted,
    /// The corrector exhausted its iteration budget on the last step taken;
    /// the solution field holds the unconverged estimate.
    DidNotConverge,
    NeedLargerNmax,
}
