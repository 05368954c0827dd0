/// Actions an observer can take during refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop refining and return the current iterate.
    StopEarly,
}
