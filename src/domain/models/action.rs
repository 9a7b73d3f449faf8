/// Requests sent from the terminal to the session worker. Processed strictly
/// in the order they are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Submit(String),
    Reset(),
    Restart(),
    Usage(),
    History(),
}
