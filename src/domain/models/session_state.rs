/// Whether an interview has started. A session is `Fresh` until its first
/// exchange is committed and again after a reset or restart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SessionState {
    Fresh,
    Active,
}
