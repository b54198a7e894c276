/// Outcome of probing for an optional platform capability.
///
/// Collaborator factories probe once, at construction, and hand the result to
/// the session coordinator. The coordinator checks the variant instead of
/// re-probing inside every call; `Unavailable` carries the reason it logs
/// when it skips the subsystem.
#[derive(Debug)]
pub enum Capability<T> {
    Available(T),
    Unavailable(String),
}

impl<T> Capability<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }

    /// Reason the capability is missing, if it is.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Capability::Available(_) => None,
            Capability::Unavailable(reason) => Some(reason),
        }
    }
}
