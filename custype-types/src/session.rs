/// Host session or connection handle.
///
/// Handed to aggregates at initialization. The core never looks inside it;
/// only the id is read, for tracing.
pub trait Session: Send + Sync {
    fn session_id(&self) -> u64;
}

/// A session with no connection behind it, for embedded or test use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetachedSession;

impl Session for DetachedSession {
    fn session_id(&self) -> u64 {
        0
    }
}
