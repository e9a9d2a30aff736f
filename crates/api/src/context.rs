use brecho_core::SessionId;

/// Cart session for a request.
///
/// Taken verbatim from the `x-session-id` header. It is not authenticated:
/// anyone presenting the same token shares the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session_id: SessionId,
}

impl SessionContext {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}
