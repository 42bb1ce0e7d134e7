use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The session store could not be read or written.
    SessionUnavailable,
    /// The action does not apply to the current phase.
    Rejected,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SessionUnavailable => "Something went wrong. Please try again.",
            ViewError::Rejected => "That action is not available right now.",
            ViewError::Unknown => "Something went wrong.",
        }
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::Storage(_) => ViewError::SessionUnavailable,
            SessionError::Completed | SessionError::InProgress => ViewError::Rejected,
            _ => ViewError::Unknown,
        }
    }
}
