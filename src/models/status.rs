use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado de avance de un documento (delivery / transfer / receipt /
/// adjustment). Avanza de forma monótona:
///
///   Draft → Waiting | Ready → Done
///
/// Un documento en `Done` nunca retrocede; el Synchronizer descarta cualquier
/// merge que lo intente.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum DocumentStatus {
    Draft,
    Waiting,
    Ready,
    Done,
}

impl DocumentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DocumentStatus::Done)
    }

    /// `true` si pasar de `self` al estado entrante sería una regresión
    /// desde el estado terminal.
    pub fn regressed_by(&self, incoming: DocumentStatus) -> bool {
        self.is_terminal() && !incoming.is_terminal()
    }
}

impl Default for DocumentStatus {
    fn default() -> Self {
        DocumentStatus::Draft
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Waiting => "Waiting",
            DocumentStatus::Ready => "Ready",
            DocumentStatus::Done => "Done",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_never_regresses() {
        assert!(DocumentStatus::Done.regressed_by(DocumentStatus::Draft));
        assert!(DocumentStatus::Done.regressed_by(DocumentStatus::Ready));
        assert!(DocumentStatus::Done.regressed_by(DocumentStatus::Waiting));
        assert!(!DocumentStatus::Done.regressed_by(DocumentStatus::Done));
    }

    #[test]
    fn non_terminal_states_accept_any_transition() {
        assert!(!DocumentStatus::Draft.regressed_by(DocumentStatus::Ready));
        assert!(!DocumentStatus::Ready.regressed_by(DocumentStatus::Draft));
        assert!(!DocumentStatus::Waiting.regressed_by(DocumentStatus::Done));
    }

    #[test]
    fn wire_labels_round_trip() {
        let s: DocumentStatus = serde_json::from_str("\"Ready\"").unwrap();
        assert_eq!(s, DocumentStatus::Ready);
        assert_eq!(serde_json::to_string(&DocumentStatus::Done).unwrap(), "\"Done\"");
    }
}
