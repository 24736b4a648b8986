use serde::{Deserialize, Serialize};

/// Semantic category of a notification, decided per call site.
///
/// `Alert`, `Success` and `Error` come out of message classification;
/// `Confirm` is selected structurally (the legacy call was `confirm`, not
/// `alert`) and is never produced by the classifier itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Alert,
    Success,
    Error,
    Confirm,
}

impl NotificationKind {
    /// The call head a legacy call of this category is rewritten to.
    pub fn target_call(self) -> &'static str {
        match self {
            NotificationKind::Alert => "showAlert",
            NotificationKind::Success => "showSuccess",
            NotificationKind::Error => "showError",
            NotificationKind::Confirm => "showConfirm",
        }
    }

    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Alert,
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Confirm,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_calls_are_distinct() {
        let mut seen = std::collections::BTreeSet::new();
        for kind in NotificationKind::ALL {
            assert!(seen.insert(kind.target_call()));
        }
    }

    #[test]
    fn serializes_snake_case() {
        let s = serde_json::to_string(&NotificationKind::Success).unwrap();
        assert_eq!(s, "\"success\"");
    }
}
