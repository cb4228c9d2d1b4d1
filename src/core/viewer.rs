// src/core/viewer.rs - Conversation pane state machine
//
// NoSessionSelected --select--> SessionActive --back--> NoSessionSelected
//
// Messages are copied out of the session list on selection; they are never
// fetched separately.

use crate::core::types::{Message, Session};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    NoSessionSelected,
    SessionActive {
        session_id: i64,
        messages: Vec<Message>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ConversationViewer {
    state: ConversationState,
    /// Set whenever a new message list is displayed; the renderer consumes it
    /// and jumps to the newest message.
    scroll_to_end: bool,
}

impl ConversationViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn active_session_id(&self) -> Option<i64> {
        match &self.state {
            ConversationState::SessionActive { session_id, .. } => Some(*session_id),
            ConversationState::NoSessionSelected => None,
        }
    }

    /// Messages currently displayed (empty when nothing is selected).
    pub fn messages(&self) -> &[Message] {
        match &self.state {
            ConversationState::SessionActive { messages, .. } => messages,
            ConversationState::NoSessionSelected => &[],
        }
    }

    /// Activate session `id` if it is present in `sessions`. Returns whether
    /// the selection happened; an unknown id leaves the state untouched.
    pub fn select_session(&mut self, sessions: &[Session], id: i64) -> bool {
        let Some(session) = sessions.iter().find(|s| s.id == id) else {
            tracing::debug!(id, "ignoring selection of unknown session");
            return false;
        };
        self.state = ConversationState::SessionActive {
            session_id: id,
            messages: session.messages.clone(),
        };
        self.scroll_to_end = true;
        true
    }

    pub fn back(&mut self) {
        self.state = ConversationState::NoSessionSelected;
    }

    /// Take the pending scroll-to-newest request.
    pub fn take_scroll_to_end(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Sender;
    use pretty_assertions::assert_eq;

    fn sessions() -> Vec<Session> {
        (1..=3)
            .map(|id| Session {
                id,
                name: format!("s{id}"),
                messages: (0..id)
                    .map(|m| Message {
                        id: m,
                        content: format!("{id}-{m}"),
                        action: if m % 2 == 0 { Sender::User } else { Sender::Ai },
                        timestamp: format!("2024-01-01T10:0{m}:00Z"),
                    })
                    .collect(),
                message_count: id as u64,
                role: None,
            })
            .collect()
    }

    #[test]
    fn test_starts_unselected() {
        let viewer = ConversationViewer::new();
        assert_eq!(viewer.state(), &ConversationState::NoSessionSelected);
        assert!(viewer.messages().is_empty());
        assert_eq!(viewer.active_session_id(), None);
    }

    #[test]
    fn test_select_copies_messages_exactly() {
        let list = sessions();
        let mut viewer = ConversationViewer::new();
        assert!(viewer.select_session(&list, 3));
        assert_eq!(viewer.active_session_id(), Some(3));
        assert_eq!(viewer.messages(), list[2].messages.as_slice());
        assert!(viewer.take_scroll_to_end());
        assert!(!viewer.take_scroll_to_end());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let list = sessions();
        let mut viewer = ConversationViewer::new();
        viewer.select_session(&list, 2);
        viewer.take_scroll_to_end();
        let before = viewer.state().clone();

        assert!(!viewer.select_session(&list, 99));
        assert_eq!(viewer.state(), &before);
        assert!(!viewer.take_scroll_to_end());
    }

    #[test]
    fn test_reselect_replaces_active() {
        let list = sessions();
        let mut viewer = ConversationViewer::new();
        viewer.select_session(&list, 1);
        viewer.select_session(&list, 2);
        assert_eq!(viewer.active_session_id(), Some(2));
        assert_eq!(viewer.messages().len(), 2);
    }

    #[test]
    fn test_back_clears_active() {
        let list = sessions();
        let mut viewer = ConversationViewer::new();
        viewer.select_session(&list, 1);
        viewer.back();
        assert_eq!(viewer.state(), &ConversationState::NoSessionSelected);
        assert!(viewer.messages().is_empty());
    }
}
