//! Integration tests for the landing page state
//!
//! Covers the theme toggle, the chat widget transcript and the contact form gate

use softsell::backend::{CannedResponder, FIXED_REPLY};
use softsell::chat::{ChatWidget, Visibility};
use softsell::content::BOT_GREETING;
use softsell::state::PageState;
use softsell::theme::palette;
use softsell::types::{ChatMessage, Sender, ThemeMode};

mod theme_tests {
    use super::*;

    #[test]
    fn test_toggle_parity() {
        for n in 0..10 {
            let mut state = PageState::new();
            for _ in 0..n {
                state.toggle_theme();
            }
            let expected = if n % 2 == 0 {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            assert_eq!(state.theme, expected, "after {n} toggles");
            assert_eq!(state.palette(), palette(expected));
        }
    }

    #[test]
    fn test_double_toggle_restores_palette() {
        let mut state = PageState::new();
        let original = state.palette();
        state.toggle_theme();
        assert_ne!(state.palette(), original);
        state.toggle_theme();
        assert_eq!(state.palette(), original);
    }
}

mod chat_tests {
    use super::*;

    fn open_widget() -> ChatWidget {
        let mut widget = ChatWidget::new();
        widget.open();
        widget
    }

    #[test]
    fn test_hello_yields_three_messages() {
        let mut widget = open_widget();
        widget.set_draft("Hello");
        assert!(widget.send(&CannedResponder));

        assert_eq!(
            widget.transcript().messages(),
            &[
                ChatMessage::bot(BOT_GREETING),
                ChatMessage::user("Hello"),
                ChatMessage::bot(FIXED_REPLY),
            ]
        );
    }

    #[test]
    fn test_blank_input_changes_nothing() {
        let mut widget = open_widget();
        widget.set_draft("Hello");
        widget.send(&CannedResponder);
        let before = widget.clone();

        for blank in ["", "   "] {
            widget.set_draft(blank);
            assert!(!widget.send(&CannedResponder));
            assert_eq!(widget.transcript(), before.transcript());
            assert_eq!(widget.draft(), blank);
        }
    }

    #[test]
    fn test_open_close_keeps_transcript() {
        let mut widget = ChatWidget::new();
        let transcript = widget.transcript().clone();
        widget.open();
        widget.close();
        assert_eq!(widget.visibility(), Visibility::Closed);
        assert_eq!(widget.transcript(), &transcript);
    }

    #[test]
    fn test_order_follows_sends() {
        let mut widget = open_widget();
        let sent = ["first", "second", "third", "fourth"];
        for text in sent {
            widget.set_draft(text);
            assert!(widget.send(&CannedResponder));
        }

        let messages = widget.transcript().messages();
        assert_eq!(messages.len(), 1 + 2 * sent.len());
        let users: Vec<&str> = messages
            .iter()
            .filter(|msg| msg.sender() == Sender::User)
            .map(ChatMessage::text)
            .collect();
        assert_eq!(users, sent);

        // Every user message is immediately followed by the canned reply.
        for pair in messages[1..].chunks(2) {
            assert_eq!(pair[0].sender(), Sender::User);
            assert_eq!(pair[1], ChatMessage::bot(FIXED_REPLY));
        }
    }

    #[test]
    fn test_transcript_never_shrinks() {
        let mut widget = open_widget();
        let mut last_len = widget.transcript().len();
        for draft in ["a", " ", "b", "", "c"] {
            widget.set_draft(draft);
            widget.send(&CannedResponder);
            widget.close();
            widget.open();
            assert!(widget.transcript().len() >= last_len);
            last_len = widget.transcript().len();
        }
        assert_eq!(last_len, 7);
    }
}

mod state_tests {
    use super::*;

    #[test]
    fn test_page_state_round_trips_through_json() {
        let mut state = PageState::new();
        state.toggle_theme();
        state.chat.open();
        state.chat.set_draft("Hello");
        state.chat.send(&CannedResponder);
        state.chat.set_draft("pending");

        let json = serde_json::to_string(&state).expect("serialize");
        assert!(json.contains(r#""theme":"dark""#));
        assert!(json.contains(r#""visibility":"open""#));

        let restored: PageState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, state);
    }
}

mod contact_tests {
    use softsell::contact::{ContactError, ContactForm, Field};
    use softsell::types::LicenseType;

    #[test]
    fn test_license_type_closed_set() {
        let mut form = ContactForm {
            name: "Linus".to_string(),
            email: "linus@example.org".to_string(),
            message: "Kernel seats".to_string(),
            ..ContactForm::default()
        };

        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(Field::LicenseType))
        );

        for kind in LicenseType::ALL {
            form.set_license_type(kind.value()).expect("known license type");
            assert_eq!(form.validate().expect("valid").license_type, kind);
        }

        assert!(form.set_license_type("freeware").is_err());
    }
}
