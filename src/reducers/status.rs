//! Notification channel and status line bookkeeping.

use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, _cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::DismissNotification => {
            state.notification = None;
            true
        }
        // Both clear the error indicator but never hide a running request.
        Message::ResetStatus | Message::PageVisible => {
            state.offline = false;
            if state.status.is_error() {
                state.settle_status();
            }
            true
        }
        _ => false,
    }
}
