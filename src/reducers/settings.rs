use crate::messages::{Command, Message};
use crate::state::{AppState, NotificationKind};

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::ToggleSetting(key) => {
            let enabled = state.settings.toggle(*key);
            cmds.push(Command::SaveSettings(state.settings));
            state.notify(
                cmds,
                NotificationKind::Success,
                format!(
                    "{} {}",
                    key.label(),
                    if enabled { "enabled" } else { "disabled" }
                ),
            );
            true
        }
        Message::AutosaveTick => {
            if !state.history.is_empty() {
                cmds.push(Command::SaveHistory(state.history.clone()));
            }
            true
        }
        _ => false,
    }
}
