// src/update.rs
//
// Pure state transitions.  Nothing in here touches the DOM or the network:
// side effects are returned as `Command`s for `command_executors` to run.
//
use crate::messages::{Command, Message};
use crate::reducers;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    crate::debug_log!("update: {}", describe(&msg));

    let handled = reducers::upload::update(state, &msg, &mut cmds)
        || reducers::chat::update(state, &msg, &mut cmds)
        || reducers::documents::update(state, &msg, &mut cmds)
        || reducers::settings::update(state, &msg, &mut cmds)
        || reducers::status::update(state, &msg, &mut cmds);

    if !handled {
        crate::warn_log!("Unhandled message: {}", describe(&msg));
    }

    cmds
}

// Keep console output short; file handles and answers can be large.
fn describe(msg: &Message) -> String {
    match msg {
        Message::FilesSelected(files) => format!("FilesSelected({} files)", files.len()),
        Message::UploadFinished { file, result, .. } => {
            format!("UploadFinished({}, ok={})", file.name, result.is_ok())
        }
        Message::AskFinished { result, .. } => format!("AskFinished(ok={})", result.is_ok()),
        Message::UpdateQuestionInput(_) => "UpdateQuestionInput".to_string(),
        Message::HistoryRestored(turns) => format!("HistoryRestored({} turns)", turns.len()),
        other => format!("{:?}", other),
    }
}
