//! Shared drivers for the reducer tests.

use crate::messages::{Command, Message};
use crate::models::{AskResponse, FileMeta, PendingFile};
use crate::state::AppState;
use crate::update::update;

pub fn pdf(name: &str) -> PendingFile {
    PendingFile::from_meta(FileMeta::new(name, 2048, "application/pdf"))
}

pub fn uploads_started(cmds: &[Command]) -> Vec<String> {
    cmds.iter()
        .filter_map(|c| match c {
            Command::UploadFile(f) => Some(f.meta.name.clone()),
            _ => None,
        })
        .collect()
}

pub fn asks_started(cmds: &[Command]) -> Vec<String> {
    cmds.iter()
        .filter_map(|c| match c {
            Command::AskQuestion(q) => Some(q.clone()),
            _ => None,
        })
        .collect()
}

/// Select the files and let the server accept each one in turn.
pub fn upload_all(state: &mut AppState, files: Vec<PendingFile>) {
    let mut cmds = update(state, Message::FilesSelected(files));
    loop {
        let Some(Command::UploadFile(file)) = cmds
            .into_iter()
            .find(|c| matches!(c, Command::UploadFile(_)))
        else {
            break;
        };
        cmds = update(
            state,
            Message::UploadFinished {
                file: file.meta,
                result: Ok(()),
                elapsed_ms: 12,
            },
        );
    }
}

pub fn ask(state: &mut AppState, question: &str) -> Vec<Command> {
    update(state, Message::UpdateQuestionInput(question.to_string()));
    update(state, Message::SubmitQuestion)
}

pub fn answer(question: &str, answer: &str, source: Option<&str>) -> Message {
    Message::AskFinished {
        question: question.to_string(),
        result: Ok(AskResponse {
            answer: answer.to_string(),
            source: source.map(str::to_string),
        }),
        elapsed_ms: 40,
    }
}
