//! Ask flow and the transcript-level actions (clear, export, help, restore).

use chrono::Utc;

use crate::constants::{HELP_TEXT, NO_DOCUMENT_MESSAGE};
use crate::export::{build_export, export_filename};
use crate::messages::{Command, Message};
use crate::models::{ChatEntry, ChatTurn};
use crate::state::{AppState, NotificationKind, StatusPhase, Timing};

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::UpdateQuestionInput(text) => {
            state.question_input = text.clone();
            true
        }
        Message::SubmitQuestion => {
            submit_question(state, cmds);
            true
        }
        Message::AskFinished {
            question,
            result,
            elapsed_ms,
        } => {
            // Re-enables the composer on every outcome.
            state.ask_in_flight = false;
            state.touch_transcript();

            match result {
                Ok(response) => {
                    let excerpt = response.excerpt().map(str::to_owned);
                    let attached = if state.settings.show_sources {
                        excerpt.clone()
                    } else {
                        None
                    };
                    state.push_entry(ChatEntry::bot(response.answer.clone(), attached));
                    state.history.push(ChatTurn {
                        question: question.clone(),
                        answer: response.answer.clone(),
                        source: excerpt,
                        timestamp: Utc::now(),
                    });
                    state.last_timing = Some(Timing::Response(*elapsed_ms));
                    state.offline = false;
                    state.settle_status();
                }
                Err(error) => {
                    crate::warn_log!("Ask failed after {}ms: {}", elapsed_ms, error);
                    state.push_entry(ChatEntry::bot(
                        format!("Sorry, I encountered an error: {}", error),
                        None,
                    ));
                    state.fail_status(cmds, StatusPhase::Error);
                }
            }
            true
        }
        Message::HistoryRestored(turns) => {
            restore_history(state, turns);
            true
        }
        Message::ClearChat => {
            state.entries.clear();
            state.history.clear();
            state.touch_transcript();
            cmds.push(Command::ClearSavedHistory);
            state.notify(cmds, NotificationKind::Success, "Chat cleared");
            state.settle_status();
            true
        }
        Message::ExportChat => {
            export_chat(state, cmds);
            true
        }
        Message::ShowHelp => {
            state.push_entry(ChatEntry::system(HELP_TEXT));
            true
        }
        _ => false,
    }
}

fn submit_question(state: &mut AppState, cmds: &mut Vec<Command>) {
    let question = state.question_input.trim().to_string();

    // Single-flight; blank input is ignored silently.
    if question.is_empty() || state.ask_in_flight {
        return;
    }
    if !state.document_uploaded() {
        state.notify(cmds, NotificationKind::Error, NO_DOCUMENT_MESSAGE);
        return;
    }

    state.push_entry(ChatEntry::user(question.clone()));
    state.question_input.clear();
    state.ask_in_flight = true;
    state.status = StatusPhase::Thinking;
    cmds.push(Command::AskQuestion(question));
}

fn restore_history(state: &mut AppState, turns: &[ChatTurn]) {
    if turns.is_empty() {
        return;
    }
    if !state.history.is_empty() {
        crate::warn_log!("Ignoring restored history: session already has {} turns", state.history.len());
        return;
    }

    let show_sources = state.settings.show_sources;
    for turn in turns {
        let mut question = ChatEntry::user(turn.question.clone());
        question.timestamp = turn.timestamp;
        let source = if show_sources { turn.source.clone() } else { None };
        let mut answer = ChatEntry::bot(turn.answer.clone(), source);
        answer.timestamp = turn.timestamp;
        state.entries.push(question);
        state.entries.push(answer);
    }
    state.history = turns.to_vec();
    state.touch_transcript();
}

fn export_chat(state: &mut AppState, cmds: &mut Vec<Command>) {
    let now = Utc::now();
    let Some(export) = build_export(state, now) else {
        state.notify(cmds, NotificationKind::Error, "No chat history to export");
        return;
    };

    match serde_json::to_string_pretty(&export) {
        Ok(contents) => {
            cmds.push(Command::DownloadFile {
                filename: export_filename(now),
                contents,
            });
            state.notify(cmds, NotificationKind::Success, "Chat exported successfully");
        }
        Err(e) => {
            crate::error_log!("Failed to serialise chat export: {}", e);
            state.notify(cmds, NotificationKind::Error, "Export failed");
        }
    }
}
