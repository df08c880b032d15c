use wordfreq_logging::{wf_debug, wf_info};

use crate::{rank, tokenize, Effect, FrequencyTable, Msg, RankedEntry, SessionState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Nothing is carried from one line to the next; every line is counted on
/// its own.
pub fn update(state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    if state.is_terminated() {
        return (state, Vec::new());
    }

    match msg {
        Msg::LineRead(line) => {
            if line.trim().is_empty() {
                return (state, vec![Effect::EmptyInputNotice, Effect::Prompt]);
            }
            let report = analyze(&line);
            (state, vec![Effect::Report(report), Effect::Prompt])
        }
        Msg::EndOfStream => {
            wf_info!("input closed, ending session");
            (SessionState::Terminated, Vec::new())
        }
        Msg::ReadFailed => {
            wf_info!("input failed, ending session");
            (SessionState::Terminated, Vec::new())
        }
    }
}

/// Runs tokenize, aggregate and rank over a single line.
pub fn analyze(line: &str) -> Vec<RankedEntry> {
    let table: FrequencyTable = tokenize(line).collect();
    wf_debug!(
        "counted {} tokens, {} distinct",
        table.total(),
        table.len()
    );
    rank(&table)
}
