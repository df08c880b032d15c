//! Wordfreq core: tokenizer, frequency table, ranking and the pure session
//! state machine.
mod effect;
mod frequency;
mod msg;
mod rank;
mod state;
mod token;
mod update;

pub use effect::Effect;
pub use frequency::FrequencyTable;
pub use msg::Msg;
pub use rank::{rank, RankedEntry};
pub use state::SessionState;
pub use token::{tokenize, Token, Tokens};
pub use update::{analyze, update};
