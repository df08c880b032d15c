use crate::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Reading,
    Terminated,
}

impl SessionState {
    /// Initial state plus the effects a fresh session opens with.
    pub fn start() -> (Self, Vec<Effect>) {
        (Self::Reading, vec![Effect::Banner, Effect::Prompt])
    }

    pub fn is_terminated(self) -> bool {
        self == Self::Terminated
    }
}
