/// Whether the floors are gated behind the login curtain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

impl GateState {
    pub fn from_session(user: Option<&str>) -> Self {
        match user {
            Some(_) => GateState::Unlocked,
            None => GateState::Locked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverState {
    /// Opaque, swallows pointer input.
    Closed,
    /// Transparent, lets pointer input through.
    Open,
}

impl CoverState {
    pub fn opacity(self) -> &'static str {
        match self {
            CoverState::Closed => "1",
            CoverState::Open => "0",
        }
    }

    pub fn pointer_events(self) -> &'static str {
        match self {
            CoverState::Closed => "auto",
            CoverState::Open => "none",
        }
    }
}

/// Cover state for each of `count` floors. Unlocked, only `active` opens.
pub fn covers(state: GateState, active: Option<usize>, count: usize) -> Vec<CoverState> {
    (0..count)
        .map(|i| match state {
            GateState::Unlocked if Some(i) == active => CoverState::Open,
            _ => CoverState::Closed,
        })
        .collect()
}
