use std::fmt;
use std::str::FromStr;

use vremap_bit_derive::Bit;
use vremap_bit_mask::Bitable;

/// Logical in-game actions that can be bound to buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Bit)]
pub enum Action {
    Pause,
    Restart,
}

impl Action {
    pub const ALL: [Action; <Action as Bitable>::COUNT] = [Action::Pause, Action::Restart];

    pub fn name(self) -> &'static str {
        match self {
            Action::Pause => "pause",
            Action::Restart => "restart",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("pause".parse::<Action>(), Ok(Action::Pause));
        assert_eq!("Restart".parse::<Action>(), Ok(Action::Restart));
        assert_eq!("screenshot".parse::<Action>(), Err("screenshot".to_string()));
    }
}
