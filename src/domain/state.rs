use crate::utils::error::AddressError;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Australian states and territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AustralianState {
    Nsw,
    Vic,
    Qld,
    Sa,
    Wa,
    Tas,
    Nt,
    Act,
}

// (state, code, label)
static STATES: [(AustralianState, &str, &str); 8] = [
    (AustralianState::Nsw, "NSW", "New South Wales (NSW)"),
    (AustralianState::Vic, "VIC", "Victoria (VIC)"),
    (AustralianState::Qld, "QLD", "Queensland (QLD)"),
    (AustralianState::Sa, "SA", "South Australia (SA)"),
    (AustralianState::Wa, "WA", "Western Australia (WA)"),
    (AustralianState::Tas, "TAS", "Tasmania (TAS)"),
    (AustralianState::Nt, "NT", "Northern Territory (NT)"),
    (AustralianState::Act, "ACT", "Australian Capital Territory (ACT)"),
];

impl AustralianState {
    pub fn all() -> impl Iterator<Item = AustralianState> {
        STATES.iter().map(|(state, _, _)| *state)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        STATES
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(state, _, _)| *state)
    }

    pub fn code(self) -> &'static str {
        self.entry().1
    }

    pub fn label(self) -> &'static str {
        self.entry().2
    }

    fn entry(self) -> &'static (AustralianState, &'static str, &'static str) {
        // 表格涵蓋所有變體
        &STATES[self as usize]
    }
}

impl fmt::Display for AustralianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AustralianState {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            let codes: Vec<&str> = STATES.iter().map(|(_, code, _)| *code).collect();
            AddressError::InputError {
                field: "state".to_string(),
                reason: format!("unknown state '{}'. Valid states: {}", s, codes.join(", ")),
            }
        })
    }
}

/// Human-readable label for a state code, or the code itself when unknown.
pub fn state_label(code: &str) -> Cow<'_, str> {
    match AustralianState::from_code(code) {
        Some(state) => Cow::Borrowed(state.label()),
        None => Cow::Borrowed(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_variants() {
        for state in AustralianState::all() {
            assert_eq!(AustralianState::from_code(state.code()), Some(state));
        }
        assert_eq!(AustralianState::all().count(), 8);
    }

    #[test]
    fn test_state_label() {
        assert_eq!(state_label("NSW"), "New South Wales (NSW)");
        assert_eq!(state_label("ACT"), "Australian Capital Territory (ACT)");
        assert_eq!(state_label("WA"), "Western Australia (WA)");
    }

    #[test]
    fn test_state_label_falls_back_to_code() {
        assert_eq!(state_label("XYZ"), "XYZ");
        assert_eq!(state_label("nsw"), "nsw");
        assert_eq!(state_label(""), "");
    }

    #[test]
    fn test_parse_state() {
        assert_eq!("TAS".parse::<AustralianState>().unwrap(), AustralianState::Tas);

        match "Tasmania".parse::<AustralianState>() {
            Err(AddressError::InputError { field, reason }) => {
                assert_eq!(field, "state");
                assert!(reason.contains("NSW, VIC, QLD, SA, WA, TAS, NT, ACT"));
            }
            other => panic!("expected input error, got {:?}", other),
        }
    }
}
