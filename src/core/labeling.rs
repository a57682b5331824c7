//! Labeling scheme of the toy model.
//!
//! Six named states are split into three "qubits" (groups). Each group holds a
//! low (`q0`) and a high (`q1`) member, and the two members always sum to 7:
//! measuring one of them reveals its partner as the hidden state.

/// Sum shared by every state and its complement.
pub const PAIR_SUM: u8 = 7;

/// All labeled states, in order.
pub const BRIDGE: [u8; 6] = [1, 2, 3, 4, 5, 6];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Qubit {
    pub id: &'static str,
    pub q0: u8,
    pub q1: u8,
    pub name: &'static str,
}

impl Qubit {
    /// Map a collapsed bit onto this group's members: 1 → `q1`, anything else → `q0`.
    pub fn state_for(&self, bit: u8) -> u8 {
        if bit == 1 {
            self.q1
        } else {
            self.q0
        }
    }

    pub fn contains(&self, state: u8) -> bool {
        state == self.q0 || state == self.q1
    }
}

pub static QUBITS: [Qubit; 3] = [
    Qubit { id: "qubit_1", q0: 1, q1: 6, name: "a|y" },
    Qubit { id: "qubit_2", q0: 2, q1: 5, name: "b|e" },
    Qubit { id: "qubit_3", q0: 3, q1: 4, name: "c|d" },
];

/// Display name of a state. `0` is the ground label `h`.
pub fn state_name(state: u8) -> Option<&'static str> {
    match state {
        0 => Some("h"),
        1 => Some("a"),
        2 => Some("b"),
        3 => Some("c"),
        4 => Some("d"),
        5 => Some("e"),
        6 => Some("y"),
        _ => None,
    }
}

/// Hidden partner of `state`, or `None` outside 1..=6.
pub fn complement(state: u8) -> Option<u8> {
    match state {
        1 => Some(6),
        6 => Some(1),
        2 => Some(5),
        5 => Some(2),
        3 => Some(4),
        4 => Some(3),
        _ => None,
    }
}

/// Where a state sits in the group table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupMatch {
    pub qubit: &'static Qubit,
    /// True when the state is the group's `q1` member.
    pub is_high: bool,
}

impl GroupMatch {
    pub fn id(&self) -> &'static str {
        self.qubit.id
    }

    pub fn name(&self) -> &'static str {
        self.qubit.name
    }
}

/// First group containing `state`, if any.
pub fn identify_group(state: u8) -> Option<GroupMatch> {
    QUBITS.iter().find(|q| q.contains(state)).map(|qubit| GroupMatch {
        qubit,
        is_high: state == qubit.q1,
    })
}
