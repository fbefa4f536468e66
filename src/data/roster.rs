use serde::{Deserialize, Serialize};

/// One decorative entry of the sidebar roster.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RosterMember {
    pub name: String,
    pub color: String,
}

impl RosterMember {
    pub fn new(name: &str, color: &str) -> Self {
        RosterMember {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

pub fn default_roster() -> Vec<RosterMember> {
    vec![
        RosterMember::new("Ava Thompson", "#4285f4"),
        RosterMember::new("Marcus Lee", "#0f9d58"),
        RosterMember::new("Priya Natarajan", "#db4437"),
        RosterMember::new("Diego Alvarez", "#f4b400"),
        RosterMember::new("Hannah Okafor", "#ab47bc"),
        RosterMember::new("Tomás Novak", "#00acc1"),
    ]
}
