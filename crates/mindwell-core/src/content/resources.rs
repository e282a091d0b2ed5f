//! Crisis resources shown alongside a flagged check-in.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Call,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    /// Dialable number or texting instruction, as displayed.
    pub number: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: ContactKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopingStrategy {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisResources {
    pub contacts: &'static [EmergencyContact],
    pub strategies: &'static [CopingStrategy],
}

const CONTACTS: [EmergencyContact; 3] = [
    EmergencyContact {
        name: "National Suicide Prevention Lifeline",
        number: "988",
        description: "24/7 crisis support",
        kind: ContactKind::Call,
    },
    EmergencyContact {
        name: "Crisis Text Line",
        number: "Text HOME to 741741",
        description: "24/7 text-based crisis support",
        kind: ContactKind::Text,
    },
    EmergencyContact {
        name: "SAMHSA National Helpline",
        number: "1-800-662-4357",
        description: "Mental health and substance abuse support",
        kind: ContactKind::Call,
    },
];

const STRATEGIES: [CopingStrategy; 3] = [
    CopingStrategy {
        title: "5-4-3-2-1 Grounding Technique",
        description: "Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste",
    },
    CopingStrategy {
        title: "Box Breathing",
        description: "Breathe in for 4, hold for 4, out for 4, hold for 4. Repeat.",
    },
    CopingStrategy {
        title: "Safe Space Visualization",
        description: "Close your eyes and imagine a place where you feel completely safe and calm",
    },
];

pub fn crisis_resources() -> CrisisResources {
    CrisisResources {
        contacts: &CONTACTS,
        strategies: &STRATEGIES,
    }
}
