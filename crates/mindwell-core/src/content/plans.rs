//! Pre-authored wellness plans. Each one has five activities (one per category),
//! three goals and an affirmation.

use crate::shared::{ActivityCategory, WellnessActivity, WellnessPlan};
use once_cell::sync::Lazy;

use ActivityCategory::{Creative, Exercise, Mindfulness, SelfCare, Social};

type ActivitySpec = (&'static str, &'static str, &'static str, ActivityCategory);

struct PlanSpec {
    activities: [ActivitySpec; 5],
    goals: [&'static str; 3],
    affirmation: &'static str,
}

const PLAN_SPECS: [PlanSpec; 4] = [
    PlanSpec {
        activities: [
            ("Morning Mindfulness", "Start your day with 5 minutes of deep breathing and intention setting", "5 minutes", Mindfulness),
            ("Gentle Walk", "Take a peaceful walk outside, focusing on your surroundings", "15 minutes", Exercise),
            ("Gratitude Journaling", "Write down three things you're grateful for today", "10 minutes", SelfCare),
            ("Creative Expression", "Spend time on a creative activity that brings you joy", "20 minutes", Creative),
            ("Connect with Someone", "Reach out to a friend or family member for a meaningful conversation", "15 minutes", Social),
        ],
        goals: [
            "Practice mindfulness daily",
            "Maintain regular physical activity",
            "Cultivate gratitude and positive thinking",
        ],
        affirmation: "I am capable of growth, resilience, and positive change in my life.",
    },
    PlanSpec {
        activities: [
            ("Deep Breathing Exercise", "Practice 4-7-8 breathing technique to reduce stress and anxiety", "10 minutes", Mindfulness),
            ("Nature Connection", "Spend time outdoors, whether in a garden, park, or just by a window", "20 minutes", Exercise),
            ("Self-Compassion Practice", "Write yourself a kind letter or practice positive self-talk", "15 minutes", SelfCare),
            ("Art Therapy", "Draw, paint, or create something without judgment", "25 minutes", Creative),
            ("Virtual Coffee Date", "Schedule a video call with someone who makes you smile", "30 minutes", Social),
        ],
        goals: [
            "Reduce daily stress through breathing exercises",
            "Strengthen social connections",
            "Express creativity without judgment",
        ],
        affirmation: "I deserve peace, joy, and meaningful connections in my life.",
    },
    PlanSpec {
        activities: [
            ("Body Scan Meditation", "Progressive relaxation focusing on each part of your body", "12 minutes", Mindfulness),
            ("Yoga Flow", "Gentle stretching and movement to connect mind and body", "20 minutes", Exercise),
            ("Digital Detox Hour", "Take a break from screens and enjoy analog activities", "60 minutes", SelfCare),
            ("Music Therapy", "Listen to calming music or create your own sounds", "15 minutes", Creative),
            ("Community Service", "Do something kind for others, even if it's small", "30 minutes", Social),
        ],
        goals: [
            "Improve mind-body connection",
            "Reduce screen time for better mental health",
            "Find joy in helping others",
        ],
        affirmation: "I am present, grounded, and capable of making a positive difference.",
    },
    PlanSpec {
        activities: [
            ("Loving-Kindness Meditation", "Send compassionate thoughts to yourself and others", "8 minutes", Mindfulness),
            ("Dance Movement", "Move your body freely to music that makes you feel good", "15 minutes", Exercise),
            ("Comfort Ritual", "Create a soothing routine like tea time or a warm bath", "25 minutes", SelfCare),
            ("Story Writing", "Write a short story, poem, or journal entry", "20 minutes", Creative),
            ("Active Listening", "Have a meaningful conversation where you truly listen", "20 minutes", Social),
        ],
        goals: [
            "Cultivate self-compassion and empathy",
            "Express emotions through movement",
            "Strengthen communication skills",
        ],
        affirmation: "I am worthy of love, understanding, and gentle care.",
    },
];

pub(super) static FALLBACK_PLANS: Lazy<Vec<WellnessPlan>> =
    Lazy::new(|| PLAN_SPECS.iter().map(build_plan).collect());

fn build_plan(spec: &PlanSpec) -> WellnessPlan {
    WellnessPlan {
        activities: spec
            .activities
            .iter()
            .map(|(title, description, duration, category)| WellnessActivity {
                title: title.to_string(),
                description: description.to_string(),
                duration_label: duration.to_string(),
                category: *category,
            })
            .collect(),
        goals: spec.goals.iter().map(|g| g.to_string()).collect(),
        affirmation: spec.affirmation.to_string(),
    }
}
