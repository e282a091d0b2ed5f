//! Static content library: the canned text and plans served when the backend is
//! unavailable, plus the crisis resources the client shows when a check-in is flagged.
//!
//! Everything here is immutable process-wide data; lookups have no side effects.

mod plans;
mod resources;

pub use resources::{crisis_resources, ContactKind, CopingStrategy, CrisisResources, EmergencyContact};

use crate::shared::{MoodLevel, WellnessPlan};
use rand::Rng;

/// Returned when a request cannot be processed at all (e.g. unparseable body).
pub const GENERIC_SUPPORT_MESSAGE: &str = "I'm here to support you. While I'm having technical difficulties right now, please know that your feelings matter and there are always people ready to help.";

const VERY_SAD_RESPONSE: &str = "I hear that you're going through a really difficult time right now. Your feelings are completely valid, and it's okay to not be okay. Here are some gentle strategies that might help: Try the 5-4-3-2-1 grounding technique (name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste). Consider reaching out to a trusted friend or counselor. Remember, this feeling is temporary, and you deserve support and care.";

const SAD_RESPONSE: &str = "I can sense you're feeling down today, and I want you to know that's completely understandable. Sometimes we all have difficult days. Here are some caring suggestions: Try some gentle movement like stretching or a short walk. Practice self-compassion - speak to yourself as you would a good friend. Consider doing one small thing that usually brings you comfort. You're stronger than you know, and tomorrow is a new opportunity.";

const NEUTRAL_RESPONSE: &str = "It sounds like you're in a neutral space today, which is perfectly okay. Sometimes we need these balanced moments. Here are some ways to nurture yourself: Try a brief mindfulness exercise or meditation. Set one small, achievable goal for today. Take a moment to appreciate something in your environment. Remember that every day doesn't have to be amazing - steady and calm has its own value.";

const GOOD_RESPONSE: &str = "I'm glad to hear you're feeling good today! It's wonderful when we can appreciate these positive moments. Here are ways to build on this feeling: Practice gratitude by noting what's contributing to your good mood. Share your positive energy with someone you care about. Engage in an activity that brings you joy. Remember this feeling for times when you need a reminder of your resilience.";

const GREAT_RESPONSE: &str = "It's beautiful to hear that you're feeling great today! These moments of joy and contentment are so important to celebrate. Here are ways to embrace this positive energy: Take time to really savor this feeling and what created it. Consider doing something creative or adventurous. Share your happiness with others - positive emotions are contagious! Store this memory as a reminder of your capacity for joy and growth.";

/// Fixed supportive paragraph for a mood level. Same text on every call.
pub fn mood_response(level: MoodLevel) -> &'static str {
    match level {
        MoodLevel::VerySad => VERY_SAD_RESPONSE,
        MoodLevel::Sad => SAD_RESPONSE,
        MoodLevel::Neutral => NEUTRAL_RESPONSE,
        MoodLevel::Good => GOOD_RESPONSE,
        MoodLevel::Great => GREAT_RESPONSE,
    }
}

/// The pre-authored plans the fallback chooses between.
pub fn fallback_plans() -> &'static [WellnessPlan] {
    plans::FALLBACK_PLANS.as_slice()
}

/// Source of randomness for fallback plan selection. Injected so tests can pin it.
pub trait PlanPicker: Send + Sync {
    /// Index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform selection from the thread-local RNG. Holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl PlanPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// One fallback plan chosen by `picker`.
pub fn pick_fallback_plan(picker: &dyn PlanPicker) -> WellnessPlan {
    let plans = fallback_plans();
    plans[picker.pick(plans.len()) % plans.len()].clone()
}
