use stresswatch_types::StressLevel;

const BRADYCARDIA: &[&str] = &[
    "🛌 Rest and avoid sudden exertion",
    "💧 Stay hydrated",
    "🌬 Slow, steady breathing",
    "🩺 Consult a doctor if dizziness persists",
];

const HIGH: &[&str] = &[
    "🧘 Deep Breathing (4s inhale → 4s hold → 6s exhale)",
    "🎧 Listen to calm music",
    "🚶 Take a short walk",
];

const MODERATE: &[&str] = &[
    "☀ Go outside for fresh air",
    "🎯 Do a small relaxing activity",
    "📞 Talk to a friend",
];

const LOW: &[&str] = &[
    "✅ You are relaxed",
    "💧 Stay hydrated",
    "🙂 Maintain positive routine",
];

pub fn suggestions(level: StressLevel) -> &'static [&'static str] {
    match level {
        StressLevel::Bradycardia => BRADYCARDIA,
        StressLevel::High => HIGH,
        StressLevel::Moderate => MODERATE,
        StressLevel::Low => LOW,
    }
}

/// Suggestions for a raw classifier label. Unrecognized labels get the relaxed list.
pub fn suggestions_for_label(label: &str) -> &'static [&'static str] {
    let level = StressLevel::match_label(label).unwrap_or_else(|| {
        debug!("No stress keyword in label {:?}, using default suggestions", label);
        StressLevel::Low
    });
    suggestions(level)
}
