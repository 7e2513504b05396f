//! Canned example questions offered as quick-select prompts

pub const QUICK_QUESTIONS: [&str; 3] = [
    "What should I grow in sandy soil with low rainfall?",
    "Crops for clay soil and high rainfall?",
    "Best crops for loamy soil (pH 6.5)?",
];

/// Resolve a 1-based quick-question number typed by the user ("2" -> second prompt)
pub fn quick_question(selection: &str) -> Option<&'static str> {
    let index: usize = selection.trim().parse().ok()?;
    index.checked_sub(1).and_then(|i| QUICK_QUESTIONS.get(i).copied())
}
