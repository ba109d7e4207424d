// src/catalog.rs
use crate::error::ResponderError;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Wellness categories a question can be routed to. `General` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Stress,
    Sleep,
    Exercise,
    Nutrition,
    Meditation,
    Anxiety,
    Depression,
    General,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::Stress,
        Topic::Sleep,
        Topic::Exercise,
        Topic::Nutrition,
        Topic::Meditation,
        Topic::Anxiety,
        Topic::Depression,
        Topic::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Stress => "stress",
            Topic::Sleep => "sleep",
            Topic::Exercise => "exercise",
            Topic::Nutrition => "nutrition",
            Topic::Meditation => "meditation",
            Topic::Anxiety => "anxiety",
            Topic::Depression => "depression",
            Topic::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = ResponderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .iter()
            .copied()
            .find(|topic| topic.as_str() == name)
            .ok_or_else(|| ResponderError::UnknownTopic(name.to_string()))
    }
}

/// Read-only table of pre-written responses per topic.
pub struct ResponseCatalog {
    entries: HashMap<Topic, Vec<&'static str>>,
}

impl ResponseCatalog {
    fn builtin() -> Self {
        let mut entries = HashMap::new();

        entries.insert(Topic::Stress, vec![
            "Stress is a natural response, but chronic stress can impact your health. Try deep breathing exercises, meditation, or taking short breaks throughout your day. Regular physical activity and maintaining a consistent sleep schedule can also help manage stress levels.",
            "When feeling stressed, practice the 4-7-8 breathing technique: inhale for 4 seconds, hold for 7, exhale for 8. This activates your parasympathetic nervous system and helps you relax.",
            "Consider creating a stress management routine that includes mindfulness practices, regular exercise, and time for activities you enjoy. Remember, it's okay to ask for help when stress becomes overwhelming.",
        ]);

        entries.insert(Topic::Sleep, vec![
            "Quality sleep is crucial for mental and physical health. Aim for 7-9 hours per night. Create a relaxing bedtime routine, keep your bedroom cool and dark, and avoid screens 1 hour before bed.",
            "If you're having trouble sleeping, try establishing a consistent sleep schedule, avoiding caffeine after 2 PM, and creating a comfortable sleep environment. Consider relaxation techniques like progressive muscle relaxation.",
            "Good sleep hygiene includes maintaining a regular sleep schedule, creating a restful environment, and avoiding large meals, caffeine, and alcohol close to bedtime.",
        ]);

        entries.insert(Topic::Exercise, vec![
            "Regular physical activity is essential for both physical and mental health. Aim for at least 150 minutes of moderate exercise per week. Start with activities you enjoy and gradually increase intensity.",
            "Exercise releases endorphins that can improve mood and reduce stress. Even a 10-minute walk can make a difference. Find activities that fit your lifestyle and schedule.",
            "Physical activity doesn't have to be intense to be beneficial. Walking, yoga, swimming, or dancing are all great options. The key is consistency and finding something you enjoy.",
        ]);

        entries.insert(Topic::Nutrition, vec![
            "A balanced diet rich in fruits, vegetables, whole grains, and lean proteins supports both physical and mental health. Stay hydrated and try to eat regular meals throughout the day.",
            "Certain foods can impact your mood. Omega-3 fatty acids, found in fish and nuts, may help with depression. Complex carbohydrates can help stabilize blood sugar and mood.",
            "Eating regular, balanced meals helps maintain stable blood sugar levels, which can improve mood and energy. Don't skip meals, and try to include protein with each meal.",
        ]);

        entries.insert(Topic::Meditation, vec![
            "Meditation can help reduce stress, improve focus, and promote emotional well-being. Start with just 5-10 minutes daily. Focus on your breath and gently return your attention when your mind wanders.",
            "Mindfulness meditation involves paying attention to the present moment without judgment. You can practice this anywhere - while walking, eating, or doing daily activities.",
            "There are many types of meditation. Try different approaches to find what works for you. Guided meditations, available through apps and online, can be helpful for beginners.",
        ]);

        entries.insert(Topic::Anxiety, vec![
            "Anxiety is a common experience, but there are effective ways to manage it. Deep breathing, progressive muscle relaxation, and grounding techniques can help during anxious moments.",
            "When feeling anxious, try the 5-4-3-2-1 grounding technique: identify 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, and 1 you can taste.",
            "Regular exercise, adequate sleep, and limiting caffeine and alcohol can help reduce anxiety. Consider talking to a mental health professional if anxiety significantly impacts your daily life.",
        ]);

        entries.insert(Topic::Depression, vec![
            "Depression is a serious condition that affects many people. Symptoms can include persistent sadness, loss of interest in activities, changes in sleep or appetite, and difficulty concentrating.",
            "If you're experiencing symptoms of depression, it's important to reach out for help. Talk to a healthcare provider or mental health professional. Treatment options include therapy, medication, and lifestyle changes.",
            "Small steps can make a difference when dealing with depression. Try to maintain a routine, get some physical activity, stay connected with others, and practice self-care activities you enjoy.",
        ]);

        entries.insert(Topic::General, vec![
            "Taking care of your mental health is just as important as physical health. Regular self-care, maintaining social connections, and seeking help when needed are all important aspects of wellness.",
            "Everyone's wellness journey is unique. What works for one person may not work for another. Be patient with yourself and celebrate small progress.",
            "Building healthy habits takes time. Start small and be consistent. Remember that it's okay to have setbacks - they're a normal part of the process.",
            "Your mental health matters. Don't hesitate to reach out for support from friends, family, or mental health professionals when you need it.",
        ]);

        Self { entries }
    }

    /// Responses for a topic, in their fixed order.
    pub fn get(&self, topic: Topic) -> &[&'static str] {
        self.entries
            .get(&topic)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn get_by_name(&self, name: &str) -> Result<&[&'static str], ResponderError> {
        let topic = name.parse::<Topic>()?;
        Ok(self.get(topic))
    }
}

lazy_static::lazy_static! {
    pub static ref CATALOG: ResponseCatalog = ResponseCatalog::builtin();
}
