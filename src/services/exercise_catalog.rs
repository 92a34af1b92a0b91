use std::collections::HashMap;

use serde::Serialize;

/// Static exercise knowledge base, keyed by muscle group then exercise name.
/// Built once at startup and shared read-only across request handlers.
#[derive(Debug)]
pub struct ExerciseCatalog {
    groups: HashMap<String, Vec<(String, ExerciseProfile)>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseProfile {
    pub sets: String,
    pub reps: String,
    pub rest: String,
    pub form_cues: Vec<String>,
    pub common_mistakes: Vec<String>,
}

impl Default for ExerciseProfile {
    fn default() -> Self {
        Self {
            sets: "3".to_string(),
            reps: "8-12".to_string(),
            rest: "60s".to_string(),
            form_cues: Vec::new(),
            common_mistakes: Vec::new(),
        }
    }
}

impl ExerciseCatalog {
    /// Exercise names known for a muscle group, in catalog order. Empty for
    /// an unknown group.
    pub fn exercises(&self, muscle_group: &str) -> Vec<String> {
        self.groups
            .get(muscle_group)
            .map(|entries| entries.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default()
    }

    pub fn profile(&self, muscle_group: &str, exercise_name: &str) -> Option<&ExerciseProfile> {
        self.groups
            .get(muscle_group)?
            .iter()
            .find(|(name, _)| name == exercise_name)
            .map(|(_, profile)| profile)
    }

    pub fn builtin() -> Self {
        let mut groups = HashMap::new();

        groups.insert(
            "Chest".to_string(),
            vec![
                entry(
                    "Push-ups",
                    "3-4",
                    "8-12",
                    "60s",
                    &[
                        "Hands shoulder-width apart",
                        "Body forms straight line from head to heels",
                        "Elbows at 45° angle to body",
                        "Lower until chest nearly touches ground",
                        "Keep core engaged throughout",
                    ],
                    &[
                        "Sagging hips",
                        "Flaring elbows out too wide",
                        "Not going deep enough",
                        "Neck craning forward",
                    ],
                ),
                entry(
                    "Bench Press",
                    "4",
                    "6-10",
                    "90s",
                    &[
                        "Feet flat on floor",
                        "Shoulder blades retracted and depressed",
                        "Bar path straight over mid-chest",
                        "5-point contact: head, shoulders, glutes, feet",
                        "Controlled descent, explosive press",
                    ],
                    &[
                        "Bouncing bar off chest",
                        "Lifting glutes off bench",
                        "Bar path too high toward neck",
                        "Uneven bar press",
                    ],
                ),
                entry("Incline Press", "3", "8-12", "60s", &[], &[]),
                entry("Dumbbell Flyes", "3", "10-15", "45s", &[], &[]),
                entry("Cable Crossovers", "3", "12-15", "45s", &[], &[]),
            ],
        );

        groups.insert(
            "Back".to_string(),
            vec![
                entry(
                    "Pull-ups",
                    "3",
                    "6-10",
                    "90s",
                    &[
                        "Start from a full dead hang",
                        "Pull shoulder blades down before bending arms",
                        "Chin clears the bar without craning",
                        "Controlled descent back to full extension",
                    ],
                    &[
                        "Kipping or swinging for momentum",
                        "Half-range reps",
                        "Shrugging shoulders toward ears",
                    ],
                ),
                entry(
                    "Bent-over Rows",
                    "4",
                    "8-10",
                    "90s",
                    &[
                        "Hinge at hips, torso near parallel",
                        "Neutral spine from head to tailbone",
                        "Pull bar to lower ribs",
                        "Squeeze shoulder blades at the top",
                    ],
                    &[
                        "Rounding the lower back",
                        "Jerking the weight up with the hips",
                        "Standing too upright",
                    ],
                ),
                entry("Lat Pulldowns", "3", "10-12", "60s", &[], &[]),
                entry("Seated Cable Rows", "3", "10-12", "60s", &[], &[]),
            ],
        );

        groups.insert(
            "Legs".to_string(),
            vec![
                entry(
                    "Squats",
                    "4",
                    "6-10",
                    "120s",
                    &[
                        "Feet shoulder-width, toes slightly out",
                        "Knees track over toes",
                        "Hips descend below knee crease",
                        "Chest up, neutral spine",
                        "Drive through whole foot on the way up",
                    ],
                    &[
                        "Knees caving inward",
                        "Heels lifting off the floor",
                        "Cutting depth short",
                        "Excessive forward lean",
                    ],
                ),
                entry(
                    "Romanian Deadlifts",
                    "3",
                    "8-12",
                    "90s",
                    &[
                        "Soft knees, hinge from the hips",
                        "Bar stays close to the legs",
                        "Flat back throughout",
                        "Stop when hamstrings reach tension",
                    ],
                    &[
                        "Rounding the back",
                        "Squatting instead of hinging",
                        "Bar drifting away from the body",
                    ],
                ),
                entry("Lunges", "3", "10-12", "60s", &[], &[]),
                entry("Leg Press", "3", "10-15", "90s", &[], &[]),
            ],
        );

        Self { groups }
    }
}

fn entry(
    name: &str,
    sets: &str,
    reps: &str,
    rest: &str,
    form_cues: &[&str],
    common_mistakes: &[&str],
) -> (String, ExerciseProfile) {
    (
        name.to_string(),
        ExerciseProfile {
            sets: sets.to_string(),
            reps: reps.to_string(),
            rest: rest.to_string(),
            form_cues: form_cues.iter().map(|c| c.to_string()).collect(),
            common_mistakes: common_mistakes.iter().map(|m| m.to_string()).collect(),
        },
    )
}
