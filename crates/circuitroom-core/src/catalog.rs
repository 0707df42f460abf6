//! Seed catalog: the ordered `{name, description, duration}` records loaded
//! once at startup to populate the store.
//!
//! A catalog file is TOML with repeated `[[exercise]]` tables:
//!
//! ```toml
//! [[exercise]]
//! name = "Push-ups"
//! description = "Chest to floor, push back up."
//! duration = 45
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreError, Result};
use crate::exercise::ExerciseDraft;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "exercise")]
    pub exercises: Vec<ExerciseDraft>,
}

impl Catalog {
    /// The built-in sample circuit.
    pub fn builtin() -> Self {
        let exercises = vec![
            ExerciseDraft::new(
                "Push-ups",
                "Start in a plank position with hands slightly wider than shoulder-width apart. \
                 Lower your body until your chest nearly touches the floor, then push back up.",
                45,
            ),
            ExerciseDraft::new(
                "Squats",
                "Stand with feet shoulder-width apart. Lower your hips as if sitting back into a \
                 chair, keeping your chest up and knees behind your toes. Return to standing.",
                60,
            ),
            ExerciseDraft::new(
                "Jumping Jacks",
                "Start with feet together and arms at your sides. Jump while spreading your legs \
                 shoulder-width apart and raising your arms overhead. Jump back to starting position.",
                30,
            ),
            ExerciseDraft::new(
                "Mountain Climbers",
                "Start in a plank position. Alternate bringing each knee toward your chest in a \
                 running motion while keeping your core engaged and hips level.",
                45,
            ),
            ExerciseDraft::new(
                "Burpees",
                "From standing, squat down and place hands on floor. Jump feet back into plank, \
                 do a push-up, jump feet back to squat, then jump up with arms overhead.",
                40,
            ),
            ExerciseDraft::new(
                "Plank Hold",
                "Hold a plank position with your body in a straight line from head to heels. Keep \
                 your core tight and avoid letting your hips sag or rise too high.",
                60,
            ),
            ExerciseDraft::new(
                "High Knees",
                "Run in place while lifting your knees as high as possible toward your chest. \
                 Keep your core engaged and pump your arms for momentum.",
                30,
            ),
            ExerciseDraft::new(
                "Lunges",
                "Step forward with one leg and lower your hips until both knees are bent at 90 \
                 degrees. Keep your front knee over your ankle and push back to starting position.",
                50,
            ),
        ];
        Self { exercises }
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })?;
        let catalog: Catalog = toml::from_str(&content)
            .map_err(|e| CoreError::Config(ConfigError::ParseFailed(e.to_string())))?;
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
