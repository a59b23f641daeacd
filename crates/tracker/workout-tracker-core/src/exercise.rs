#![allow(dead_code)]
//! Exercise identities and per-exercise set progress.

use serde::{Deserialize, Serialize};

/// The four tracked lifts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    Bench,
    Squat,
    Deadlift,
    Press,
}

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::Bench,
        Exercise::Squat,
        Exercise::Deadlift,
        Exercise::Press,
    ];

    /// Sets needed to complete this exercise.
    pub fn max_sets(self) -> u8 {
        match self {
            Exercise::Bench | Exercise::Squat => 4,
            Exercise::Deadlift | Exercise::Press => 3,
        }
    }

    /// Display name used by the stats sinks.
    pub fn label(self) -> &'static str {
        match self {
            Exercise::Bench => "Bench Press",
            Exercise::Squat => "Squats",
            Exercise::Deadlift => "Deadlift",
            Exercise::Press => "Shoulder Press",
        }
    }

    /// Dense index into per-exercise storage, in `ALL` order.
    pub fn index(self) -> usize {
        match self {
            Exercise::Bench => 0,
            Exercise::Squat => 1,
            Exercise::Deadlift => 2,
            Exercise::Press => 3,
        }
    }
}

/// Saturating per-exercise set counters, indexed in `Exercise::ALL` order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseProgress {
    sets: [u8; 4],
}

impl ExerciseProgress {
    pub fn completed(&self, exercise: Exercise) -> u8 {
        self.sets[exercise.index()]
    }

    /// Credit one set, saturating at the exercise cap. Returns the new count.
    pub fn credit(&mut self, exercise: Exercise) -> u8 {
        let slot = &mut self.sets[exercise.index()];
        *slot = (*slot + 1).min(exercise.max_sets());
        *slot
    }

    /// Total sets across all exercises.
    pub fn total(&self) -> u32 {
        self.sets.iter().map(|&n| u32::from(n)).sum()
    }

    /// The display string for one exercise, e.g. "2/4 sets completed".
    pub fn summary(&self, exercise: Exercise) -> String {
        format!(
            "{}/{} sets completed",
            self.completed(exercise),
            exercise.max_sets()
        )
    }

    pub fn reset(&mut self) {
        self.sets = [0; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// it should saturate each counter at the exercise cap
    #[test]
    fn credit_saturates() {
        let mut progress = ExerciseProgress::default();
        for _ in 0..10 {
            progress.credit(Exercise::Bench);
            progress.credit(Exercise::Deadlift);
        }
        assert_eq!(progress.completed(Exercise::Bench), 4);
        assert_eq!(progress.completed(Exercise::Deadlift), 3);
        assert_eq!(progress.completed(Exercise::Squat), 0);
        assert_eq!(progress.total(), 7);
    }

    /// it should format the per-exercise display string
    #[test]
    fn summary_string() {
        let mut progress = ExerciseProgress::default();
        assert_eq!(progress.summary(Exercise::Press), "0/3 sets completed");
        progress.credit(Exercise::Press);
        assert_eq!(progress.summary(Exercise::Press), "1/3 sets completed");
    }
}
