//! Target-matching fitness for melodies

use crate::fitness::traits::Fitness;
use crate::genome::melody::Melody;

/// Scores a melody by position-wise comparison against a target melody.
///
/// Each position contributes +1 if the pitch matches the target's note at that
/// position and +1 if the duration matches, so scores range over
/// `[0, 2 * target.len()]` and the target scored against itself attains the
/// maximum.
#[derive(Clone, Debug)]
pub struct NoteMatch {
    target: Melody,
}

impl NoteMatch {
    /// Create a fitness function for the given target melody
    pub fn new(target: Melody) -> Self {
        Self { target }
    }

    /// The target melody being matched
    pub fn target(&self) -> &Melody {
        &self.target
    }
}

impl Fitness for NoteMatch {
    type Genome = Melody;

    fn evaluate(&self, melody: &Melody) -> usize {
        assert_eq!(
            melody.len(),
            self.target.len(),
            "melody length must match the target"
        );

        let mut fitness = 0;
        for (note, target) in melody.notes().iter().zip(self.target.notes()) {
            if note.pitch == target.pitch {
                fitness += 1;
            }
            if note.length == target.length {
                fitness += 1;
            }
        }
        fitness
    }

    fn max_fitness(&self) -> usize {
        2 * self.target.len()
    }

    fn genome_length(&self) -> usize {
        self.target.len()
    }
}
