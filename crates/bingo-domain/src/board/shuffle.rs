use rand::seq::SliceRandom;
use rand::Rng;

use crate::task::Task;

/// Return the same tasks in a new random order
pub fn randomize_tasks<R: Rng + ?Sized>(tasks: &[Task], rng: &mut R) -> Vec<Task> {
    let mut shuffled = tasks.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
