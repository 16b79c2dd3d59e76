//! Evolves Ode to Joy from random noise.
//!
//! Run with `RUST_LOG=debug` to watch the best fitness climb.

use aria_evo::prelude::*;

const TARGET: &str = "E E F G G F E D C C D E E D Dh E E F G G F E D C C D E D C Ch \
                      D D E C D F E C D F E D C D Gh E E F G G F E D C C D E D C Ch";

fn main() -> Result<(), EvolutionError> {
    env_logger::init();

    let target = notation::parse_melody(TARGET)?;
    println!("target ({} notes): {}", target.len(), target);

    let config = EvolutionConfig::builder(20)
        .end_condition(EndCondition::ExactMatch)
        .selection(SelectionStrategy::tournament(10))
        .crossover(CrossoverStrategy::two_point())
        .mutation(MutationStrategy::chromosome(0.5))
        .elitism_count(2)
        .build()?;

    let engine = Evolution::new(config, NoteMatch::new(target), NoteSource);
    let mut rng = rand::thread_rng();
    let result = engine.run(&mut rng)?;

    println!("{}", result.summary());
    for (i, melody) in result.history.iter().enumerate() {
        println!("checkpoint {}: {}", i + 1, melody);
    }
    println!("final melody: {}", result.best_genome);

    Ok(())
}
