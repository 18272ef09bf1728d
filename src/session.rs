//! One duel from the console: gather starting HP, then narrate the battle.

use crate::battle::narration::{JsonNarrator, TextNarrator};
use crate::battle::pacing::Pacer;
use crate::battle::rng::BattleRng;
use crate::battle::runner::BattleRunner;
use crate::battle::state::{Encounter, GameState};
use crate::combatant::Combatant;
use crate::console::read_positive_int;
use crate::errors::{BattleResult, InputError};
use schema::Archetype;
use std::io::{BufRead, Write};

/// How the battle transcript is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line. Prompts move to stderr.
    Json,
}

/// Starting values for a duel. Missing HP is read from the console.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuelSetup {
    pub deadpool_hp: Option<i32>,
    pub wolverine_hp: Option<i32>,
    pub format: OutputFormat,
}

/// Runs one duel and returns its outcome.
///
/// Prompts share `stdout` with the play-by-play in text mode. In JSON mode
/// they go to `stderr` so every stdout line stays a JSON object.
pub fn run_duel<R, O, E, P>(
    setup: &DuelSetup,
    input: &mut R,
    mut stdout: O,
    stderr: &mut E,
    pacer: P,
    rng: &mut impl BattleRng,
) -> BattleResult<GameState>
where
    R: BufRead,
    O: Write,
    E: Write,
    P: Pacer,
{
    let (deadpool_hp, wolverine_hp) = match setup.format {
        OutputFormat::Text => starting_hps(setup, input, &mut stdout)?,
        OutputFormat::Json => starting_hps(setup, input, stderr)?,
    };

    let encounter = Encounter::new(
        Combatant::from_archetype(Archetype::Deadpool, deadpool_hp),
        Combatant::from_archetype(Archetype::Wolverine, wolverine_hp),
    )?;
    let mut runner = BattleRunner::new(encounter, pacer);

    match setup.format {
        OutputFormat::Text => runner.run(rng, &mut TextNarrator::new(stdout)),
        OutputFormat::Json => runner.run(rng, &mut JsonNarrator::new(stdout)),
    }
}

fn starting_hps<R: BufRead, W: Write>(
    setup: &DuelSetup,
    input: &mut R,
    prompts: &mut W,
) -> Result<(i32, i32), InputError> {
    let deadpool = starting_hp(setup.deadpool_hp, Archetype::Deadpool, input, prompts)?;
    let wolverine = starting_hp(setup.wolverine_hp, Archetype::Wolverine, input, prompts)?;
    Ok((deadpool, wolverine))
}

fn starting_hp<R: BufRead, W: Write>(
    given: Option<i32>,
    archetype: Archetype,
    input: &mut R,
    prompts: &mut W,
) -> Result<i32, InputError> {
    match given {
        Some(hp) => Ok(hp),
        None => read_positive_int(input, prompts, &format!("Starting HP for {}: ", archetype)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::pacing::NoPacing;
    use crate::battle::rng::TurnRng;
    use crate::console::RETRY_MESSAGE;
    use crate::errors::BattleEngineError;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::io::Cursor;

    const NEVER_EVADE: u32 = 999;

    struct DuelOutput {
        outcome: BattleResult<GameState>,
        stdout: String,
        stderr: String,
    }

    fn duel(setup: DuelSetup, typed: &str, draws: Vec<u32>) -> DuelOutput {
        let mut input = Cursor::new(typed.as_bytes().to_vec());
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut rng = TurnRng::new_for_test(draws);

        let outcome = run_duel(&setup, &mut input, &mut stdout, &mut stderr, NoPacing, &mut rng);

        DuelOutput {
            outcome,
            stdout: String::from_utf8(stdout).unwrap(),
            stderr: String::from_utf8(stderr).unwrap(),
        }
    }

    #[test]
    fn json_mode_keeps_prompts_off_stdout() {
        let setup = DuelSetup {
            format: OutputFormat::Json,
            ..DuelSetup::default()
        };

        let output = duel(setup, "oops\n50\n1\n", vec![50, NEVER_EVADE]);

        assert_eq!(output.outcome.unwrap(), GameState::Fighter1Win);
        for line in output.stdout.lines() {
            let parsed: Result<Value, _> = serde_json::from_str(line);
            assert!(parsed.is_ok(), "not a JSON object: {:?}", line);
        }
        assert_eq!(output.stdout.lines().count(), 9);
        assert_eq!(
            output.stderr,
            format!(
                "Starting HP for Deadpool: {}\nStarting HP for Deadpool: \
                 Starting HP for Wolverine: ",
                RETRY_MESSAGE
            )
        );
    }

    #[test]
    fn text_mode_prompts_on_stdout_before_the_transcript() {
        let output = duel(DuelSetup::default(), "50\n1\n", vec![50, NEVER_EVADE]);

        assert_eq!(output.outcome.unwrap(), GameState::Fighter1Win);
        assert!(output.stdout.starts_with(
            "Starting HP for Deadpool: Starting HP for Wolverine: === BATTLE BEGINS ===\n"
        ));
        assert!(output.stdout.ends_with("HP => Deadpool: 50 | Wolverine: -49\n"));
        assert_eq!(output.stderr, "");
    }

    #[test]
    fn given_hp_skips_the_prompt() {
        let setup = DuelSetup {
            deadpool_hp: Some(50),
            wolverine_hp: None,
            format: OutputFormat::Text,
        };

        let output = duel(setup, "1\n", vec![50, NEVER_EVADE]);

        assert_eq!(output.outcome.unwrap(), GameState::Fighter1Win);
        assert!(output
            .stdout
            .starts_with("Starting HP for Wolverine: === BATTLE BEGINS ===\n"));
    }

    #[test]
    fn exhausted_input_aborts_before_the_battle() {
        let output = duel(DuelSetup::default(), "", vec![]);

        assert!(matches!(
            output.outcome,
            Err(BattleEngineError::Input(InputError::Exhausted))
        ));
        assert!(!output.stdout.contains("BATTLE BEGINS"));
    }
}
