use crate::combatant::Combatant;
use crate::errors::BattleStateError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Copy)]
pub enum GameState {
    InProgress,
    Fighter1Win,
    Fighter2Win,
    Draw,
}

impl GameState {
    /// Derives the state from which fighters are still standing.
    pub fn from_standing(first_alive: bool, second_alive: bool) -> Self {
        match (first_alive, second_alive) {
            (true, true) => GameState::InProgress,
            (true, false) => GameState::Fighter1Win,
            (false, true) => GameState::Fighter2Win,
            // A half-turn only ever damages the defender, so both fighters
            // cannot go down together. Kept so the match stays total.
            (false, false) => GameState::Draw,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameState::InProgress
    }

    pub fn winner(self) -> Option<usize> {
        match self {
            GameState::Fighter1Win => Some(0),
            GameState::Fighter2Win => Some(1),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Battle Start
    BattleStarted,

    // Turn Management
    TurnStarted {
        turn_number: u32,
        attacker: usize,
        defender: usize,
    },
    TurnSkipped {
        fighter: usize,
    },

    // Attacks
    AttackEvaded {
        attacker: usize,
        defender: usize,
    },
    DamageDealt {
        attacker: usize,
        target: usize,
        damage: u32,
        max_damage: bool,
        remaining_hp: i32,
    },
    FighterStunned {
        target: usize,
    },
    FighterDefeated {
        fighter: usize,
    },

    // Status
    HealthSnapshot {
        hp: [i32; 2],
    },

    // Battle End
    BattleEnded,
    OutcomeDeclared {
        outcome: GameState,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable line using the encounter for names.
    /// Returns None for silent events that should not produce user-visible text,
    /// and for events naming a fighter the encounter does not have.
    pub fn format(&self, encounter: &Encounter) -> Option<String> {
        let name = |index: usize| encounter.fighters().get(index).map(Combatant::name);

        match self {
            BattleEvent::BattleStarted => Some("=== BATTLE BEGINS ===".to_string()),

            BattleEvent::TurnStarted {
                turn_number,
                attacker,
                defender,
            } => Some(format!(
                "Turn {}: {} attacks {}...",
                turn_number,
                name(*attacker)?,
                name(*defender)?
            )),
            BattleEvent::TurnSkipped { fighter } => {
                Some(format!("{} is stunned and loses the turn.", name(*fighter)?))
            }

            BattleEvent::AttackEvaded { defender, .. } => {
                Some(format!("{} evaded the attack.", name(*defender)?))
            }
            BattleEvent::DamageDealt {
                target,
                damage,
                max_damage,
                ..
            } => {
                let target_name = name(*target)?;
                if *max_damage {
                    Some(format!(
                        "Damage: {} to {} (max damage! {} will lose the next turn).",
                        damage, target_name, target_name
                    ))
                } else {
                    Some(format!("Damage: {} to {}.", damage, target_name))
                }
            }
            BattleEvent::FighterStunned { .. } => {
                None // Silent - the damage line already announces the stun
            }
            BattleEvent::FighterDefeated { .. } => {
                None // Silent - the final result names the loser
            }

            BattleEvent::HealthSnapshot { hp } => Some(format!(
                "HP => {}: {} | {}: {}",
                name(0)?,
                hp[0],
                name(1)?,
                hp[1]
            )),

            BattleEvent::BattleEnded => Some("=== FINAL RESULT ===".to_string()),
            BattleEvent::OutcomeDeclared { outcome } => match outcome.winner() {
                Some(winner) => Some(format!(
                    "{} wins. {} fell to 0 or below HP.",
                    name(winner)?,
                    name(1 - winner)?
                )),
                None if *outcome == GameState::Draw => {
                    Some("Tie: both fighters fell.".to_string())
                }
                None => None,
            },
        }
    }
}

/// Ordered collection of the events produced by one step of a battle.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Formatted lines for every non-silent event, in order.
    pub fn formatted_lines(&self, encounter: &Encounter) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.format(encounter))
            .collect()
    }
}

/// Two combatants locked in a duel. Index 0 always opens each round.
#[derive(Serialize, Debug, Clone)]
pub struct Encounter {
    pub(crate) fighters: [Combatant; 2],
    pub(crate) turn_number: u32,
    pub(crate) game_state: GameState,
}

impl Encounter {
    /// Both fighters must be standing when the battle starts.
    pub fn new(first: Combatant, second: Combatant) -> Result<Self, BattleStateError> {
        for fighter in [&first, &second] {
            if !fighter.is_alive() {
                return Err(BattleStateError::FighterDefeated {
                    name: fighter.name().to_string(),
                    hp: fighter.hp(),
                });
            }
        }

        Ok(Self {
            fighters: [first, second],
            turn_number: 1,
            game_state: GameState::InProgress,
        })
    }

    /// Panics if `index` is not 0 or 1.
    pub fn fighter(&self, index: usize) -> &Combatant {
        &self.fighters[index]
    }

    pub fn fighters(&self) -> &[Combatant; 2] {
        &self.fighters
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn all_standing(&self) -> bool {
        self.fighters.iter().all(Combatant::is_alive)
    }

    pub fn health_snapshot(&self) -> BattleEvent {
        BattleEvent::HealthSnapshot {
            hp: [self.fighters[0].hp(), self.fighters[1].hp()],
        }
    }

    /// Mutable access to attacker and defender at once.
    pub(crate) fn split_fighters_mut(
        &mut self,
        attacker_index: usize,
    ) -> (&mut Combatant, &mut Combatant) {
        let [first, second] = &mut self.fighters;
        if attacker_index == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }
}
