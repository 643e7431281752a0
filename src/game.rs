//! Session orchestration: placement phase, turn order and game end.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::ai::Strategist;
use crate::board::Board;
use crate::common::{Coord, EngineError, PlacementError, ShotOutcome, Side};
use crate::fleet::{self, FleetTally, PlacementBudget};
use crate::ship::{Orientation, ShipKind};
use crate::shot::{self, ShotReport};

/// Current phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placing,
    PlayerTurn,
    ComputerTurn,
    Ended,
}

/// Status notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The human placed a ship; `next` is the kind now awaited.
    ShipPlaced {
        kind: ShipKind,
        cells: Vec<Coord>,
        next: Option<ShipKind>,
    },
    /// The human fleet is complete and combat begins.
    FleetDeployed,
    PlayerShot { target: Coord, outcome: ShotOutcome },
    ComputerShot { target: Coord, outcome: ShotOutcome },
    TurnPassed(Side),
    GameOver { winner: Side },
    Restarted,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::ShipPlaced { next: Some(kind), .. } => write!(f, "Place your {}.", kind),
            GameEvent::ShipPlaced { next: None, .. } | GameEvent::FleetDeployed => {
                write!(f, "All ships placed. Fire at the enemy grid.")
            }
            GameEvent::PlayerShot { outcome, .. } => match outcome {
                ShotOutcome::Miss => write!(f, "Miss!"),
                ShotOutcome::Hit => write!(f, "Hit! Fire again."),
                ShotOutcome::Sunk(kind) => write!(f, "You sank a {}! Fire again.", kind.name()),
            },
            GameEvent::ComputerShot { outcome, .. } => match outcome {
                ShotOutcome::Miss => write!(f, "The enemy missed."),
                ShotOutcome::Hit => write!(f, "The enemy hit your ship."),
                ShotOutcome::Sunk(kind) => write!(f, "The enemy sank your {}.", kind.name()),
            },
            GameEvent::TurnPassed(Side::Human) => write!(f, "Your turn."),
            GameEvent::TurnPassed(Side::Computer) => write!(f, "Enemy's turn."),
            GameEvent::GameOver { winner: Side::Human } => write!(f, "You won!"),
            GameEvent::GameOver { winner: Side::Computer } => write!(f, "You lost!"),
            GameEvent::Restarted => write!(f, "New game. Place your {}.", ShipKind::Battleship),
        }
    }
}

/// Result of a human shot, including the computer volley it triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// The human's shot against the computer board.
    pub shot: ShotReport,
    /// Computer shots that followed a human miss, in firing order.
    pub volley: Vec<ShotReport>,
    pub events: Vec<GameEvent>,
    /// Set when either side's fleet was destroyed during this turn.
    pub winner: Option<Side>,
}

/// One human-vs-computer game.
pub struct GameSession {
    rng: SmallRng,
    phase: Phase,
    human: Board,
    computer: Board,
    strategist: Strategist,
    tally: FleetTally,
    orientation: Orientation,
    winner: Option<Side>,
    status: GameEvent,
    budget: PlacementBudget,
}

impl GameSession {
    /// Start a session whose placement and targeting draw from `rng`.
    ///
    /// The computer fleet is deployed immediately.
    pub fn new(rng: SmallRng) -> Result<Self, EngineError> {
        let mut session = GameSession {
            rng,
            phase: Phase::Placing,
            human: Board::new(Side::Human),
            computer: Board::new(Side::Computer),
            strategist: Strategist::new(),
            tally: FleetTally::full(),
            orientation: Orientation::Horizontal,
            winner: None,
            status: GameEvent::Restarted,
            budget: PlacementBudget::default(),
        };
        fleet::auto_place_fleet_within(&mut session.computer, &mut session.rng, session.budget)?;
        info!("new session, awaiting human fleet");
        Ok(session)
    }

    /// Reproducible session from a fixed seed.
    pub fn with_seed(seed: u64) -> Result<Self, EngineError> {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Session seeded from the thread-local entropy source.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Result<Self, EngineError> {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winner once the session has ended.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// The human's own board.
    pub fn human_board(&self) -> &Board {
        &self.human
    }

    /// The computer's board, as targeted by the human.
    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    /// Most recent status notification.
    pub fn status(&self) -> &GameEvent {
        &self.status
    }

    pub fn strategist(&self) -> &Strategist {
        &self.strategist
    }

    /// Kind awaiting placement, or `None` once the fleet is complete.
    pub fn current_kind(&self) -> Option<ShipKind> {
        if self.phase == Phase::Placing {
            self.tally.current()
        } else {
            None
        }
    }

    /// Ships still to be placed per kind.
    pub fn remaining_to_place(&self) -> FleetTally {
        self.tally
    }

    /// Orientation used by [`GameSession::place_current`].
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Retry limits used by later random deployments.
    pub fn set_placement_budget(&mut self, budget: PlacementBudget) {
        self.budget = budget;
    }

    pub fn toggle_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.orientation
    }

    /// Place one human ship of `kind`.
    ///
    /// Only the awaited kind is accepted. When the last ship goes down the
    /// session moves to [`Phase::PlayerTurn`].
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<Vec<GameEvent>, EngineError> {
        self.require_phase(Phase::Placing)?;
        let expected = self.tally.current().ok_or(PlacementError::FleetComplete)?;
        if kind != expected {
            return Err(PlacementError::NotAwaited { expected }.into());
        }
        let cells = fleet::place(&mut self.human, anchor, kind, orientation)?;
        self.tally.take(kind);

        let mut events = Vec::from([GameEvent::ShipPlaced {
            kind,
            cells,
            next: self.tally.current(),
        }]);
        if self.tally.is_complete() {
            events.push(self.begin_combat());
        }
        self.status = events[events.len() - 1].clone();
        Ok(events)
    }

    /// Place the awaited kind at `anchor` using the current orientation.
    pub fn place_current(&mut self, anchor: Coord) -> Result<Vec<GameEvent>, EngineError> {
        self.require_phase(Phase::Placing)?;
        let kind = self.tally.current().ok_or(PlacementError::FleetComplete)?;
        self.place_ship(kind, anchor, self.orientation)
    }

    /// Randomly deploy the whole human fleet, discarding manual placements.
    ///
    /// On `PlacementExhausted` the board and tally are left as they were.
    pub fn auto_place_human_fleet(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        self.require_phase(Phase::Placing)?;
        fleet::auto_place_fleet_within(&mut self.human, &mut self.rng, self.budget)?;
        self.tally = FleetTally::empty();
        let event = self.begin_combat();
        self.status = event.clone();
        Ok(Vec::from([event]))
    }

    /// Fire at the computer board.
    ///
    /// A hit keeps the turn. A miss hands the turn to the computer, which
    /// keeps firing until it misses or wins; its shots come back in
    /// [`TurnReport::volley`].
    pub fn shoot_at(&mut self, row: usize, col: usize) -> Result<TurnReport, EngineError> {
        self.require_phase(Phase::PlayerTurn)?;
        let shot = shot::resolve_shot(&mut self.computer, row, col)?;
        let mut events = Vec::from([GameEvent::PlayerShot {
            target: shot.target,
            outcome: shot.outcome,
        }]);
        let mut volley = Vec::new();

        if let Some(winner) = shot.winner {
            events.push(self.finish(winner));
        } else if shot.outcome == ShotOutcome::Miss {
            self.phase = Phase::ComputerTurn;
            events.push(GameEvent::TurnPassed(Side::Computer));
            volley = self.computer_turn(&mut events);
        }

        self.status = events[events.len() - 1].clone();
        Ok(TurnReport {
            shot,
            volley,
            events,
            winner: self.winner,
        })
    }

    /// Discard both boards and start over with a fresh computer fleet.
    ///
    /// On `PlacementExhausted` the boards, phase and tally are left as they
    /// were.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        let mut computer = Board::new(Side::Computer);
        fleet::auto_place_fleet_within(&mut computer, &mut self.rng, self.budget)?;
        self.computer = computer;
        self.human.reset();
        self.strategist.reset();
        self.tally = FleetTally::full();
        self.orientation = Orientation::Horizontal;
        self.winner = None;
        self.phase = Phase::Placing;
        self.status = GameEvent::Restarted;
        info!("session restarted");
        Ok(())
    }

    /// Run the computer's shots until it misses or wins.
    fn computer_turn(&mut self, events: &mut Vec<GameEvent>) -> Vec<ShotReport> {
        let mut volley = Vec::new();
        while self.phase == Phase::ComputerTurn {
            let Some((row, col)) = self.strategist.next_target(&self.human.shots(), &mut self.rng)
            else {
                debug!("computer has no open cells, yielding");
                self.pass_to_human(events);
                break;
            };
            let report = match shot::resolve_shot(&mut self.human, row, col) {
                Ok(report) => report,
                Err(err) => {
                    debug!("computer shot at {:?} rejected: {}", (row, col), err);
                    self.pass_to_human(events);
                    break;
                }
            };
            self.strategist.record(report.target, report.outcome);
            events.push(GameEvent::ComputerShot {
                target: report.target,
                outcome: report.outcome,
            });
            if let Some(winner) = report.winner {
                events.push(self.finish(winner));
            } else if report.outcome == ShotOutcome::Miss {
                self.pass_to_human(events);
            }
            volley.push(report);
        }
        volley
    }

    fn pass_to_human(&mut self, events: &mut Vec<GameEvent>) {
        self.phase = Phase::PlayerTurn;
        events.push(GameEvent::TurnPassed(Side::Human));
    }

    fn begin_combat(&mut self) -> GameEvent {
        self.phase = Phase::PlayerTurn;
        info!("human fleet deployed, combat begins");
        GameEvent::FleetDeployed
    }

    fn finish(&mut self, winner: Side) -> GameEvent {
        self.phase = Phase::Ended;
        self.winner = Some(winner);
        info!("game over, {} wins", winner);
        GameEvent::GameOver { winner }
    }

    fn require_phase(&self, expected: Phase) -> Result<(), EngineError> {
        match self.phase {
            Phase::Ended => Err(EngineError::GameOver),
            phase if phase == expected => Ok(()),
            phase => Err(EngineError::OutOfPhase(phase)),
        }
    }
}

/// Start a session, seeded when `seed` is given.
#[cfg(feature = "std")]
pub fn start_new_game(seed: Option<u64>) -> Result<GameSession, EngineError> {
    match seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::from_entropy(),
    }
}
