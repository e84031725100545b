//! Two-square vacuum world: squares A and B, each Clean or Dirty.

use std::fmt;

use rand::Rng;
use reflex_core::domain::{Action, NoOp};
use reflex_core::ports::Environment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Clean,
    Dirty,
}

/// What the agent senses: where it is and whether that square is dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VacuumPercept {
    pub location: Location,
    pub status: Status,
}

impl VacuumPercept {
    pub const ALL: [VacuumPercept; 4] = [
        VacuumPercept::new(Location::A, Status::Clean),
        VacuumPercept::new(Location::A, Status::Dirty),
        VacuumPercept::new(Location::B, Status::Clean),
        VacuumPercept::new(Location::B, Status::Dirty),
    ];

    pub const fn new(location: Location, status: Status) -> Self {
        Self { location, status }
    }
}

impl fmt::Display for VacuumPercept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.location, self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VacuumAction {
    Left,
    Right,
    Suck,
    NoOp,
}

impl From<NoOp> for VacuumAction {
    fn from(_: NoOp) -> Self {
        VacuumAction::NoOp
    }
}

impl Action for VacuumAction {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacuumWorld {
    location: Location,
    a: Status,
    b: Status,
}

impl VacuumWorld {
    pub fn new(location: Location, a: Status, b: Status) -> Self {
        Self { location, a, b }
    }

    /// Uniformly random agent location and dirt layout; `fixed_*` pin a part.
    pub fn random(
        rng: &mut impl Rng,
        fixed_location: Option<Location>,
        fixed_a: Option<Status>,
        fixed_b: Option<Status>,
    ) -> Self {
        let location = fixed_location.unwrap_or_else(|| {
            if rng.gen_bool(0.5) { Location::A } else { Location::B }
        });
        let a = fixed_a.unwrap_or_else(|| random_status(rng));
        let b = fixed_b.unwrap_or_else(|| random_status(rng));
        Self::new(location, a, b)
    }

    /// Every initial configuration: 2 agent locations x 4 dirt layouts.
    pub fn all_initial() -> Vec<VacuumWorld> {
        let statuses = [Status::Clean, Status::Dirty];
        let mut worlds = Vec::with_capacity(8);
        for location in [Location::A, Location::B] {
            for a in statuses {
                for b in statuses {
                    worlds.push(Self::new(location, a, b));
                }
            }
        }
        worlds
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn status(&self, location: Location) -> Status {
        match location {
            Location::A => self.a,
            Location::B => self.b,
        }
    }
}

fn random_status(rng: &mut impl Rng) -> Status {
    if rng.gen_bool(0.5) { Status::Dirty } else { Status::Clean }
}

impl fmt::Display for VacuumWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent@{:?} A={:?} B={:?}", self.location, self.a, self.b)
    }
}

impl Environment for VacuumWorld {
    type Percept = VacuumPercept;
    type Action = VacuumAction;

    fn percept(&self) -> VacuumPercept {
        VacuumPercept::new(self.location, self.status(self.location))
    }

    fn apply(&mut self, action: &VacuumAction) {
        match action {
            VacuumAction::Left => self.location = Location::A,
            VacuumAction::Right => self.location = Location::B,
            VacuumAction::Suck => match self.location {
                Location::A => self.a = Status::Clean,
                Location::B => self.b = Status::Clean,
            },
            VacuumAction::NoOp => {}
        }
    }

    /// One point per clean square.
    fn performance(&self) -> i64 {
        [self.a, self.b]
            .iter()
            .filter(|s| **s == Status::Clean)
            .count() as i64
    }
}
