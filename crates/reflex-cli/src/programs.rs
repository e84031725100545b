//! Vacuum-world configurations of the three strategies.

use reflex_core::app::Agent;
use reflex_core::domain::{Action, BuildError, ConditionRule, LookupTable, RuleSet};
use reflex_core::impls::{ModelBasedReflexProgram, SimpleReflexProgram, TableDrivenProgram};
use reflex_core::ports::ProgramKind;

use crate::config::{ScenarioConfig, VacuumTableEntry};
use crate::vacuum::{Location, Status, VacuumAction, VacuumPercept};

pub type VacuumAgent = Agent<VacuumPercept, VacuumAction>;

type VacuumTableProgram = TableDrivenProgram<VacuumPercept, VacuumAction>;

/// Build a fresh agent of `kind`.
///
/// The table-driven program uses the configured table rows, or a generated
/// table of depth `table_depth` when none are given. The reflex programs
/// ignore both.
pub fn build_agent(kind: ProgramKind, config: &ScenarioConfig) -> Result<VacuumAgent, BuildError> {
    let agent = match kind {
        ProgramKind::TableDriven => match &config.table {
            Some(rows) => Agent::new(table_from_rows(rows.iter().cloned())?),
            None => Agent::new(table_driven(config.table_depth)?),
        },
        ProgramKind::SimpleReflex => Agent::new(simple_reflex()?),
        ProgramKind::ModelBasedReflex => Agent::new(model_based_reflex()?),
    };
    Ok(agent)
}

fn reflex_action(percept: &VacuumPercept) -> VacuumAction {
    match (percept.status, percept.location) {
        (Status::Dirty, _) => VacuumAction::Suck,
        (Status::Clean, Location::A) => VacuumAction::Right,
        (Status::Clean, Location::B) => VacuumAction::Left,
    }
}

/// Rows for every percept sequence of length 1..=depth, each answered by
/// the reflex action for its newest percept.
pub fn generated_rows(depth: usize) -> Vec<VacuumTableEntry> {
    let mut rows = Vec::new();
    let mut frontier: Vec<Vec<VacuumPercept>> = vec![Vec::new()];
    for _ in 0..depth {
        let mut next = Vec::with_capacity(frontier.len() * VacuumPercept::ALL.len());
        for prefix in &frontier {
            for percept in VacuumPercept::ALL {
                let mut seq = prefix.clone();
                seq.push(percept);
                rows.push(VacuumTableEntry {
                    percepts: seq.clone(),
                    action: reflex_action(&percept),
                });
                next.push(seq);
            }
        }
        frontier = next;
    }
    rows
}

pub fn table_from_rows(
    rows: impl IntoIterator<Item = VacuumTableEntry>,
) -> Result<VacuumTableProgram, BuildError> {
    Ok(TableDrivenProgram::new(LookupTable::from_entries(rows)?))
}

/// Table covering every percept sequence of length 1..=depth.
pub fn table_driven(depth: usize) -> Result<VacuumTableProgram, BuildError> {
    table_from_rows(generated_rows(depth))
}

type VacuumRule<S> = ConditionRule<S, VacuumAction>;

fn identity(percept: &VacuumPercept) -> VacuumPercept {
    *percept
}

pub fn simple_reflex() -> Result<
    SimpleReflexProgram<
        VacuumPercept,
        VacuumPercept,
        VacuumAction,
        fn(&VacuumPercept) -> VacuumPercept,
    >,
    BuildError,
> {
    let rules = RuleSet::<VacuumRule<VacuumPercept>>::builder()
        .rule(ConditionRule::new(
            "dirty-here",
            |s: &VacuumPercept| s.status == Status::Dirty,
            VacuumAction::Suck,
        ))
        .rule(ConditionRule::new(
            "at-a",
            |s: &VacuumPercept| s.location == Location::A,
            VacuumAction::Right,
        ))
        .rule(ConditionRule::new(
            "at-b",
            |s: &VacuumPercept| s.location == Location::B,
            VacuumAction::Left,
        ))
        .build()?;
    Ok(SimpleReflexProgram::new(
        identity as fn(&VacuumPercept) -> VacuumPercept,
        rules,
    ))
}

/// What the model-based agent believes about the world.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldModel {
    pub location: Option<Location>,
    pub a: Option<Status>,
    pub b: Option<Status>,
}

impl WorldModel {
    fn square(&mut self, location: Location) -> &mut Option<Status> {
        match location {
            Location::A => &mut self.a,
            Location::B => &mut self.b,
        }
    }

    pub fn status_here(&self) -> Option<Status> {
        match self.location? {
            Location::A => self.a,
            Location::B => self.b,
        }
    }

    pub fn all_clean(&self) -> bool {
        self.a == Some(Status::Clean) && self.b == Some(Status::Clean)
    }
}

/// Fold the previous action and the new percept into the belief.
pub fn update_world_model(
    state: &WorldModel,
    last_action: &VacuumAction,
    percept: &VacuumPercept,
) -> WorldModel {
    let mut next = state.clone();
    if let (VacuumAction::Suck, Some(sucked)) = (last_action, state.location) {
        *next.square(sucked) = Some(Status::Clean);
    }
    next.location = Some(percept.location);
    *next.square(percept.location) = Some(percept.status);
    next
}

type WorldModelFn = fn(&WorldModel, &VacuumAction, &VacuumPercept) -> WorldModel;

pub fn model_based_reflex() -> Result<
    ModelBasedReflexProgram<VacuumPercept, WorldModel, VacuumAction, WorldModelFn>,
    BuildError,
> {
    let rules = RuleSet::<VacuumRule<WorldModel>>::builder()
        .rule(ConditionRule::new(
            "dirty-here",
            |m: &WorldModel| m.status_here() == Some(Status::Dirty),
            VacuumAction::Suck,
        ))
        .rule(ConditionRule::new(
            "all-clean",
            WorldModel::all_clean,
            VacuumAction::no_op(),
        ))
        .rule(ConditionRule::new(
            "at-a",
            |m: &WorldModel| m.location == Some(Location::A),
            VacuumAction::Right,
        ))
        .rule(ConditionRule::new(
            "at-b",
            |m: &WorldModel| m.location == Some(Location::B),
            VacuumAction::Left,
        ))
        .build()?;
    Ok(ModelBasedReflexProgram::new(
        WorldModel::default(),
        update_world_model as WorldModelFn,
        rules,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflex_core::domain::{AgentError, BuildError};
    use reflex_core::ports::AgentProgram;
    use rstest::rstest;

    const A_DIRTY: VacuumPercept = VacuumPercept::new(Location::A, Status::Dirty);
    const A_CLEAN: VacuumPercept = VacuumPercept::new(Location::A, Status::Clean);
    const B_DIRTY: VacuumPercept = VacuumPercept::new(Location::B, Status::Dirty);
    const B_CLEAN: VacuumPercept = VacuumPercept::new(Location::B, Status::Clean);

    #[test]
    fn table_covers_every_sequence_up_to_depth() {
        let program = table_driven(3).unwrap();
        assert_eq!(program.table().len(), 4 + 16 + 64);
    }

    #[test]
    fn table_runs_out_past_its_depth() {
        let mut program = table_driven(2).unwrap();
        assert_eq!(program.execute(A_DIRTY), Ok(VacuumAction::Suck));
        assert_eq!(program.execute(A_CLEAN), Ok(VacuumAction::Right));
        assert!(matches!(
            program.execute(B_CLEAN),
            Err(AgentError::UnresolvedLookup { cycle: 3, .. })
        ));
    }

    #[rstest]
    #[case::a_dirty(A_DIRTY, VacuumAction::Suck)]
    #[case::b_dirty(B_DIRTY, VacuumAction::Suck)]
    #[case::a_clean(A_CLEAN, VacuumAction::Right)]
    #[case::b_clean(B_CLEAN, VacuumAction::Left)]
    fn simple_reflex_rules(#[case] percept: VacuumPercept, #[case] expected: VacuumAction) {
        let mut program = simple_reflex().unwrap();
        assert_eq!(program.execute(percept), Ok(expected));
    }

    #[test]
    fn model_remembers_the_other_square() {
        let mut program = model_based_reflex().unwrap();
        assert_eq!(program.execute(A_DIRTY), Ok(VacuumAction::Suck));
        assert_eq!(program.execute(A_CLEAN), Ok(VacuumAction::Right));
        assert_eq!(program.execute(B_CLEAN), Ok(VacuumAction::no_op()));
        assert!(program.state().all_clean());
    }

    #[test]
    fn model_marks_sucked_square_clean_before_reading_percept() {
        let before = WorldModel {
            location: Some(Location::B),
            a: None,
            b: Some(Status::Dirty),
        };
        // Percept is from A after a Suck at B (e.g. a moving world): B is
        // believed clean from the action alone.
        let after = update_world_model(&before, &VacuumAction::Suck, &A_DIRTY);
        assert_eq!(after.b, Some(Status::Clean));
        assert_eq!(after.a, Some(Status::Dirty));
        assert_eq!(after.location, Some(Location::A));
    }

    #[rstest]
    #[case(ProgramKind::TableDriven)]
    #[case(ProgramKind::SimpleReflex)]
    #[case(ProgramKind::ModelBasedReflex)]
    fn build_agent_honours_kind(#[case] kind: ProgramKind) {
        let config = ScenarioConfig {
            table_depth: 2,
            ..ScenarioConfig::default()
        };
        let agent = build_agent(kind, &config).unwrap();
        assert_eq!(agent.kind(), kind);
    }

    #[test]
    fn configured_rows_replace_the_generated_table() {
        let config = ScenarioConfig {
            table: Some(vec![VacuumTableEntry {
                percepts: vec![A_CLEAN],
                action: VacuumAction::Left,
            }]),
            ..ScenarioConfig::default()
        };
        let mut agent = build_agent(ProgramKind::TableDriven, &config).unwrap();
        assert_eq!(agent.execute(A_CLEAN), Ok(VacuumAction::Left));
        assert!(matches!(
            agent.execute(A_CLEAN),
            Err(AgentError::UnresolvedLookup { cycle: 2, .. })
        ));
    }

    #[test]
    fn duplicate_configured_rows_are_rejected() {
        let row = VacuumTableEntry {
            percepts: vec![B_DIRTY],
            action: VacuumAction::Suck,
        };
        let config = ScenarioConfig {
            table: Some(vec![row.clone(), row]),
            ..ScenarioConfig::default()
        };
        assert!(matches!(
            build_agent(ProgramKind::TableDriven, &config),
            Err(BuildError::DuplicateEntry(_))
        ));
    }

    #[test]
    fn generated_rows_answer_with_the_newest_percept() {
        let rows = generated_rows(2);
        let row = rows
            .iter()
            .find(|row| row.percepts == vec![A_DIRTY, B_CLEAN])
            .unwrap();
        assert_eq!(row.action, VacuumAction::Left);
    }
}
