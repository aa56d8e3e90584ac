// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filter::FilterArgs;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::eyre};
use rota::{Assignee, Command, ShiftEdit, WorkerEdit};
use rota_domain::{
    Address, Day, Index, Name, Pay, Phone, Role, RoleRequirement, Slot, Time, Worker,
};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Rota - weekly shift scheduling for small teams
#[derive(Debug, Parser)]
#[command(
    name = "rota",
    author,
    version,
    about,
    long_about = None,
    styles = clap_cargo::style::CLAP_STYLING
)]
pub struct Args {
    /// Path to the JSON data file
    #[arg(
        long,
        env = "ROTA_DATA",
        default_value = "data/rota.json",
        global = true
    )]
    pub data: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    pub command: Cmd,
}

impl Args {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// What a parsed invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print a listing; the store is not written.
    List(Listing),
    /// Apply a command and save the result.
    Apply(Command),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    Roles,
    Workers,
    Shifts,
    Assignments,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Cmd {
    /// Add, rename or delete roles
    #[command(subcommand)]
    Role(RoleCmd),

    /// Add, edit or delete shifts
    #[command(subcommand)]
    Shift(ShiftCmd),

    /// Add, edit or delete workers and their availability
    #[command(subcommand)]
    Worker(WorkerCmd),

    /// Assign workers to a shift, e.g. `assign 1 2:Cashier 3:Cook`
    #[command(visible_alias = "a")]
    Assign {
        /// Shift index
        shift: Index,
        /// `WORKER:ROLE` pairs
        #[arg(required = true, value_parser = parse_assignee)]
        assignees: Vec<Assignee>,
    },

    /// Remove workers from a shift
    Unassign {
        /// Shift index
        shift: Index,
        /// Worker indices
        #[arg(required = true)]
        workers: Vec<Index>,
    },

    /// Move an assignment to another worker, shift or role
    Reassign {
        /// Currently assigned shift index
        old_shift: Index,
        /// Currently assigned worker index
        old_worker: Index,
        /// New shift index
        new_shift: Index,
        /// New worker index
        new_worker: Index,
        /// Role for the new assignment
        role: Role,
    },

    /// Take or cancel leave
    #[command(subcommand)]
    Leave(LeaveCmd),

    /// List roles, workers, shifts or assignments
    #[command(visible_alias = "ls")]
    List {
        #[arg(value_enum)]
        what: Listing,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum RoleCmd {
    /// Add a role
    Add { role: Role },
    /// Rename a role everywhere it is used
    Edit { index: Index, role: Role },
    /// Delete a role and every assignment filling it
    Delete { index: Index },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ShiftCmd {
    /// Add a shift, e.g. `shift add mon am Cashier=2 Cook`
    Add {
        day: Day,
        time: Time,
        /// `ROLE[=QUANTITY]` requirements
        requirements: Vec<RoleRequirement>,
    },
    /// Edit a shift, dropping assignments that no longer fit
    Edit {
        index: Index,
        #[arg(long)]
        day: Option<Day>,
        #[arg(long)]
        time: Option<Time>,
        /// Replace the requirements with these `ROLE[=QUANTITY]` entries
        #[arg(long = "require", value_name = "REQUIREMENT")]
        requirements: Vec<RoleRequirement>,
        /// Remove every requirement
        #[arg(long, conflicts_with = "requirements")]
        clear_requirements: bool,
    },
    /// Delete a shift and its assignments
    Delete { index: Index },
}

#[derive(Debug, Clone, Subcommand)]
pub enum WorkerCmd {
    /// Add a worker
    Add {
        #[arg(long)]
        name: Name,
        #[arg(long)]
        phone: Phone,
        #[arg(long)]
        pay: Pay,
        #[arg(long)]
        address: Address,
        #[arg(long = "role")]
        roles: Vec<Role>,
        /// Slots the worker cannot work, e.g. `mon:am`
        #[arg(long = "unavailable", value_name = "SLOT")]
        unavailabilities: Vec<Slot>,
    },
    /// Edit a worker, dropping assignments that no longer fit
    Edit {
        index: Index,
        #[arg(long)]
        name: Option<Name>,
        #[arg(long)]
        phone: Option<Phone>,
        #[arg(long)]
        pay: Option<Pay>,
        #[arg(long)]
        address: Option<Address>,
        /// Replace the worker's roles
        #[arg(long = "role")]
        roles: Vec<Role>,
        /// Remove every role
        #[arg(long, conflicts_with = "roles")]
        clear_roles: bool,
        /// Replace the worker's unavailable slots
        #[arg(long = "unavailable", value_name = "SLOT")]
        unavailabilities: Vec<Slot>,
        /// Remove every unavailable slot
        #[arg(long, conflicts_with = "unavailabilities")]
        clear_unavailable: bool,
    },
    /// Delete a worker and their assignments
    Delete { index: Index },
    /// Mark a worker unavailable for some slots
    Unavailable {
        index: Index,
        #[arg(required = true)]
        slots: Vec<Slot>,
    },
    /// Mark a worker available again for some slots
    Available {
        index: Index,
        #[arg(required = true)]
        slots: Vec<Slot>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum LeaveCmd {
    /// Put workers on leave for a shift
    Take {
        shift: Index,
        #[arg(required = true)]
        workers: Vec<Index>,
    },
    /// Cancel workers' leave for a shift
    Cancel {
        shift: Index,
        #[arg(required = true)]
        workers: Vec<Index>,
    },
    /// Put a worker on leave for every slot from START to END, wrapping
    /// through the week
    MassTake { worker: Index, start: Slot, end: Slot },
    /// Cancel a worker's leave for every slot from START to END
    MassCancel { worker: Index, start: Slot, end: Slot },
}

impl Cmd {
    /// Turns the parsed subcommand into an action.
    ///
    /// # Errors
    ///
    /// Returns an error for an edit that changes nothing.
    pub fn into_action(self) -> Result<Action> {
        let command: Command = match self {
            Self::List { what } => return Ok(Action::List(what)),
            Self::Role(cmd) => cmd.into_command(),
            Self::Shift(cmd) => cmd.into_command()?,
            Self::Worker(cmd) => cmd.into_command()?,
            Self::Assign { shift, assignees } => Command::Assign { shift, assignees },
            Self::Unassign { shift, workers } => Command::Unassign { shift, workers },
            Self::Reassign {
                old_shift,
                old_worker,
                new_shift,
                new_worker,
                role,
            } => Command::Reassign {
                old_worker,
                new_worker,
                old_shift,
                new_shift,
                role,
            },
            Self::Leave(cmd) => cmd.into_command(),
        };
        Ok(Action::Apply(command))
    }
}

impl RoleCmd {
    fn into_command(self) -> Command {
        match self {
            Self::Add { role } => Command::AddRole { role },
            Self::Edit { index, role } => Command::EditRole { index, role },
            Self::Delete { index } => Command::DeleteRole { index },
        }
    }
}

impl ShiftCmd {
    fn into_command(self) -> Result<Command> {
        let command: Command = match self {
            Self::Add {
                day,
                time,
                requirements,
            } => Command::AddShift {
                day,
                time,
                requirements,
            },
            Self::Edit {
                index,
                day,
                time,
                requirements,
                clear_requirements,
            } => {
                let edit: ShiftEdit = ShiftEdit {
                    day,
                    time,
                    requirements: replacement(requirements, clear_requirements),
                };
                if edit.is_empty() {
                    return Err(eyre!("At least one field to edit must be provided"));
                }
                Command::EditShift { index, edit }
            }
            Self::Delete { index } => Command::DeleteShift { index },
        };
        Ok(command)
    }
}

impl WorkerCmd {
    fn into_command(self) -> Result<Command> {
        let command: Command = match self {
            Self::Add {
                name,
                phone,
                pay,
                address,
                roles,
                unavailabilities,
            } => Command::AddWorker {
                worker: Worker::new(
                    name,
                    phone,
                    pay,
                    address,
                    roles.into_iter().collect(),
                    unavailabilities.into_iter().collect(),
                ),
            },
            Self::Edit {
                index,
                name,
                phone,
                pay,
                address,
                roles,
                clear_roles,
                unavailabilities,
                clear_unavailable,
            } => {
                let edit: WorkerEdit = WorkerEdit {
                    name,
                    phone,
                    pay,
                    address,
                    roles: replacement(roles, clear_roles).map(BTreeSet::from_iter),
                    unavailabilities: replacement(unavailabilities, clear_unavailable)
                        .map(BTreeSet::from_iter),
                };
                if edit.is_empty() {
                    return Err(eyre!("At least one field to edit must be provided"));
                }
                Command::EditWorker { index, edit }
            }
            Self::Delete { index } => Command::DeleteWorker { index },
            Self::Unavailable { index, slots } => Command::MarkUnavailable {
                worker: index,
                slots,
            },
            Self::Available { index, slots } => Command::MarkAvailable {
                worker: index,
                slots,
            },
        };
        Ok(command)
    }
}

impl LeaveCmd {
    fn into_command(self) -> Command {
        match self {
            Self::Take { shift, workers } => Command::TakeLeave { shift, workers },
            Self::Cancel { shift, workers } => Command::CancelLeave { shift, workers },
            Self::MassTake { worker, start, end } => Command::MassTakeLeave { worker, start, end },
            Self::MassCancel { worker, start, end } => {
                Command::MassCancelLeave { worker, start, end }
            }
        }
    }
}

/// `Some(values)` when values were given, `Some(empty)` when cleared, and
/// `None` to keep the current value.
fn replacement<T>(values: Vec<T>, clear: bool) -> Option<Vec<T>> {
    if clear || !values.is_empty() {
        Some(values)
    } else {
        None
    }
}

fn parse_assignee(s: &str) -> Result<Assignee, String> {
    let (worker, role) = s
        .split_once(':')
        .ok_or_else(|| format!("expected WORKER:ROLE, got '{s}'"))?;
    let worker: Index = worker.trim().parse().map_err(|e| format!("{e}"))?;
    let role: Role = role.trim().parse().map_err(|e| format!("{e}"))?;
    Ok(Assignee::new(worker, role))
}
