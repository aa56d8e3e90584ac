// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignments::{assign, reassign, unassign};
use crate::command::Command;
use crate::entities::{
    add_role, add_shift, add_worker, delete_role, delete_shift, delete_worker, edit_role,
    edit_shift, edit_worker, mark_available, mark_unavailable,
};
use crate::error::CoreError;
use crate::leave::{cancel_leave, mass_cancel_leave, mass_take_leave, take_leave};
use crate::store::{Store, Transition};
use crate::view::View;
use tracing::{debug, info};

/// Applies a command to the store, producing a new store.
///
/// This function is pure: the given store is never modified. Indices in the
/// command are resolved against `view`.
///
/// # Arguments
///
/// * `store` - The current store (immutable)
/// * `view` - The listing the command's indices refer to
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Transition)` containing the new store and a description
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - An index is beyond its listing
/// - The command violates domain rules
pub fn apply(store: &Store, view: &View, command: Command) -> Result<Transition, CoreError> {
    let name: &'static str = command.name();
    debug!(command = name, before = %store.summary(), "Applying command");

    let result: Result<Transition, CoreError> = match command {
        Command::AddRole { role } => add_role(store, role),
        Command::EditRole { index, role } => edit_role(store, view, index, role),
        Command::DeleteRole { index } => delete_role(store, view, index),
        Command::AddShift {
            day,
            time,
            requirements,
        } => add_shift(store, day, time, requirements),
        Command::EditShift { index, edit } => edit_shift(store, view, index, edit),
        Command::DeleteShift { index } => delete_shift(store, view, index),
        Command::AddWorker { worker } => add_worker(store, worker),
        Command::EditWorker { index, edit } => edit_worker(store, view, index, &edit),
        Command::DeleteWorker { index } => delete_worker(store, view, index),
        Command::MarkUnavailable { worker, slots } => {
            mark_unavailable(store, view, worker, &slots)
        }
        Command::MarkAvailable { worker, slots } => mark_available(store, view, worker, &slots),
        Command::Assign { shift, assignees } => assign(store, view, shift, &assignees),
        Command::Unassign { shift, workers } => unassign(store, view, shift, &workers),
        Command::Reassign {
            old_worker,
            new_worker,
            old_shift,
            new_shift,
            role,
        } => reassign(
            store, view, old_worker, new_worker, old_shift, new_shift, role,
        ),
        Command::TakeLeave { shift, workers } => take_leave(store, view, shift, &workers),
        Command::CancelLeave { shift, workers } => cancel_leave(store, view, shift, &workers),
        Command::MassTakeLeave { worker, start, end } => {
            mass_take_leave(store, view, worker, start, end)
        }
        Command::MassCancelLeave { worker, start, end } => {
            mass_cancel_leave(store, view, worker, start, end)
        }
    };

    match &result {
        Ok(transition) => info!(
            command = name,
            after = %transition.new_store.summary(),
            reassignments = transition.reassignments.len(),
            "Command applied"
        ),
        Err(error) => info!(command = name, %error, "Command rejected"),
    }

    result
}
