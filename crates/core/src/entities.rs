// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role, shift and worker maintenance commands.

use crate::cascade::{
    CascadePlan, plan_role_delete, plan_role_rename, plan_shift_delete, plan_shift_edit,
    plan_worker_delete, plan_worker_edit,
};
use crate::command::{ShiftEdit, WorkerEdit};
use crate::error::CoreError;
use crate::store::{Store, Transition};
use crate::view::View;
use rota_domain::{
    Day, DomainError, Index, Role, RoleRequirement, Shift, Slot, Time, Worker, validate_new_role,
    validate_requirements, validate_shift_unique, validate_worker_roles, validate_worker_unique,
};

pub(crate) fn add_role(store: &Store, role: Role) -> Result<Transition, CoreError> {
    validate_new_role(&role, store.roles())?;

    let mut new_store: Store = store.clone();
    new_store.add_role(role.clone());

    Ok(Transition::new(new_store, format!("New role added: {role}")))
}

pub(crate) fn edit_role(
    store: &Store,
    view: &View,
    index: Index,
    role: Role,
) -> Result<Transition, CoreError> {
    let old: Role = view.role_at(store, index)?.clone();

    if role.is_leave() {
        return Err(CoreError::DomainViolation(DomainError::CannotModifyLeaveRole));
    }
    // A change of case only is not a collision.
    if role != old && store.has_role(&role) {
        return Err(CoreError::DomainViolation(DomainError::DuplicateRole(role)));
    }

    let plan: CascadePlan = plan_role_rename(store, &old, &role);
    let mut new_store: Store = store.clone();
    plan.detach(&mut new_store)?;
    new_store.rename_role(&old, &role);
    plan.reattach(&mut new_store)?;

    Ok(Transition::new(
        new_store,
        format!("Role edited: {old} -> {role}"),
    ))
}

pub(crate) fn delete_role(
    store: &Store,
    view: &View,
    index: Index,
) -> Result<Transition, CoreError> {
    let role: Role = view.role_at(store, index)?.clone();

    let plan: CascadePlan = plan_role_delete(store, &role);
    let removed: usize = plan.removed().len();
    let mut new_store: Store = store.clone();
    plan.detach(&mut new_store)?;
    new_store.purge_role(&role);

    Ok(Transition::new(
        new_store,
        format!("Deleted role: {role} ({removed} assignment(s) removed)"),
    ))
}

pub(crate) fn add_shift(
    store: &Store,
    day: Day,
    time: Time,
    requirements: Vec<RoleRequirement>,
) -> Result<Transition, CoreError> {
    let shift: Shift = Shift::new(day, time, unfilled(requirements));
    validate_requirements(&shift.requirements, store.roles())?;
    validate_shift_unique(&shift, store.shifts(), None)?;

    let message: String = format!("New shift added: {shift}");
    let mut new_store: Store = store.clone();
    new_store.add_shift(shift);

    Ok(Transition::new(new_store, message))
}

pub(crate) fn edit_shift(
    store: &Store,
    view: &View,
    index: Index,
    edit: ShiftEdit,
) -> Result<Transition, CoreError> {
    let old: Shift = view.shift_at(store, index)?.clone();
    let edited: Shift = Shift::new(
        edit.day.unwrap_or(old.day),
        edit.time.unwrap_or(old.time),
        edit.requirements
            .map_or_else(|| old.unfilled_requirements(), unfilled),
    );
    let new_slot: Slot = edited.slot();

    validate_requirements(&edited.requirements, store.roles())?;
    validate_shift_unique(&edited, store.shifts(), Some(old.slot()))?;

    let plan: CascadePlan = plan_shift_edit(store, &old, &edited)?;
    let removed: usize = plan.removed().len();
    let mut new_store: Store = store.clone();
    plan.detach(&mut new_store)?;
    new_store.replace_shift(old.slot(), edited)?;
    plan.reattach(&mut new_store)?;

    let shown: String = new_store
        .find_shift(new_slot)
        .map_or_else(|| new_slot.to_string(), ToString::to_string);
    let mut message: String = format!("Edited shift: {shown}");
    if removed > 0 {
        message.push_str(&format!("\n{removed} assignment(s) removed"));
    }

    Ok(Transition::new(new_store, message))
}

pub(crate) fn delete_shift(
    store: &Store,
    view: &View,
    index: Index,
) -> Result<Transition, CoreError> {
    let shift: Shift = view.shift_at(store, index)?.clone();

    let plan: CascadePlan = plan_shift_delete(store, shift.slot());
    let removed: usize = plan.removed().len();
    let mut new_store: Store = store.clone();
    plan.detach(&mut new_store)?;
    new_store.remove_shift(shift.slot());

    Ok(Transition::new(
        new_store,
        format!("Deleted shift: {shift} ({removed} assignment(s) removed)"),
    ))
}

pub(crate) fn add_worker(store: &Store, worker: Worker) -> Result<Transition, CoreError> {
    validate_worker_roles(&worker, store.roles())?;
    validate_worker_unique(&worker, store.workers(), None)?;

    let message: String = format!("New worker added: {worker}");
    let mut new_store: Store = store.clone();
    new_store.add_worker(worker);

    Ok(Transition::new(new_store, message))
}

pub(crate) fn edit_worker(
    store: &Store,
    view: &View,
    index: Index,
    edit: &WorkerEdit,
) -> Result<Transition, CoreError> {
    let old: Worker = view.worker_at(store, index)?.clone();
    let edited: Worker = edit.apply_to(&old);
    replace_worker(store, &old, edited, "Edited worker")
}

pub(crate) fn mark_unavailable(
    store: &Store,
    view: &View,
    index: Index,
    slots: &[Slot],
) -> Result<Transition, CoreError> {
    let old: Worker = view.worker_at(store, index)?.clone();
    let mut edited: Worker = old.clone();
    edited.unavailabilities.extend(slots.iter().copied());
    replace_worker(store, &old, edited, "Updated availability")
}

pub(crate) fn mark_available(
    store: &Store,
    view: &View,
    index: Index,
    slots: &[Slot],
) -> Result<Transition, CoreError> {
    let old: Worker = view.worker_at(store, index)?.clone();
    let mut edited: Worker = old.clone();
    for slot in slots {
        edited.unavailabilities.remove(slot);
    }
    replace_worker(store, &old, edited, "Updated availability")
}

pub(crate) fn delete_worker(
    store: &Store,
    view: &View,
    index: Index,
) -> Result<Transition, CoreError> {
    let worker: Worker = view.worker_at(store, index)?.clone();

    let plan: CascadePlan = plan_worker_delete(store, &worker.name);
    let removed: usize = plan.removed().len();
    let mut new_store: Store = store.clone();
    plan.detach(&mut new_store)?;
    new_store.remove_worker(&worker.name);

    Ok(Transition::new(
        new_store,
        format!(
            "Deleted worker: {} ({removed} assignment(s) removed)",
            worker.name
        ),
    ))
}

fn replace_worker(
    store: &Store,
    old: &Worker,
    edited: Worker,
    verb: &str,
) -> Result<Transition, CoreError> {
    validate_worker_roles(&edited, store.roles())?;
    validate_worker_unique(&edited, store.workers(), Some(old))?;

    let plan: CascadePlan = plan_worker_edit(store, old, &edited);
    let removed: usize = plan.removed().len();
    let mut message: String = format!("{verb}: {edited}");
    if removed > 0 {
        message.push_str(&format!("\n{removed} assignment(s) removed"));
    }

    let mut new_store: Store = store.clone();
    plan.detach(&mut new_store)?;
    new_store.replace_worker(&old.name, edited)?;
    plan.reattach(&mut new_store)?;

    Ok(Transition::new(new_store, message))
}

fn unfilled(requirements: Vec<RoleRequirement>) -> Vec<RoleRequirement> {
    requirements
        .into_iter()
        .map(|r| RoleRequirement::new(r.role, r.quantity_required))
        .collect()
}
