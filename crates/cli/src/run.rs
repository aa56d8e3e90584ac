// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::args::{Action, Args};
use crate::listing::render;
use color_eyre::Result;
use rota::{Store, Transition, View, apply};
use rota_persistence::JsonStorage;
use tracing::debug;

/// Loads the store, performs the requested action and saves the result if
/// anything changed. Returns the text to show the user.
///
/// # Errors
///
/// Returns an error if the data file cannot be loaded or saved, or if the
/// command is rejected. A rejected command leaves the data file untouched.
pub fn run(args: Args) -> Result<String> {
    let storage: JsonStorage = JsonStorage::new(&args.data);
    let view: View = args.filters.view();
    let action: Action = args.command.into_action()?;

    let store: Store = storage.load()?;
    debug!(?view, "Resolved listing filters");

    match action {
        Action::List(listing) => Ok(render(listing, &store, &view)),
        Action::Apply(command) => {
            let transition: Transition = apply(&store, &view, command)?;
            storage.save(&transition.new_store)?;
            Ok(format!("{}\n", transition.message))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use clap::Parser;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn invoke(data: &Path, argv: &[&str]) -> Result<String> {
        let data: String = data.display().to_string();
        let argv: Vec<&str> = ["rota", "--data", data.as_str()]
            .into_iter()
            .chain(argv.iter().copied())
            .collect();
        run(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_commands_persist_between_runs() {
        let dir = tempdir().unwrap();
        let data: PathBuf = dir.path().join("rota.json");

        invoke(&data, &["role", "add", "Cashier"]).unwrap();
        invoke(
            &data,
            &[
                "worker", "add", "--name", "Alice", "--phone", "98765432", "--pay", "15.50",
                "--address", "1 Main Street", "--role", "Cashier",
            ],
        )
        .unwrap();
        invoke(&data, &["shift", "add", "mon", "am", "Cashier=1"]).unwrap();
        let out: String = invoke(&data, &["assign", "1", "1:Cashier"]).unwrap();

        assert!(out.contains("MON AM | Alice | Cashier"));
        assert_eq!(
            invoke(&data, &["list", "shifts"]).unwrap(),
            "1. MON AM; Requires: Cashier 1/1\n"
        );
    }

    #[test]
    fn test_rejected_command_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let data: PathBuf = dir.path().join("rota.json");
        invoke(&data, &["role", "add", "Cashier"]).unwrap();
        let before: String = std::fs::read_to_string(&data).unwrap();

        let err = invoke(&data, &["role", "add", "cashier"]).unwrap_err();

        assert_eq!(err.to_string(), "Role 'cashier' already exists");
        assert_eq!(std::fs::read_to_string(&data).unwrap(), before);
    }

    #[test]
    fn test_listing_does_not_create_data_file() {
        let dir = tempdir().unwrap();
        let data: PathBuf = dir.path().join("rota.json");

        assert_eq!(invoke(&data, &["list", "roles"]).unwrap(), "No roles listed\n");
        assert!(!data.exists());
    }

    #[test]
    fn test_filters_apply_to_indices() {
        let dir = tempdir().unwrap();
        let data: PathBuf = dir.path().join("rota.json");
        invoke(&data, &["shift", "add", "mon", "am"]).unwrap();
        invoke(&data, &["shift", "add", "tue", "am"]).unwrap();

        invoke(&data, &["--filter-day", "tue", "shift", "delete", "1"]).unwrap();

        assert_eq!(
            invoke(&data, &["list", "shifts"]).unwrap(),
            "1. MON AM\n"
        );
    }
}
