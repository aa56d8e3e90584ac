// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Listing filters given on the command line.
//!
//! The same filters apply to `list` output and to index resolution, so an
//! index always refers to the row shown by `list` with the same flags.

use rota::View;
use rota_domain::{Day, Role, Shift, Worker};

#[derive(Debug, Clone, Default, clap::Args)]
pub struct FilterArgs {
    /// Only list workers with a name word matching one of these keywords
    #[arg(long = "filter-name", value_name = "KEYWORD", global = true)]
    pub filter_names: Vec<String>,

    /// Only list workers holding this role
    #[arg(long = "filter-worker-role", value_name = "ROLE", global = true)]
    pub filter_worker_role: Option<Role>,

    /// Only list shifts on this day
    #[arg(long = "filter-day", value_name = "DAY", global = true)]
    pub filter_day: Option<Day>,

    /// Only list shifts requiring this role
    #[arg(long = "filter-shift-role", value_name = "ROLE", global = true)]
    pub filter_shift_role: Option<Role>,
}

impl FilterArgs {
    /// Builds the view these filters describe.
    #[must_use]
    pub fn view(&self) -> View {
        let mut view: View = View::all();

        if !self.filter_names.is_empty() || self.filter_worker_role.is_some() {
            let keywords: Vec<String> = self.filter_names.iter().map(|k| k.to_lowercase()).collect();
            let role: Option<Role> = self.filter_worker_role.clone();
            view = view.with_worker_filter(move |worker: &Worker| {
                name_matches(worker, &keywords) && role.as_ref().is_none_or(|r| worker.has_role(r))
            });
        }

        if self.filter_day.is_some() || self.filter_shift_role.is_some() {
            let day: Option<Day> = self.filter_day;
            let role: Option<Role> = self.filter_shift_role.clone();
            view = view.with_shift_filter(move |shift: &Shift| {
                day.is_none_or(|d| shift.day == d) && role.as_ref().is_none_or(|r| shift.requires(r))
            });
        }

        view
    }
}

/// Whole-word, case-insensitive keyword match. No keywords matches everyone.
fn name_matches(worker: &Worker, keywords: &[String]) -> bool {
    keywords.is_empty()
        || worker
            .name
            .value()
            .split_whitespace()
            .any(|word| keywords.iter().any(|k| word.eq_ignore_ascii_case(k)))
}
