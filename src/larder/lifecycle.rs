//! # Ingredient Lifecycle Engine
//!
//! An [`EditSession`] is opened when a stored ingredient is loaded for editing.
//! It keeps the record exactly as loaded (the *baseline*), the in-progress
//! draft, and one [`Shift`] per apply-once date adjustment:
//!
//! | transition      | trigger                          | new expiration                       |
//! |-----------------|----------------------------------|--------------------------------------|
//! | freeze          | type `fresh` → `frozen`          | reference + 6 calendar months        |
//! | ripen           | baseline `unripe`, status → `ripe` | today + min(7, days remaining / 2) |
//! | open            | opened switched on               | today + min(7, days remaining / 2)   |
//!
//! ("min(7, …)" is shorthand: more than 7 days left caps at 7, otherwise half
//! the remaining days rounded down, and nothing changes once expired.)
//!
//! Every adjustment is computed from the reference date, never from the
//! currently displayed date, so re-entering a state cannot compound it.
//! Leaving the state restores the date the shift replaced.
//!
//! ## Proposals
//!
//! The `apply_*` operations take `&self` and return a [`Transition`]: the
//! proposed draft plus an optional [`Prompt`]. Nothing changes until the
//! caller hands the transition back through [`EditSession::commit`]. A
//! [`Prompt::Confirm`] is a question for the user; answering "no" is
//! [`EditSession::cancel`], which leaves the session as it was.

use crate::dates::{add_days, add_months, days_until, format_date, parse_date, Estimate};
use crate::model::{Category, ConfectionType, Ingredient, Location, Ripeness};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Months added when a fresh item goes into the freezer.
pub const FREEZE_EXTENSION_MONTHS: u32 = 6;

/// Upper bound, in days from today, for an opened or freshly ripened item.
pub const SHORTENED_SHELF_LIFE_DAYS: i64 = 7;

/// Which date a shortening or extension is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeTo {
    /// The expiration date as loaded when the session began.
    #[default]
    Baseline,
    /// The draft's expiration date at the moment of the transition.
    Current,
}

impl fmt::Display for RelativeTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTo::Baseline => f.write_str("baseline"),
            RelativeTo::Current => f.write_str("current"),
        }
    }
}

impl FromStr for RelativeTo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "baseline" => Ok(RelativeTo::Baseline),
            "current" => Ok(RelativeTo::Current),
            other => Err(format!("expected 'baseline' or 'current', got '{}'", other)),
        }
    }
}

/// Progress of one apply-once date adjustment within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shift {
    #[default]
    Untouched,
    /// The adjustment is in effect; leaving the state restores `restore_to`.
    Applied { restore_to: Option<NaiveDate> },
    Reverted,
}

impl Shift {
    pub fn is_applied(&self) -> bool {
        matches!(self, Shift::Applied { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shifts {
    pub freeze: Shift,
    pub ripen: Shift,
    pub open: Shift,
}

/// Something the user should see before or after a transition lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Informational; the transition can be committed straight away.
    Notice { title: String, message: String },
    /// Must be accepted (commit) or declined (cancel).
    Confirm { title: String, message: String },
}

impl Prompt {
    fn notice(title: &str, message: String) -> Self {
        Prompt::Notice {
            title: title.to_string(),
            message,
        }
    }

    fn confirm(title: &str, message: String) -> Self {
        Prompt::Confirm {
            title: title.to_string(),
            message,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Prompt::Notice { title, .. } | Prompt::Confirm { title, .. } => title,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Prompt::Notice { message, .. } | Prompt::Confirm { message, .. } => message,
        }
    }
}

/// A proposed next state for an [`EditSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a transition does nothing until it is committed"]
pub struct Transition {
    draft: Ingredient,
    shifts: Shifts,
    prompt: Option<Prompt>,
}

impl Transition {
    pub fn draft(&self) -> &Ingredient {
        &self.draft
    }

    pub fn shifts(&self) -> Shifts {
        self.shifts
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn needs_confirmation(&self) -> bool {
        matches!(self.prompt, Some(Prompt::Confirm { .. }))
    }
}

/// In-progress edit of one stored ingredient.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: Ingredient,
    draft: Ingredient,
    shifts: Shifts,
    now: DateTime<Utc>,
    today: NaiveDate,
    days_remaining: i64,
    relative_to: RelativeTo,
}

impl EditSession {
    pub fn begin(record: Ingredient, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let days_remaining = remaining_days(record.expiration_date, today);
        debug!(
            name = %record.name,
            days_remaining,
            "edit session started"
        );
        Self {
            draft: record.clone(),
            original: record,
            shifts: Shifts::default(),
            now,
            today,
            days_remaining,
            relative_to: RelativeTo::default(),
        }
    }

    pub fn with_relative_to(mut self, relative_to: RelativeTo) -> Self {
        self.relative_to = relative_to;
        self
    }

    /// The record as it was loaded.
    pub fn baseline(&self) -> &Ingredient {
        &self.original
    }

    pub fn original_name(&self) -> &str {
        &self.original.name
    }

    pub fn draft(&self) -> &Ingredient {
        &self.draft
    }

    pub fn shifts(&self) -> Shifts {
        self.shifts
    }

    /// Days left on the baseline expiration when the session began, never
    /// below zero.
    pub fn days_remaining(&self) -> i64 {
        self.days_remaining
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn is_modified(&self) -> bool {
        self.draft != self.original
    }

    pub fn into_draft(self) -> Ingredient {
        self.draft
    }

    pub fn commit(&mut self, transition: Transition) {
        debug!(
            name = %transition.draft.name,
            expiration = ?transition.draft.expiration_date,
            shifts = ?transition.shifts,
            "transition committed"
        );
        self.draft = transition.draft;
        self.shifts = transition.shifts;
    }

    pub fn cancel(&mut self, transition: Transition) {
        debug!(
            name = %self.draft.name,
            declined = ?transition.prompt.as_ref().map(Prompt::title),
            "transition declined"
        );
    }

    pub fn apply_type_change(&self, new_type: Option<ConfectionType>) -> Transition {
        let mut draft = self.draft.clone();
        let mut shifts = self.shifts;
        let mut prompt = None;

        if new_type != Some(ConfectionType::Fresh) {
            draft.ripeness = None;
            draft.last_checked_at = None;
        }

        let freezing = draft.confection == Some(ConfectionType::Fresh)
            && new_type == Some(ConfectionType::Frozen);

        if freezing && !shifts.freeze.is_applied() {
            let from = self.reference_expiration().unwrap_or(self.today);
            let frozen_until = add_months(from, FREEZE_EXTENSION_MONTHS);
            shifts.freeze = Shift::Applied {
                restore_to: self.reference_expiration(),
            };
            draft.expiration_date = Some(frozen_until);
            prompt = Some(Prompt::notice(
                "Item has been frozen!",
                format!(
                    "The expiration date has been updated to: {}",
                    format_date(frozen_until)
                ),
            ));
        } else if new_type != Some(ConfectionType::Frozen) {
            if let Shift::Applied { restore_to } = shifts.freeze {
                draft.expiration_date = restore_to;
                shifts.freeze = Shift::Reverted;
            }
        }

        draft.confection = new_type;
        Transition {
            draft,
            shifts,
            prompt,
        }
    }

    /// Only meaningful for fresh items; on anything else the draft is
    /// returned unchanged.
    pub fn apply_ripeness_change(&self, new_status: Option<Ripeness>) -> Transition {
        if !self.draft.is_fresh() {
            debug!(name = %self.draft.name, "ripeness ignored for non-fresh item");
            return self.unchanged();
        }

        let mut draft = self.draft.clone();
        let mut shifts = self.shifts;
        let mut prompt = None;

        draft.ripeness = new_status;
        draft.last_checked_at = Some(self.now);

        let ripening = self.original.ripeness == Some(Ripeness::Unripe)
            && new_status == Some(Ripeness::Ripe);

        if ripening && !shifts.ripen.is_applied() {
            shifts.ripen = Shift::Applied {
                restore_to: self.reference_expiration(),
            };
            if let Some(shortened) = self.shortened_expiration() {
                draft.expiration_date = Some(shortened);
            }
            prompt = Some(Prompt::notice(
                "Ripeness updated",
                format!(
                    "The expiration date has been adjusted to: {}",
                    describe(draft.expiration_date)
                ),
            ));
        } else if new_status != Some(Ripeness::Ripe) {
            if let Shift::Applied { restore_to } = shifts.ripen {
                draft.expiration_date = restore_to;
                shifts.ripen = Shift::Reverted;
            }
        }

        Transition {
            draft,
            shifts,
            prompt,
        }
    }

    pub fn apply_opened_change(&self, opened: bool) -> Transition {
        if opened == self.draft.is_opened {
            return self.unchanged();
        }

        let mut draft = self.draft.clone();
        let mut shifts = self.shifts;
        let mut prompt = None;
        draft.is_opened = opened;

        if opened {
            shifts.open = Shift::Applied {
                restore_to: self.reference_expiration(),
            };
            if let Some(shortened) = self.shortened_expiration() {
                draft.expiration_date = Some(shortened);
                prompt = Some(Prompt::confirm(
                    "Item has been opened!",
                    format!(
                        "The expiration date has been adjusted to: {}.\nWould you like to proceed?",
                        format_date(shortened)
                    ),
                ));
            }
        } else {
            draft.expiration_date = match shifts.open {
                Shift::Applied { restore_to } => restore_to,
                Shift::Untouched | Shift::Reverted => self.reference_expiration(),
            };
            shifts.open = Shift::Reverted;
        }

        Transition {
            draft,
            shifts,
            prompt,
        }
    }

    /// Marks the ripeness as checked now, pending confirmation.
    pub fn apply_manual_check(&self) -> Transition {
        if !self.draft.is_fresh() {
            return self.unchanged();
        }

        let mut draft = self.draft.clone();
        draft.last_checked_at = Some(self.now);
        Transition {
            draft,
            shifts: self.shifts,
            prompt: Some(Prompt::confirm(
                "Ripeness checked",
                "You have checked the ripeness. Last checked time has been updated.\nWould you like to proceed?"
                    .to_string(),
            )),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_brand(&mut self, brand: Option<String>) {
        self.draft.brand = brand.filter(|b| !b.trim().is_empty());
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.draft.category = category;
    }

    pub fn set_location(&mut self, location: Option<Location>) {
        self.draft.location = location;
    }

    pub fn set_expiration(&mut self, date: Option<NaiveDate>) {
        self.draft.expiration_date = date;
    }

    pub fn set_estimate(&mut self, estimate: Estimate) {
        self.draft.expiration_date = Some(estimate.resolve(self.today));
    }

    /// Free-text date entry. Invalid input keeps the current date and
    /// returns `false`.
    pub fn set_expiration_text(&mut self, input: &str) -> bool {
        match parse_date(input) {
            Some(date) => {
                self.draft.expiration_date = Some(date);
                true
            }
            None => {
                debug!(input, "ignoring unparsable expiration date");
                false
            }
        }
    }

    fn unchanged(&self) -> Transition {
        Transition {
            draft: self.draft.clone(),
            shifts: self.shifts,
            prompt: None,
        }
    }

    fn reference_expiration(&self) -> Option<NaiveDate> {
        match self.relative_to {
            RelativeTo::Baseline => self.original.expiration_date,
            RelativeTo::Current => self.draft.expiration_date,
        }
    }

    fn reference_days_remaining(&self) -> i64 {
        match self.relative_to {
            RelativeTo::Baseline => self.days_remaining,
            RelativeTo::Current => remaining_days(self.draft.expiration_date, self.today),
        }
    }

    /// Shortened shelf life for an opened or ripened item, or `None` when the
    /// reference date has already passed.
    fn shortened_expiration(&self) -> Option<NaiveDate> {
        let days = self.reference_days_remaining();
        if days > SHORTENED_SHELF_LIFE_DAYS {
            Some(add_days(self.today, SHORTENED_SHELF_LIFE_DAYS))
        } else if days > 0 {
            Some(add_days(self.today, days / 2))
        } else {
            None
        }
    }
}

fn remaining_days(expiration: Option<NaiveDate>, today: NaiveDate) -> i64 {
    expiration
        .map(|date| days_until(date, today).max(0))
        .unwrap_or(0)
}

fn describe(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()
    }

    fn fresh(expires: NaiveDate) -> Ingredient {
        Ingredient::new("Banana")
            .with_category(Category::Fruit)
            .with_confection(ConfectionType::Fresh)
            .with_expiration(expires)
    }

    fn commit(session: &mut EditSession, transition: Transition) {
        session.commit(transition);
    }

    #[test]
    fn freezing_extends_by_six_calendar_months() {
        let mut session = EditSession::begin(fresh(date(2024, 1, 1)), now());

        let t = session.apply_type_change(Some(ConfectionType::Frozen));
        assert_eq!(t.draft().expiration_date, Some(date(2024, 7, 1)));
        assert!(matches!(t.prompt(), Some(Prompt::Notice { .. })));
        assert!(t.prompt().unwrap().message().contains("2024-07-01"));
        commit(&mut session, t);

        assert!(session.shifts().freeze.is_applied());
        assert_eq!(session.draft().confection, Some(ConfectionType::Frozen));
    }

    #[test]
    fn freezing_twice_does_not_extend_again() {
        let mut session = EditSession::begin(fresh(date(2024, 1, 1)), now());
        let t = session.apply_type_change(Some(ConfectionType::Frozen));
        commit(&mut session, t);

        let again = session.apply_type_change(Some(ConfectionType::Frozen));
        assert_eq!(again.draft(), session.draft());
        assert_eq!(again.prompt(), None);
        commit(&mut session, again);
        assert_eq!(session.draft().expiration_date, Some(date(2024, 7, 1)));
    }

    #[test]
    fn unfreezing_restores_baseline_exactly() {
        let baseline = date(2024, 1, 20);
        let mut session = EditSession::begin(fresh(baseline), now());
        let t = session.apply_type_change(Some(ConfectionType::Frozen));
        commit(&mut session, t);

        let t = session.apply_type_change(Some(ConfectionType::Canned));
        assert_eq!(t.draft().expiration_date, Some(baseline));
        commit(&mut session, t);
        assert_eq!(session.shifts().freeze, Shift::Reverted);
    }

    #[test]
    fn refreezing_after_revert_does_not_compound() {
        let mut session = EditSession::begin(fresh(date(2024, 1, 1)), now());
        for next in [
            ConfectionType::Frozen,
            ConfectionType::Fresh,
            ConfectionType::Frozen,
        ] {
            let t = session.apply_type_change(Some(next));
            commit(&mut session, t);
        }
        assert_eq!(session.draft().expiration_date, Some(date(2024, 7, 1)));
    }

    #[test]
    fn only_fresh_items_get_the_freeze_extension() {
        let canned = Ingredient::new("Beans")
            .with_confection(ConfectionType::Canned)
            .with_expiration(date(2025, 1, 1));
        let session = EditSession::begin(canned, now());

        let t = session.apply_type_change(Some(ConfectionType::Frozen));
        assert_eq!(t.draft().expiration_date, Some(date(2025, 1, 1)));
        assert_eq!(t.prompt(), None);
    }

    #[test]
    fn freezing_without_a_date_counts_from_today() {
        let mut record = fresh(date(2024, 1, 1));
        record.expiration_date = None;
        let mut session = EditSession::begin(record, now());

        let t = session.apply_type_change(Some(ConfectionType::Frozen));
        assert_eq!(t.draft().expiration_date, Some(date(2024, 7, 1)));
        commit(&mut session, t);

        let t = session.apply_type_change(Some(ConfectionType::Fresh));
        assert_eq!(t.draft().expiration_date, None);
    }

    #[test]
    fn leaving_fresh_clears_ripeness_and_check() {
        let mut record = fresh(date(2024, 1, 10)).with_ripeness(Ripeness::Ripe);
        record.last_checked_at = Some(now());
        let session = EditSession::begin(record, now());

        let t = session.apply_type_change(Some(ConfectionType::Canned));
        assert_eq!(t.draft().ripeness, None);
        assert_eq!(t.draft().last_checked_at, None);
        assert_eq!(t.draft().confection, Some(ConfectionType::Canned));
    }

    #[test]
    fn same_type_change_is_a_no_op() {
        let mut record = fresh(date(2024, 1, 10)).with_ripeness(Ripeness::Ripe);
        record.last_checked_at = Some(now());
        for record in [
            record,
            Ingredient::new("Peas")
                .with_confection(ConfectionType::Frozen)
                .with_expiration(date(2024, 5, 1)),
            Ingredient::new("Tuna").with_confection(ConfectionType::Canned),
        ] {
            let session = EditSession::begin(record.clone(), now());
            let t = session.apply_type_change(record.confection);
            assert_eq!(t.draft(), &record);
            assert_eq!(t.shifts(), Shifts::default());
            assert_eq!(t.prompt(), None);
        }
    }

    #[test]
    fn opening_caps_at_a_week() {
        let session = EditSession::begin(fresh(date(2024, 1, 11)), now());
        assert_eq!(session.days_remaining(), 10);

        let t = session.apply_opened_change(true);
        assert_eq!(t.draft().expiration_date, Some(date(2024, 1, 8)));
        assert!(t.draft().is_opened);
        assert!(t.needs_confirmation());
    }

    #[test]
    fn opening_halves_a_short_shelf_life() {
        let session = EditSession::begin(fresh(date(2024, 1, 5)), now());
        assert_eq!(session.days_remaining(), 4);

        let t = session.apply_opened_change(true);
        assert_eq!(t.draft().expiration_date, Some(date(2024, 1, 3)));
        assert!(t.needs_confirmation());
    }

    #[test]
    fn opening_an_expired_item_is_silent() {
        let session = EditSession::begin(fresh(date(2024, 1, 1)), now());
        assert_eq!(session.days_remaining(), 0);

        let t = session.apply_opened_change(true);
        assert!(t.draft().is_opened);
        assert_eq!(t.draft().expiration_date, Some(date(2024, 1, 1)));
        assert_eq!(t.prompt(), None);
    }

    #[test]
    fn days_remaining_never_goes_negative() {
        let session = EditSession::begin(fresh(date(2023, 12, 20)), now());
        assert_eq!(session.days_remaining(), 0);
    }

    #[test]
    fn declining_the_open_confirmation_keeps_it_closed() {
        let mut session = EditSession::begin(fresh(date(2024, 1, 11)), now());
        let t = session.apply_opened_change(true);
        session.cancel(t);

        assert!(!session.draft().is_opened);
        assert_eq!(session.draft().expiration_date, Some(date(2024, 1, 11)));
        assert_eq!(session.shifts().open, Shift::Untouched);
    }

    #[test]
    fn closing_restores_the_baseline() {
        let mut session = EditSession::begin(fresh(date(2024, 1, 11)), now());
        let t = session.apply_opened_change(true);
        commit(&mut session, t);

        let t = session.apply_opened_change(false);
        assert!(!t.draft().is_opened);
        assert_eq!(t.draft().expiration_date, Some(date(2024, 1, 11)));
        commit(&mut session, t);
        assert_eq!(session.shifts().open, Shift::Reverted);
    }

    #[test]
    fn reopening_uses_the_same_reference() {
        let mut session = EditSession::begin(fresh(date(2024, 1, 11)), now());
        for opened in [true, false, true] {
            let t = session.apply_opened_change(opened);
            commit(&mut session, t);
        }
        assert_eq!(session.draft().expiration_date, Some(date(2024, 1, 8)));
    }

    #[test]
    fn ripening_caps_at_a_week() {
        let record = fresh(date(2024, 1, 21)).with_ripeness(Ripeness::Unripe);
        let session = EditSession::begin(record, now());
        assert_eq!(session.days_remaining(), 20);

        let t = session.apply_ripeness_change(Some(Ripeness::Ripe));
        assert_eq!(t.draft().expiration_date, Some(date(2024, 1, 8)));
        assert_eq!(t.draft().ripeness, Some(Ripeness::Ripe));
        assert_eq!(t.draft().last_checked_at, Some(now()));
        assert!(matches!(t.prompt(), Some(Prompt::Notice { .. })));
    }

    #[test]
    fn ripening_halves_a_short_shelf_life() {
        let record = fresh(date(2024, 1, 6)).with_ripeness(Ripeness::Unripe);
        let session = EditSession::begin(record, now());

        let t = session.apply_ripeness_change(Some(Ripeness::Ripe));
        assert_eq!(t.draft().expiration_date, Some(date(2024, 1, 3)));
    }

    #[test]
    fn ripening_applies_once_and_reverses() {
        let baseline = date(2024, 1, 21);
        let record = fresh(baseline).with_ripeness(Ripeness::Unripe);
        let mut session = EditSession::begin(record, now());

        let t = session.apply_ripeness_change(Some(Ripeness::Ripe));
        commit(&mut session, t);
        let again = session.apply_ripeness_change(Some(Ripeness::Ripe));
        assert_eq!(again.prompt(), None);
        assert_eq!(again.draft().expiration_date, Some(date(2024, 1, 8)));

        let t = session.apply_ripeness_change(Some(Ripeness::Overripe));
        assert_eq!(t.draft().expiration_date, Some(baseline));
        commit(&mut session, t);
        assert_eq!(session.shifts().ripen, Shift::Reverted);
    }

    #[test]
    fn ripening_only_counts_from_an_unripe_baseline() {
        let record = fresh(date(2024, 1, 21)).with_ripeness(Ripeness::Overripe);
        let session = EditSession::begin(record, now());

        let t = session.apply_ripeness_change(Some(Ripeness::Ripe));
        assert_eq!(t.draft().expiration_date, Some(date(2024, 1, 21)));
        assert_eq!(t.prompt(), None);
        assert_eq!(t.draft().last_checked_at, Some(now()));
    }

    #[test]
    fn ripeness_is_ignored_for_non_fresh_items() {
        let record = Ingredient::new("Corn").with_confection(ConfectionType::Canned);
        let session = EditSession::begin(record.clone(), now());

        let t = session.apply_ripeness_change(Some(Ripeness::Ripe));
        assert_eq!(t.draft(), &record);
    }

    #[test]
    fn opening_after_ripening_counts_from_the_baseline_by_default() {
        let record = fresh(date(2024, 1, 21)).with_ripeness(Ripeness::Unripe);
        let mut session = EditSession::begin(record, now());
        let t = session.apply_ripeness_change(Some(Ripeness::Ripe));
        commit(&mut session, t);

        let t = session.apply_opened_change(true);
        assert_eq!(t.draft().expiration_date, Some(date(2024, 1, 8)));
    }

    #[test]
    fn opening_after_ripening_can_count_from_the_current_date() {
        let record = fresh(date(2024, 1, 21)).with_ripeness(Ripeness::Unripe);
        let mut session =
            EditSession::begin(record, now()).with_relative_to(RelativeTo::Current);
        let t = session.apply_ripeness_change(Some(Ripeness::Ripe));
        commit(&mut session, t);
        assert_eq!(session.draft().expiration_date, Some(date(2024, 1, 8)));

        let t = session.apply_opened_change(true);
        assert_eq!(t.draft().expiration_date, Some(date(2024, 1, 4)));
        commit(&mut session, t);

        let t = session.apply_opened_change(false);
        assert_eq!(t.draft().expiration_date, Some(date(2024, 1, 8)));
    }

    #[test]
    fn manual_check_waits_for_confirmation() {
        let record = fresh(date(2024, 1, 21)).with_ripeness(Ripeness::Ripe);
        let mut session = EditSession::begin(record, now());

        let t = session.apply_manual_check();
        assert!(t.needs_confirmation());
        session.cancel(t);
        assert_eq!(session.draft().last_checked_at, None);

        let t = session.apply_manual_check();
        commit(&mut session, t);
        assert_eq!(session.draft().last_checked_at, Some(now()));
    }

    #[test]
    fn invalid_date_text_keeps_the_prior_date() {
        let mut session = EditSession::begin(fresh(date(2024, 1, 21)), now());

        assert!(!session.set_expiration_text("31/01/2024"));
        assert_eq!(session.draft().expiration_date, Some(date(2024, 1, 21)));

        assert!(session.set_expiration_text("2024-02-01"));
        assert_eq!(session.draft().expiration_date, Some(date(2024, 2, 1)));
    }

    #[test]
    fn estimates_resolve_from_session_day() {
        let mut session = EditSession::begin(fresh(date(2024, 1, 21)), now());
        session.set_estimate(Estimate::TenDays);
        assert_eq!(session.draft().expiration_date, Some(date(2024, 1, 11)));
        assert!(session.is_modified());
    }
}
