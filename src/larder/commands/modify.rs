//! Editing one stored ingredient.
//!
//! Editing is two-phase: [`begin`] loads the record at a display index into
//! an [`EditSession`], the caller drives field changes and lifecycle
//! transitions on it, and [`run`] writes the draft back over the record it
//! started from. A failed save leaves the session untouched so the caller can
//! retry or abandon it.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LarderError, Result};
use crate::lifecycle::{EditSession, RelativeTo};
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use tracing::info;

use super::helpers::{ingredient_by_index, summary, validate_name};

pub fn begin<S: DataStore>(
    store: &S,
    index: usize,
    now: DateTime<Utc>,
    relative_to: RelativeTo,
) -> Result<EditSession> {
    let found = ingredient_by_index(store, index)?;
    Ok(EditSession::begin(found.ingredient, now).with_relative_to(relative_to))
}

/// Replaces the first stored record named like the session's baseline.
pub fn run<S: DataStore>(store: &mut S, session: &EditSession) -> Result<CmdResult> {
    let mut updated = session.draft().clone();
    updated.name = validate_name(&updated.name)?;

    let mut ingredients = store.load_all()?;
    let slot = ingredients
        .iter()
        .position(|i| i.name == session.original_name())
        .ok_or_else(|| LarderError::IngredientNotFound(session.original_name().to_string()))?;

    ingredients[slot] = updated.clone();
    store.save_all(&ingredients)?;

    info!(
        original = %session.original_name(),
        name = %updated.name,
        "ingredient updated"
    );
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Ingredient updated ({}): {}",
        slot + 1,
        summary(&updated)
    )));
    Ok(result.with_affected(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfectionType, Ingredient, Ripeness};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap()
    }

    fn fixture() -> StoreFixture {
        StoreFixture::new(now().date_naive())
            .with_complete("Milk", 5)
            .with_unripe("Banana", 10)
    }

    #[test]
    fn saves_a_ripened_item_over_its_original() {
        let mut store = fixture().store;
        let mut session = begin(&store, 2, now(), RelativeTo::Baseline).unwrap();

        let transition = session.apply_ripeness_change(Some(Ripeness::Ripe));
        session.commit(transition);
        run(&mut store, &session).unwrap();

        let saved = &store.ingredients()[1];
        assert_eq!(saved.ripeness, Some(Ripeness::Ripe));
        assert_eq!(saved.expiration_date, NaiveDate::from_ymd_opt(2024, 2, 8));
        assert_eq!(saved.last_checked_at, Some(now()));
        assert_eq!(store.ingredients()[0].name, "Milk");
    }

    #[test]
    fn renaming_replaces_rather_than_appends() {
        let mut store = fixture().store;
        let mut session = begin(&store, 1, now(), RelativeTo::Baseline).unwrap();
        session.set_name("Oat Milk");

        run(&mut store, &session).unwrap();
        let names: Vec<_> = store.ingredients().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Oat Milk", "Banana"]);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut store = fixture().store;
        let mut session = begin(&store, 1, now(), RelativeTo::Baseline).unwrap();
        session.set_name("  ");

        let err = run(&mut store, &session).unwrap_err();
        assert!(matches!(err, LarderError::Validation(_)));
        assert_eq!(store.ingredients()[0].name, "Milk");
    }

    #[test]
    fn vanished_record_is_not_found() {
        let store = fixture().store;
        let session = begin(&store, 1, now(), RelativeTo::Baseline).unwrap();

        let mut emptied = InMemoryStore::new();
        let err = run(&mut emptied, &session).unwrap_err();
        assert!(matches!(err, LarderError::IngredientNotFound(name) if name == "Milk"));
    }

    #[test]
    fn failed_save_keeps_session_and_store() {
        let mut store = fixture().store;
        let mut session = begin(&store, 2, now(), RelativeTo::Baseline).unwrap();
        let transition = session.apply_type_change(Some(ConfectionType::Frozen));
        session.commit(transition);
        let draft_before = session.draft().clone();

        store.fail_writes(true);
        assert!(run(&mut store, &session).is_err());
        assert_eq!(session.draft(), &draft_before);
        assert_eq!(store.ingredients()[1].confection, Some(ConfectionType::Fresh));

        store.fail_writes(false);
        run(&mut store, &session).unwrap();
        assert_eq!(
            store.ingredients()[1].expiration_date,
            NaiveDate::from_ymd_opt(2024, 8, 11)
        );
    }

    #[test]
    fn duplicate_names_update_the_first_match() {
        let mut store = InMemoryStore::with_ingredients(vec![
            Ingredient::new("Eggs"),
            Ingredient::new("Eggs"),
        ]);
        let mut session = begin(&store, 2, now(), RelativeTo::Baseline).unwrap();
        session.set_brand(Some("Farm".to_string()));

        run(&mut store, &session).unwrap();
        assert_eq!(store.ingredients()[0].brand.as_deref(), Some("Farm"));
        assert_eq!(store.ingredients()[1].brand, None);
    }

    #[test]
    fn failed_read_keeps_session_and_store() {
        let mut store = fixture().store;
        let mut session = begin(&store, 1, now(), RelativeTo::Baseline).unwrap();
        session.set_name("Oat Milk");
        let draft_before = session.draft().clone();

        store.fail_reads(true);
        let err = run(&mut store, &session).unwrap_err();
        assert!(matches!(err, LarderError::Store(_)));
        assert_eq!(session.draft(), &draft_before);
        assert_eq!(store.ingredients()[0].name, "Milk");

        store.fail_reads(false);
        run(&mut store, &session).unwrap();
        assert_eq!(store.ingredients()[0].name, "Oat Milk");
    }

    #[test]
    fn begin_surfaces_read_failure() {
        let mut store = fixture().store;
        store.fail_reads(true);
        assert!(matches!(
            begin(&store, 1, now(), RelativeTo::Baseline),
            Err(LarderError::Store(_))
        ));
    }
}
