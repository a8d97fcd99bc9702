//! Share text for a saved daily game

use crate::catalog::Catalog;
use crate::game::{GameConfig, KeyValueStore, Session, restore, share_text};
use crate::selector::{WordSelector, date_key};
use chrono::NaiveDate;

/// Share text of the daily game saved for `date`
///
/// # Errors
///
/// Returns an error if no game was saved for that day, or the saved game
/// belongs to a different catalog.
pub fn share_saved_daily(
    catalog: &Catalog,
    config: GameConfig,
    store: &dyn KeyValueStore,
    date: NaiveDate,
) -> Result<String, String> {
    let selection = WordSelector::new(catalog).daily(date);
    let mut session = Session::new(catalog, selection, config)
        .ok_or_else(|| "Daily word is outside the catalog".to_string())?;

    if !restore(&mut session, store) {
        return Err(format!("No saved game for {}", date_key(date)));
    }
    Ok(share_text(&session))
}
