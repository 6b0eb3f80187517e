//! Serves the recorded net worth snapshots as JSON.

use axum::{Json, extract::State};

use crate::{
    Error,
    db::Database,
    net_worth::{NetWorth, get_net_worth_history},
};

/// A route handler that responds with every snapshot as a JSON array, oldest first.
pub async fn get_net_worth_history_endpoint(
    State(database): State<Database>,
) -> Result<Json<Vec<NetWorth>>, Error> {
    let session = database.acquire_session()?;

    let history = get_net_worth_history(&session)
        .inspect_err(|error| tracing::error!("could not get net worth history: {error}"))?;

    Ok(Json(history))
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use time::macros::date;

    use crate::{db::Database, net_worth::add_net_worth_entry};

    use super::get_net_worth_history_endpoint;

    #[tokio::test]
    async fn returns_snapshots_in_date_order() {
        let database = Database::open_in_memory().unwrap();
        {
            let session = database.acquire_session().unwrap();
            add_net_worth_entry(date!(2024 - 03 - 01), &session).unwrap();
            add_net_worth_entry(date!(2024 - 01 - 01), &session).unwrap();
        }

        let history = get_net_worth_history_endpoint(State(database))
            .await
            .unwrap()
            .0;

        let dates: Vec<_> = history.iter().map(|net_worth| net_worth.date).collect();
        assert_eq!(dates, vec![date!(2024 - 01 - 01), date!(2024 - 03 - 01)]);
    }
}
