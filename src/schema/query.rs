use juniper::FieldResult;
use tracing::debug;

use super::objects::user::User;
use crate::errors::OrNotFound;
use crate::state::AppData;
use crate::store;

#[derive(Clone, Copy, Debug)]
pub struct Query;

#[juniper::graphql_object(context = crate::state::AppData)]
impl Query {
    async fn users(ctx: &AppData) -> FieldResult<Vec<User>> {
        let users = store::list_all(&ctx.db)
            .await?
            .into_iter()
            .map(User::from)
            .collect();
        Ok(users)
    }

    // Nullable so a miss reports `null` next to the error instead of nulling `data`.
    async fn user(ctx: &AppData, id: i32) -> FieldResult<Option<User>> {
        let user = store::get_by_id(&ctx.db, id)
            .await
            .or_not_found()
            .inspect_err(|e| debug!(id, "lookup failed: {}", e))?;
        Ok(Some(user.into()))
    }
}
