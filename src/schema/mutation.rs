use juniper::FieldResult;
use tracing::{debug, info};

use super::objects::user::{CreateUserPayload, DeleteUserPayload, UpdateUserPayload};
use crate::errors::OrNotFound;
use crate::input::{NewUser, UserPatch};
use crate::state::AppData;
use crate::store;

pub const DELETED_MESSAGE: &str = "Successfully deleted user.";

#[derive(Clone, Copy, Debug)]
pub struct Mutation;

#[juniper::graphql_object(context = crate::state::AppData)]
impl Mutation {
    async fn create_user(
        ctx: &AppData,
        first_name: String,
        last_name: String,
    ) -> FieldResult<CreateUserPayload> {
        let user = store::insert(&ctx.db, NewUser::new(&first_name, &last_name)).await?;
        info!(id = user.id, "created user");
        Ok(CreateUserPayload { user: user.into() })
    }

    /// Omitted or null arguments leave the field unchanged. Any supplied
    /// string, including an empty one, is trimmed and stored.
    async fn update_user(
        ctx: &AppData,
        id: i32,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> FieldResult<Option<UpdateUserPayload>> {
        let patch = UserPatch::new(first_name.as_deref(), last_name.as_deref());
        let user = store::update(&ctx.db, id, patch)
            .await
            .or_not_found()
            .inspect_err(|e| debug!(id, "update failed: {}", e))?;
        info!(id, "updated user");
        Ok(Some(UpdateUserPayload { user: user.into() }))
    }

    async fn delete_user(ctx: &AppData, id: i32) -> FieldResult<Option<DeleteUserPayload>> {
        store::delete(&ctx.db, id)
            .await
            .or_not_found()
            .inspect_err(|e| debug!(id, "delete failed: {}", e))?;
        info!(id, "deleted user");
        Ok(Some(DeleteUserPayload {
            response: DELETED_MESSAGE.to_string(),
        }))
    }
}
