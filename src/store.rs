use entities::users;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait};

use crate::input::{NewUser, UserPatch};

/// Every stored user, in whatever order the database returns them.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find().all(db).await
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

pub async fn insert<C: ConnectionTrait>(db: &C, new_user: NewUser) -> Result<users::Model, DbErr> {
    users::ActiveModel {
        first_name: Set(new_user.first_name),
        last_name: Set(new_user.last_name),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Applies `patch` to the user with `id`. Returns `None` if there is no such
/// user, including when it disappears between the lookup and the write.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: UserPatch,
) -> Result<Option<users::Model>, DbErr> {
    let Some(model) = get_by_id(db, id).await? else {
        return Ok(None);
    };
    if patch.is_empty() {
        return Ok(Some(model));
    }

    let mut user: users::ActiveModel = model.into();
    if let Some(first_name) = patch.first_name {
        user.first_name = Set(first_name);
    }
    if let Some(last_name) = patch.last_name {
        user.last_name = Set(last_name);
    }

    match user.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Hard delete. Returns whether a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    let result = users::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::memory_database;

    #[tokio::test]
    async fn insert_then_get_returns_trimmed_names() {
        let db = memory_database().await;

        let created = insert(&db, NewUser::new("  Alice ", " Smith  ")).await.unwrap();
        assert_eq!(created.first_name, "Alice");
        assert_eq!(created.last_name, "Smith");

        let fetched = get_by_id(&db, created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn ids_are_assigned_by_the_store() {
        let db = memory_database().await;

        let first = insert(&db, NewUser::new("Alice", "Smith")).await.unwrap();
        let second = insert(&db, NewUser::new("Alice", "Smith")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let db = memory_database().await;
        assert_eq!(get_by_id(&db, 42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_sets_only_supplied_fields() {
        let db = memory_database().await;
        let user = insert(&db, NewUser::new("Alice", "Smith")).await.unwrap();

        let updated = update(&db, user.id, UserPatch::new(Some("  Bob  "), None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.first_name, "Bob");
        assert_eq!(updated.last_name, "Smith");

        let stored = get_by_id(&db, user.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn empty_patch_leaves_record_unchanged() {
        let db = memory_database().await;
        let user = insert(&db, NewUser::new("Alice", "Smith")).await.unwrap();

        let same = update(&db, user.id, UserPatch::default()).await.unwrap();
        assert_eq!(same, Some(user));
    }

    #[tokio::test]
    async fn empty_string_is_a_real_update() {
        let db = memory_database().await;
        let user = insert(&db, NewUser::new("Alice", "Smith")).await.unwrap();

        let updated = update(&db, user.id, UserPatch::new(None, Some("   ")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.last_name, "");
    }

    #[tokio::test]
    async fn update_unknown_id_is_none() {
        let db = memory_database().await;
        let patch = UserPatch::new(Some("Bob"), None);
        assert_eq!(update(&db, 7, patch).await.unwrap(), None);
        assert!(list_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_is_permanent() {
        let db = memory_database().await;
        let user = insert(&db, NewUser::new("Alice", "Smith")).await.unwrap();

        assert!(delete(&db, user.id).await.unwrap());
        assert_eq!(get_by_id(&db, user.id).await.unwrap(), None);
        assert!(!delete(&db, user.id).await.unwrap());
    }

    #[tokio::test]
    async fn list_tracks_creates_minus_deletes() {
        let db = memory_database().await;
        assert!(list_all(&db).await.unwrap().is_empty());

        let mut ids = Vec::new();
        for (first, last) in [("Ada", "Lovelace"), ("Alan", "Turing"), ("Grace", "Hopper")] {
            ids.push(insert(&db, NewUser::new(first, last)).await.unwrap().id);
        }
        assert!(delete(&db, ids[1]).await.unwrap());

        let mut listed: Vec<i32> = list_all(&db).await.unwrap().into_iter().map(|u| u.id).collect();
        listed.sort_unstable();
        assert_eq!(listed, vec![ids[0], ids[2]]);
    }
}
