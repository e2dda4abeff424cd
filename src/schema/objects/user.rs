use juniper::GraphQLObject;

#[derive(GraphQLObject, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<entities::users::Model> for User {
    fn from(u: entities::users::Model) -> Self {
        User {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
        }
    }
}

#[derive(GraphQLObject)]
pub struct CreateUserPayload {
    pub user: User,
}

#[derive(GraphQLObject)]
pub struct UpdateUserPayload {
    pub user: User,
}

#[derive(GraphQLObject)]
pub struct DeleteUserPayload {
    pub response: String,
}
