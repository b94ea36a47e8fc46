use serde::{Deserialize, Serialize};

use cg_core::domain::entities::{User, UserPage};

/// Public view of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            username: user.username,
            age: user.age,
            gender: user.gender,
            phone: user.phone,
            image: user.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl From<UserPage> for UsersResponse {
    fn from(page: UserPage) -> Self {
        Self {
            users: page.users.into_iter().map(UserDto::from).collect(),
            total: page.total,
            skip: page.skip,
            limit: page.limit,
        }
    }
}
