//! Console user accounts

use shared::models::User;

use crate::http::HttpClient;
use crate::resource::Resource;

pub const USERS_PATH: &str = "/users/";

pub trait UsersApi: HttpClient + Sized {
    fn users(&self) -> Resource<'_, Self, User> {
        Resource::new(self, USERS_PATH)
    }
}

impl<C: HttpClient> UsersApi for C {}
