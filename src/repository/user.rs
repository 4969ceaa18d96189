use crate::model::User;

pub trait UserRepository: Send + Sync {
    fn current_user(&self) -> Option<User>;
}

/// Always reports the same demo user.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository;

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self
    }
}

impl UserRepository for InMemoryUserRepository {
    fn current_user(&self) -> Option<User> {
        Some(User::new("1", "John Doe"))
    }
}
