//! The signed-in user's own profile page.

use heartline_core::subscription::Tier;
use heartline_core::user::User;

#[derive(Debug, Clone)]
pub struct UserProfileView {
    user: User,
    tier: Tier,
}

impl UserProfileView {
    pub fn new(user: User, tier: Tier) -> Self {
        Self { user, tier }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn update(&mut self, user: User, tier: Tier) {
        self.user = user;
        self.tier = tier;
    }

    /// Badge shown next to the name, `None` for free accounts.
    pub fn badge(&self) -> Option<String> {
        self.user
            .premium
            .then(|| format!("{} member", capitalize(self.tier.as_ref())))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
