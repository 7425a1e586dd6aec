/// Read-only view of the ambient auth/subscription state.
///
/// Sign-up, sign-in and session refresh live in an external identity
/// provider; the editor only ever reads this, injected at construction,
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(UserProfile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub plan: Plan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Free,
    Pro,
}

impl Plan {
    pub fn label(self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
        }
    }
}

impl SessionState {
    pub fn display_name(&self) -> &str {
        match self {
            SessionState::Anonymous => "Guest",
            SessionState::Authenticated(profile) => &profile.name,
        }
    }

    /// Stand-in profile while the real identity provider is stubbed out
    pub fn mock_authenticated() -> Self {
        SessionState::Authenticated(UserProfile {
            name: "Sam Carter".to_owned(),
            email: "sam@example.com".to_owned(),
            plan: Plan::Pro,
        })
    }
}
