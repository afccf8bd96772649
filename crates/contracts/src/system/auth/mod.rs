use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub id_token: String,
    pub user: UserInfo,
}

/// Display identity of the signed-in user, e.g. the email whose first letter
/// becomes the avatar initial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
}

impl UserInfo {
    /// Single uppercase letter for the avatar badge.
    pub fn avatar_initial(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_initial_is_the_first_email_letter() {
        let user = UserInfo {
            id: "u1".to_string(),
            email: "owner@shop.example".to_string(),
            display_name: None,
        };
        assert_eq!(user.avatar_initial(), "O");
    }

    #[test]
    fn avatar_initial_survives_an_empty_email() {
        let user = UserInfo {
            id: "u2".to_string(),
            email: String::new(),
            display_name: None,
        };
        assert_eq!(user.avatar_initial(), "?");
    }
}
