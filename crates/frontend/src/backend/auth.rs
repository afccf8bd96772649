use contracts::system::auth::{SignInRequest, SignInResponse, UserInfo};
use gloo_net::http::Request;

/// Client for the hosted authentication service. The dashboard itself only
/// signs out; sign-in backs the login view.
pub struct AuthHandle {
    endpoint: &'static str,
    api_key: &'static str,
}

impl AuthHandle {
    pub(super) fn new(endpoint: &'static str, api_key: &'static str) -> Self {
        AuthHandle { endpoint, api_key }
    }

    fn url(&self, action: &str) -> String {
        format!("{}:{}?key={}", self.endpoint, action, self.api_key)
    }

    /// Exchange email/password for a session token.
    pub async fn sign_in(&self, email: String, password: String) -> Result<SignInResponse, String> {
        let request = SignInRequest { email, password };

        let response = Request::post(&self.url("signInWithPassword"))
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Sign-in failed: {}", response.status()));
        }

        response
            .json::<SignInResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// Revoke the session token.
    pub async fn sign_out(&self, id_token: &str) -> Result<(), String> {
        let response = Request::post(&self.url("signOut"))
            .header("Authorization", &format!("Bearer {}", id_token))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Sign-out failed: {}", response.status()));
        }

        Ok(())
    }

    /// Resolve the display identity behind a stored token. Used to validate
    /// a restored session.
    pub async fn lookup(&self, id_token: &str) -> Result<UserInfo, String> {
        let response = Request::get(&self.url("lookup"))
            .header("Authorization", &format!("Bearer {}", id_token))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Lookup failed: {}", response.status()));
        }

        response
            .json::<UserInfo>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}
