use contracts::system::auth::UserInfo;
use web_sys::window;

const ID_TOKEN_KEY: &str = "session_id_token";
const USER_KEY: &str = "session_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the session token to localStorage
pub fn save_id_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ID_TOKEN_KEY, token);
    }
}

/// Get the session token from localStorage
pub fn get_id_token() -> Option<String> {
    get_local_storage()?.get_item(ID_TOKEN_KEY).ok()?
}

/// Save the user identity snapshot to localStorage
pub fn save_user(user: &UserInfo) {
    if let Ok(json) = serde_json::to_string(user) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Get the user identity snapshot from localStorage
pub fn get_user() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the whole stored session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ID_TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
