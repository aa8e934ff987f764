use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ContactResponse {
    pub status: String,
    pub message: String,
}

impl ContactResponse {
    #[must_use]
    pub fn sent() -> Self {
        Self {
            status: "sent".to_string(),
            message: "Your message has been sent. Thank you!".to_string(),
        }
    }
}
