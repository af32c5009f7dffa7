use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionInquiry {
    pub name: String,
    pub mobile: String,
    pub course: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body of every non-login reply, and of every failed request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn admission_inquiry_field_names() {
        let inquiry = AdmissionInquiry {
            name: "Asha".into(),
            mobile: "9876543210".into(),
            course: "Data Science".into(),
        };
        assert_eq!(
            serde_json::to_value(&inquiry).unwrap(),
            json!({ "name": "Asha", "mobile": "9876543210", "course": "Data Science" })
        );
    }

    #[test]
    fn login_response_without_message() {
        let response: LoginResponse = serde_json::from_value(json!({ "token": "abc" })).unwrap();
        assert_eq!(response.token, "abc");
        assert_eq!(response.message, "");
    }

    #[test]
    fn login_response_requires_token() {
        assert!(serde_json::from_value::<LoginResponse>(json!({ "message": "ok" })).is_err());
    }

    #[test]
    fn message_response_ignores_extra_fields() {
        let response: MessageResponse =
            serde_json::from_value(json!({ "message": "Thanks!", "id": 7 })).unwrap();
        assert_eq!(response.message, "Thanks!");
    }
}
