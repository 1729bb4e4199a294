use serde::{Deserialize, Serialize};

mod entities;
mod page;

pub use entities::{
    Department, DepartmentRequest, Doctor, DoctorRequest, Patient, PatientRequest,
};
pub use page::PageResult;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_DOCTOR: &str = "ROLE_DOCTOR";
pub const ROLE_PATIENT: &str = "ROLE_PATIENT";
pub const ROLE_RECEPTIONIST: &str = "ROLE_RECEPTIONIST";

/// 列表页固定的分页大小
pub const PAGE_SIZE: u32 = 10;

// =========================================================
// 用户与认证模型 (User & Auth Models)
// =========================================================

/// 当前登录用户的资料
///
/// 登录成功后整体写入，会话期间不可变；下次登录时整体替换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    /// 判断用户是否持有给定角色
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// `POST /auth/signin` 的响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub token: String,
    pub id: i64,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub first_name: String,
    pub last_name: String,
}

impl JwtResponse {
    /// 提取可持久化的用户资料部分（token 单独存储）
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            roles: self.roles.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub roles: Vec<String>,
}

/// 后端的通用消息响应（如注册成功提示）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_response_deserializes_camel_case() {
        let json = r#"{
            "token": "abc.def.ghi",
            "id": 7,
            "username": "amina",
            "email": "amina@example.com",
            "roles": ["ROLE_ADMIN"],
            "firstName": "Amina",
            "lastName": "Diallo"
        }"#;
        let resp: JwtResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_name, "Amina");
        let profile = resp.profile();
        assert!(profile.has_role(ROLE_ADMIN));
        assert!(!profile.has_role(ROLE_DOCTOR));
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = UserProfile {
            id: 1,
            username: "u".into(),
            email: "u@example.com".into(),
            roles: vec![ROLE_PATIENT.to_string()],
            first_name: "U".into(),
            last_name: "Ser".into(),
        };
        let blob = serde_json::to_string(&profile).unwrap();
        assert!(blob.contains("firstName"));
        let back: UserProfile = serde_json::from_str(&blob).unwrap();
        assert_eq!(back, profile);
    }
}
