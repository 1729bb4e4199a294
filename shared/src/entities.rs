//! 业务实体 DTO
//!
//! 与后端 REST 接口一一对应的患者 / 医生 / 科室传输对象。
//! 字段形状来自后端的 Request/Response DTO，JSON 统一为 camelCase。

use serde::{Deserialize, Serialize};

// =========================================================
// 患者 (Patient)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub patient_unique_id: String,
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// "YYYY-MM-DD"
    pub date_of_birth: String,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub medical_history_summary: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
    #[serde(default)]
    pub emergency_contact_relationship: Option<String>,
    /// "YYYY-MM-DD"
    pub registration_date: String,
}

/// 创建 / 更新患者的请求体
///
/// `password` 仅在创建时提供；更新时序列化会跳过空字段。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRequest {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_relationship: Option<String>,
    pub registration_date: String,
}

// =========================================================
// 医生 (Doctor)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub department_id: i64,
    pub department_name: String,
    pub specialization: String,
    pub license_number: String,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub consultation_fee: Option<f64>,
    #[serde(default)]
    pub qualifications: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRequest {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub department_id: i64,
    pub specialization: String,
    pub license_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
}

// =========================================================
// 科室 (Department)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_request_omits_absent_password() {
        let req = PatientRequest {
            username: "jdoe".into(),
            email: "jdoe@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            date_of_birth: "1990-04-01".into(),
            registration_date: "2024-01-15".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("dateOfBirth"));
    }

    #[test]
    fn test_doctor_tolerates_missing_optionals() {
        let json = r#"{
            "id": 3,
            "userId": 12,
            "username": "drkim",
            "email": "kim@hospital.org",
            "firstName": "Soo",
            "lastName": "Kim",
            "departmentId": 2,
            "departmentName": "Neurology",
            "specialization": "Neurosurgery",
            "licenseNumber": "LIC-554"
        }"#;
        let doctor: Doctor = serde_json::from_str(json).unwrap();
        assert_eq!(doctor.department_name, "Neurology");
        assert!(doctor.consultation_fee.is_none());
    }
}
