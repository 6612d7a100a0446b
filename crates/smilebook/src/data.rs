//! Wire types exchanged with the remote appointments API.
//!
//! Request bodies use the API's camelCase field names; response payloads use
//! its snake_case names. The client never derives appointment state, it only
//! displays what the API returns and requests transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body for `POST /login`.
#[derive(Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to `POST /login`. The token may be missing even on a 2xx
/// response, which the login page treats as a failure.
#[derive(Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: Option<String>,
}

/// Body for `POST /register/user`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

/// Generic `{message}` response used by register, create and update calls.
#[derive(Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: Option<String>,
}

/// One dentist from `GET /available-dentists`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Dentist {
    pub full_name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DentistsResponse {
    #[serde(default)]
    pub data: Vec<Dentist>,
}

/// Body for `POST /appointments/create`. `appointment_date` is `YYYY-MM-DD`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub user_name: String,
    pub dentist_name: String,
    pub appointment_date: String,
}

/// Lifecycle state of an appointment, owned entirely by the remote API.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Cancelled,
    Finished,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Finished => "finished",
        };
        write!(f, "{s}")
    }
}

/// One appointment from `GET /user-appointments`, a read-only projection.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Appointment {
    pub reference_id: Option<String>,
    pub dentist_name: String,
    pub appointment_date: String,
    pub status: AppointmentStatus,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppointmentsResponse {
    #[serde(default)]
    pub data: Vec<Appointment>,
}

/// Body for `POST /appointments/update`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub reference_id: String,
    pub dentist_name: String,
    pub appointment_date: String,
    pub status: AppointmentStatus,
}

/// One entry of the calendar read-model from `GET /appointments`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub id: i64,
    pub name: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_serializes_camel_case() {
        let request = RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "hunter2".into(),
            phone_number: "555-0100".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["phoneNumber"], "555-0100");
    }

    #[test]
    fn update_request_serializes_camel_case_and_lowercase_status() {
        let request = UpdateAppointmentRequest {
            reference_id: "ref-1".into(),
            dentist_name: "Dr. Smith".into(),
            appointment_date: "2026-09-01".into(),
            status: AppointmentStatus::Cancelled,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["referenceId"], "ref-1");
        assert_eq!(json["dentistName"], "Dr. Smith");
        assert_eq!(json["appointmentDate"], "2026-09-01");
        assert_eq!(json["status"], "cancelled");
    }

    #[test]
    fn appointments_response_parses_snake_case() {
        let body = r#"{"data":[{"reference_id":"r1","dentist_name":"Dr. Smith","appointment_date":"2026-09-01","status":"scheduled"}]}"#;
        let response: AppointmentsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].reference_id.as_deref(), Some("r1"));
        assert_eq!(response.data[0].status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn appointments_response_tolerates_missing_data_and_reference_id() {
        let response: AppointmentsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());

        let body = r#"{"data":[{"dentist_name":"Dr. Lee","appointment_date":"2026-09-02","status":"finished"}]}"#;
        let response: AppointmentsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data[0].reference_id, None);
    }

    #[test]
    fn login_response_token_is_optional() {
        let response: LoginResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.token, None);

        let response: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(response.token.as_deref(), Some("abc"));
    }

    #[test]
    fn calendar_entries_parse() {
        let body = r#"[{"id":7,"name":"Cleaning","date":"2026-09-03"}]"#;
        let entries: Vec<CalendarEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(entries[0].id, 7);
        assert_eq!(entries[0].name, "Cleaning");
    }
}
