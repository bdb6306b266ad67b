//! Wire types for the Speaker Recognition API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==================== Profile Locale ====================

/// Locale wrapper sent as the body of profile-creation requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLocale {
    /// BCP-47 locale tag, e.g. "en-us".
    pub locale: String,
}

impl ProfileLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

// ==================== Create Profile ====================

/// Response from creating a speaker profile.
///
/// The service names the id field after the recognition mode
/// (`identificationProfileId` / `verificationProfileId`); both decode
/// into the same envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProfileResponse {
    /// Server-assigned profile identifier.
    #[serde(
        rename = "profileId",
        alias = "identificationProfileId",
        alias = "verificationProfileId"
    )]
    pub profile_id: Uuid,
}

// ==================== Enrollment Status ====================

/// Status of a speaker profile's enrollment.
///
/// Observed transitions only move forward (Enrolling → Training →
/// Enrolled); the client never mutates this field, it only reflects
/// server state. An unrecognized status string is a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    /// The profile is still collecting enrollment audio.
    Enrolling,
    /// The profile is training and not yet usable.
    Training,
    /// The profile is enrolled and ready for verification/identification.
    Enrolled,
}

// ==================== Profile ====================

/// A speaker profile (identification or verification).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Profile identifier.
    #[serde(
        rename = "profileId",
        alias = "identificationProfileId",
        alias = "verificationProfileId"
    )]
    pub id: Uuid,

    /// Profile locale, e.g. "en-us".
    pub locale: String,

    /// Current enrollment status.
    pub enrollment_status: EnrollmentStatus,

    /// Number of enrollments performed so far.
    #[serde(default)]
    pub enrollments_count: i32,

    /// Number of enrollments still required.
    #[serde(default)]
    pub remaining_enrollments_count: i32,

    /// Accumulated enrollment speech time in seconds (identification mode).
    #[serde(default)]
    pub enrollment_speech_time: Option<f64>,

    /// Remaining speech time in seconds (identification mode).
    #[serde(default)]
    pub remaining_enrollment_speech_time: Option<f64>,

    /// When the profile was created.
    pub created_date_time: DateTime<Utc>,

    /// When the profile was last acted on.
    pub last_action_date_time: DateTime<Utc>,
}

// ==================== Operation Location ====================

/// Location of a long-running enroll/identify job.
///
/// Taken verbatim from the `Operation-Location` response header; hand it
/// to the matching status-check call to poll the job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationLocation {
    /// Absolute polling URL.
    pub url: String,
}

impl OperationLocation {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

// ==================== Operation Status ====================

/// Status of a long-running operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
}

impl OperationStatus {
    /// Returns true if the operation has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationStatus::Succeeded | OperationStatus::Failed)
    }

    /// Returns true if the operation completed successfully.
    pub fn is_succeeded(&self) -> bool {
        matches!(self, OperationStatus::Succeeded)
    }

    /// Returns true if the operation failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, OperationStatus::Failed)
    }
}

// ==================== Enrollment Operation ====================

/// Polling result for a long-running identification enrollment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentOperation {
    /// Current job status.
    pub status: OperationStatus,

    /// Result payload, present once the job has succeeded.
    #[serde(default)]
    pub processing_result: Option<EnrollmentResult>,

    /// Failure detail, present once the job has failed.
    #[serde(default)]
    pub message: Option<String>,

    /// When the job was created.
    pub created_date_time: DateTime<Utc>,

    /// When the job was last updated.
    pub last_action_date_time: DateTime<Utc>,
}

/// Payload of a succeeded identification enrollment job.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResult {
    /// Enrollment status of the profile after this enrollment.
    pub enrollment_status: EnrollmentStatus,

    /// Seconds of speech still required to finish enrolling.
    #[serde(default)]
    pub remaining_enrollment_speech_time: f64,

    /// Seconds of usable speech detected in the submitted audio.
    #[serde(default)]
    pub speech_time: f64,

    /// Accumulated seconds of enrollment speech.
    #[serde(default)]
    pub enrollment_speech_time: f64,
}

// ==================== Identification Operation ====================

/// Polling result for a long-running identification job.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationOperation {
    /// Current job status.
    pub status: OperationStatus,

    /// Result payload, present once the job has succeeded.
    #[serde(default)]
    pub processing_result: Option<IdentificationResult>,

    /// Failure detail, present once the job has failed.
    #[serde(default)]
    pub message: Option<String>,

    /// When the job was created.
    pub created_date_time: DateTime<Utc>,

    /// When the job was last updated.
    pub last_action_date_time: DateTime<Utc>,
}

/// Payload of a succeeded identification job.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationResult {
    /// The matched profile, or the nil UUID when no profile matched.
    pub identified_profile_id: Uuid,

    /// Confidence of the match.
    pub confidence: Confidence,
}

// ==================== Verification ====================

/// Synchronous result of a verification enrollment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Enrollment status of the profile after this enrollment.
    pub enrollment_status: EnrollmentStatus,

    /// Seconds of enrollment speech still required.
    #[serde(default)]
    pub remaining_enrollments_speech_time: f64,

    /// Seconds of usable speech detected in the submitted audio.
    #[serde(default)]
    pub speech_time: f64,

    /// Total seconds of enrollment speech accumulated.
    #[serde(default)]
    pub enrollments_length: f64,

    /// Number of enrollments performed so far.
    #[serde(default)]
    pub enrollments_count: i32,

    /// Phrase recognized in the enrollment audio.
    #[serde(default)]
    pub phrase: Option<String>,
}

/// Result of a verification call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// Accept or reject decision.
    pub result: VerificationResult,

    /// Confidence of the decision.
    pub confidence: Confidence,

    /// Phrase recognized in the submitted audio.
    #[serde(default)]
    pub phrase: String,
}

/// Verification decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationResult {
    Accept,
    Reject,
}

/// Confidence level reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Normal,
    High,
}

/// A phrase supported for verification enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerificationPhrase {
    pub phrase: String,
}

// ==================== Error Response ====================

/// Normalized shape of every non-success remote payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    #[allow(dead_code)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_profile_response_mode_specific_field_names() {
        let id = "11111111-1111-1111-1111-111111111111";

        let resp: CreateProfileResponse =
            serde_json::from_str(&format!(r#"{{"verificationProfileId":"{id}"}}"#)).unwrap();
        assert_eq!(resp.profile_id.to_string(), id);

        let resp: CreateProfileResponse =
            serde_json::from_str(&format!(r#"{{"identificationProfileId":"{id}"}}"#)).unwrap();
        assert_eq!(resp.profile_id.to_string(), id);
    }

    #[test]
    fn test_profile_decode() {
        let data = r#"{
            "identificationProfileId": "49a36324-fc4b-4387-aa06-090cfbf0064f",
            "locale": "en-us",
            "enrollmentSpeechTime": 31.5,
            "remainingEnrollmentSpeechTime": 0.0,
            "createdDateTime": "2015-04-23T18:25:43.511Z",
            "lastActionDateTime": "2015-04-23T19:34:51.522Z",
            "enrollmentStatus": "Enrolled"
        }"#;

        let profile: Profile = serde_json::from_str(data).unwrap();
        assert_eq!(profile.locale, "en-us");
        assert_eq!(profile.enrollment_status, EnrollmentStatus::Enrolled);
        assert_eq!(profile.enrollment_speech_time, Some(31.5));
        assert_eq!(profile.enrollments_count, 0);
        assert_eq!(profile.created_date_time.timezone(), Utc);
    }

    #[test]
    fn test_enrollment_status_rejects_unknown_value() {
        let err = serde_json::from_str::<EnrollmentStatus>(r#""Pending""#);
        assert!(err.is_err());
    }

    #[test]
    fn test_operation_status_wire_form() {
        assert_eq!(
            serde_json::from_str::<OperationStatus>(r#""notStarted""#).unwrap(),
            OperationStatus::NotStarted
        );
        assert_eq!(
            serde_json::from_str::<OperationStatus>(r#""succeeded""#).unwrap(),
            OperationStatus::Succeeded
        );
        assert!(serde_json::from_str::<OperationStatus>(r#""Succeeded""#).is_err());

        assert!(OperationStatus::Succeeded.is_terminal());
        assert!(OperationStatus::Failed.is_terminal());
        assert!(!OperationStatus::Running.is_terminal());
    }

    #[test]
    fn test_enrollment_operation_decode() {
        let data = r#"{
            "status": "succeeded",
            "createdDateTime": "2015-09-30T01:28:23Z",
            "lastActionDateTime": "2015-09-30T01:28:59Z",
            "processingResult": {
                "enrollmentStatus": "Training",
                "remainingEnrollmentSpeechTime": 18.5,
                "speechTime": 11.5,
                "enrollmentSpeechTime": 11.5
            }
        }"#;

        let op: EnrollmentOperation = serde_json::from_str(data).unwrap();
        assert!(op.status.is_succeeded());
        assert!(op.message.is_none());
        let result = op.processing_result.unwrap();
        assert_eq!(result.enrollment_status, EnrollmentStatus::Training);
        assert_eq!(result.remaining_enrollment_speech_time, 18.5);
        assert_eq!(result.speech_time, 11.5);
        assert_eq!(result.enrollment_speech_time, 11.5);
    }

    #[test]
    fn test_enrollment_operation_failed_carries_message() {
        let data = r#"{
            "status": "failed",
            "createdDateTime": "2015-09-30T01:28:23Z",
            "lastActionDateTime": "2015-09-30T01:28:59Z",
            "message": "audio too short"
        }"#;

        let op: EnrollmentOperation = serde_json::from_str(data).unwrap();
        assert!(op.status.is_failed());
        assert!(op.processing_result.is_none());
        assert_eq!(op.message.as_deref(), Some("audio too short"));
    }

    #[test]
    fn test_identification_operation_decode() {
        let data = r#"{
            "status": "succeeded",
            "createdDateTime": "2015-09-30T01:28:23Z",
            "lastActionDateTime": "2015-09-30T01:28:59Z",
            "processingResult": {
                "identifiedProfileId": "de8b5b45-242e-4b10-b35b-8a62de155dc0",
                "confidence": "High"
            }
        }"#;

        let op: IdentificationOperation = serde_json::from_str(data).unwrap();
        assert!(op.status.is_succeeded());
        let result = op.processing_result.unwrap();
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(
            result.identified_profile_id.to_string(),
            "de8b5b45-242e-4b10-b35b-8a62de155dc0"
        );
    }

    #[test]
    fn test_verification_decode() {
        let data = r#"{"result":"Accept","confidence":"Normal","phrase":"my voice is my passport"}"#;
        let v: Verification = serde_json::from_str(data).unwrap();
        assert_eq!(v.result, VerificationResult::Accept);
        assert_eq!(v.confidence, Confidence::Normal);
        assert_eq!(v.phrase, "my voice is my passport");

        assert!(serde_json::from_str::<Verification>(r#"{"result":"Maybe","confidence":"Low"}"#).is_err());
    }

    #[test]
    fn test_error_response_decode() {
        let data = r#"{"error":{"code":"Unknown","message":"boom"}}"#;
        let err: ErrorResponse = serde_json::from_str(data).unwrap();
        assert_eq!(err.error.message, "boom");
    }

    #[test]
    fn test_profile_locale_body() {
        let body = serde_json::to_string(&ProfileLocale::new("en-us")).unwrap();
        assert_eq!(body, r#"{"locale":"en-us"}"#);
    }
}
