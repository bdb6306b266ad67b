//! Declarative endpoint descriptions for the Speaker Recognition API.
//!
//! Each remote operation is described once as an [`Endpoint`] (method,
//! target, query, payload, operation category) and executed by the generic
//! machinery in [`crate::http`]. The two recognition modes share every
//! description; a [`Mode`] contributes only the profile path prefix.

use std::path::PathBuf;

use bytes::Bytes;
use reqwest::{Body, Method, multipart};
use uuid::Uuid;

use crate::{
    error::{Operation, Result},
    types::{OperationLocation, ProfileLocale},
};

/// Recognition mode, selecting the profile path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Identification,
    Verification,
}

impl Mode {
    fn profiles_prefix(&self) -> &'static str {
        match self {
            Mode::Identification => "identificationProfiles",
            Mode::Verification => "verificationProfiles",
        }
    }
}

/// Audio input for enroll/verify/identify calls.
///
/// Byte buffers are sent as-is; file-backed sources are streamed through
/// the transport without buffering the whole payload into memory. Either
/// way the part length is known up front, so the request carries a
/// `Content-Length`. The SDK consumes the source for exactly one send and
/// never closes caller-owned inputs behind the caller's back.
#[derive(Debug)]
pub struct AudioSource(Source);

#[derive(Debug)]
enum Source {
    Bytes(Bytes),
    File(PathBuf),
}

impl AudioSource {
    /// Audio held in memory.
    pub fn bytes(data: impl Into<Bytes>) -> Self {
        Self(Source::Bytes(data.into()))
    }

    /// Audio read from a file at send time.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self(Source::File(path.into()))
    }

    /// Converts the source into a multipart part, opening files lazily.
    pub(crate) async fn into_part(self) -> Result<multipart::Part> {
        match self.0 {
            Source::Bytes(data) => {
                let len = data.len() as u64;
                Ok(multipart::Part::stream_with_length(Body::from(data), len))
            }
            Source::File(path) => {
                let file = tokio::fs::File::open(&path).await?;
                let len = file.metadata().await?.len();
                Ok(multipart::Part::stream_with_length(Body::from(file), len))
            }
        }
    }
}

impl From<Vec<u8>> for AudioSource {
    fn from(data: Vec<u8>) -> Self {
        Self::bytes(data)
    }
}

impl From<Bytes> for AudioSource {
    fn from(data: Bytes) -> Self {
        Self::bytes(data)
    }
}

impl From<PathBuf> for AudioSource {
    fn from(path: PathBuf) -> Self {
        Self::file(path)
    }
}

/// Where a request goes: a path under the base URL, or an absolute URL
/// previously handed out via `Operation-Location`.
#[derive(Debug)]
pub(crate) enum Target {
    Relative(String),
    Absolute(String),
}

/// Request payload shape.
pub(crate) enum Payload {
    Empty,
    Json(serde_json::Value),
    Audio {
        part: &'static str,
        source: AudioSource,
    },
}

/// One remote operation, fully described.
pub(crate) struct Endpoint {
    pub operation: Operation,
    pub method: Method,
    pub target: Target,
    pub query: Vec<(&'static str, String)>,
    pub payload: Payload,
}

impl Endpoint {
    fn new(operation: Operation, method: Method, path: String) -> Self {
        Self {
            operation,
            method,
            target: Target::Relative(path),
            query: Vec::new(),
            payload: Payload::Empty,
        }
    }

    pub fn create_profile(mode: Mode, locale: &ProfileLocale) -> Result<Self> {
        let mut ep = Self::new(
            Operation::CreateProfile,
            Method::POST,
            mode.profiles_prefix().to_string(),
        );
        ep.payload = Payload::Json(serde_json::to_value(locale)?);
        Ok(ep)
    }

    pub fn delete_profile(mode: Mode, id: Uuid) -> Self {
        Self::new(
            Operation::DeleteProfile,
            Method::DELETE,
            format!("{}/{}", mode.profiles_prefix(), id),
        )
    }

    pub fn get_profile(mode: Mode, id: Uuid) -> Self {
        Self::new(
            Operation::GetProfile,
            Method::GET,
            format!("{}/{}", mode.profiles_prefix(), id),
        )
    }

    pub fn list_profiles(mode: Mode) -> Self {
        Self::new(
            Operation::GetProfile,
            Method::GET,
            mode.profiles_prefix().to_string(),
        )
    }

    pub fn reset_enrollments(mode: Mode, id: Uuid) -> Self {
        Self::new(
            Operation::ResetEnrollments,
            Method::POST,
            format!("{}/{}/reset", mode.profiles_prefix(), id),
        )
    }

    /// Enrollment upload. `short_audio` applies to identification mode
    /// only; verification enrollments take no flag.
    pub fn enroll(mode: Mode, id: Uuid, short_audio: Option<bool>, source: AudioSource) -> Self {
        let mut ep = Self::new(
            Operation::Enroll,
            Method::POST,
            format!("{}/{}/enroll", mode.profiles_prefix(), id),
        );
        if let Some(short_audio) = short_audio {
            ep.query.push(("shortAudio", short_audio.to_string()));
        }
        ep.payload = Payload::Audio {
            part: "enrollmentData",
            source,
        };
        ep
    }

    pub fn verify(profile_id: Uuid, source: AudioSource) -> Self {
        let mut ep = Self::new(Operation::Verify, Method::POST, "verify".to_string());
        ep.query
            .push(("verificationProfileId", profile_id.to_string()));
        ep.payload = Payload::Audio {
            part: "verificationData",
            source,
        };
        ep
    }

    pub fn identify(ids: &[Uuid], short_audio: bool, source: AudioSource) -> Self {
        let mut ep = Self::new(Operation::Identify, Method::POST, "identify".to_string());
        ep.query
            .push(("identificationProfileIds", join_profile_ids(ids)));
        ep.query.push(("shortAudio", short_audio.to_string()));
        ep.payload = Payload::Audio {
            part: "identificationData",
            source,
        };
        ep
    }

    pub fn enrollment_status(location: &OperationLocation) -> Self {
        Self {
            operation: Operation::Enroll,
            method: Method::GET,
            target: Target::Absolute(location.url.clone()),
            query: Vec::new(),
            payload: Payload::Empty,
        }
    }

    pub fn identification_status(location: &OperationLocation) -> Self {
        Self {
            operation: Operation::Identify,
            method: Method::GET,
            target: Target::Absolute(location.url.clone()),
            query: Vec::new(),
            payload: Payload::Empty,
        }
    }

    pub fn phrases(locale: &str) -> Self {
        let mut ep = Self::new(
            Operation::Phrases,
            Method::GET,
            "verificationPhrases".to_string(),
        );
        ep.query.push(("locale", locale.to_string()));
        ep
    }

    /// Renders the full request URL.
    ///
    /// Query values here are UUIDs, locale tags and booleans, none of
    /// which require percent-encoding; rendering them literally keeps the
    /// comma-joined id list exactly as the service parses it.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = match &self.target {
            Target::Relative(path) => format!("{}/{}", base_url, path),
            Target::Absolute(url) => url.clone(),
        };
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

/// Joins profile ids into the comma-separated form the service parses
/// positionally: no leading/trailing separator, empty list yields "".
pub(crate) fn join_profile_ids(ids: &[Uuid]) -> String {
    let mut out = String::new();
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&id.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://westus.api.cognitive.microsoft.com/spid/v1.0";

    #[test]
    fn test_join_profile_ids() {
        assert_eq!(join_profile_ids(&[]), "");

        let a = Uuid::new_v4();
        assert_eq!(join_profile_ids(&[a]), a.to_string());

        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let joined = join_profile_ids(&[a, b, c]);
        assert_eq!(joined, format!("{a},{b},{c}"));
        assert_eq!(joined.matches(',').count(), 2);
        assert!(!joined.starts_with(','));
        assert!(!joined.ends_with(','));
    }

    #[test]
    fn test_profile_endpoints_by_mode() {
        let id: Uuid = "49a36324-fc4b-4387-aa06-090cfbf0064f".parse().unwrap();

        let ep = Endpoint::get_profile(Mode::Identification, id);
        assert_eq!(
            ep.url(BASE),
            format!("{BASE}/identificationProfiles/{id}")
        );

        let ep = Endpoint::delete_profile(Mode::Verification, id);
        assert_eq!(ep.method, Method::DELETE);
        assert_eq!(ep.url(BASE), format!("{BASE}/verificationProfiles/{id}"));

        let ep = Endpoint::reset_enrollments(Mode::Identification, id);
        assert_eq!(
            ep.url(BASE),
            format!("{BASE}/identificationProfiles/{id}/reset")
        );
    }

    #[test]
    fn test_enroll_endpoint_short_audio_flag() {
        let id = Uuid::new_v4();

        let ep = Endpoint::enroll(Mode::Identification, id, Some(true), AudioSource::bytes(vec![0u8]));
        assert_eq!(
            ep.url(BASE),
            format!("{BASE}/identificationProfiles/{id}/enroll?shortAudio=true")
        );
        assert!(matches!(
            ep.payload,
            Payload::Audio { part: "enrollmentData", .. }
        ));

        let ep = Endpoint::enroll(Mode::Verification, id, None, AudioSource::bytes(vec![0u8]));
        assert_eq!(
            ep.url(BASE),
            format!("{BASE}/verificationProfiles/{id}/enroll")
        );
    }

    #[test]
    fn test_identify_endpoint_query() {
        let a: Uuid = "11111111-1111-1111-1111-111111111111".parse().unwrap();
        let b: Uuid = "22222222-2222-2222-2222-222222222222".parse().unwrap();

        let ep = Endpoint::identify(&[a, b], false, AudioSource::bytes(vec![0u8]));
        assert_eq!(
            ep.url(BASE),
            format!("{BASE}/identify?identificationProfileIds={a},{b}&shortAudio=false")
        );
        assert!(matches!(
            ep.payload,
            Payload::Audio { part: "identificationData", .. }
        ));
    }

    #[test]
    fn test_verify_endpoint_query() {
        let id = Uuid::new_v4();
        let ep = Endpoint::verify(id, AudioSource::bytes(vec![0u8]));
        assert_eq!(
            ep.url(BASE),
            format!("{BASE}/verify?verificationProfileId={id}")
        );
        assert!(matches!(
            ep.payload,
            Payload::Audio { part: "verificationData", .. }
        ));
    }

    #[test]
    fn test_status_endpoints_use_absolute_url() {
        let loc = OperationLocation::new("https://x/op/1");
        let ep = Endpoint::enrollment_status(&loc);
        assert_eq!(ep.url(BASE), "https://x/op/1");
        assert_eq!(ep.operation, Operation::Enroll);

        let ep = Endpoint::identification_status(&loc);
        assert_eq!(ep.url(BASE), "https://x/op/1");
        assert_eq!(ep.operation, Operation::Identify);
    }

    #[test]
    fn test_phrases_endpoint() {
        let ep = Endpoint::phrases("en-us");
        assert_eq!(ep.url(BASE), format!("{BASE}/verificationPhrases?locale=en-us"));
    }
}
