//! Speaker identification service (1:N recognition).

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    binding::{AudioSource, Endpoint, Mode},
    error::Result,
    http::HttpClient,
    types::{
        CreateProfileResponse, EnrollmentOperation, IdentificationOperation, OperationLocation,
        Profile, ProfileLocale,
    },
};

/// Speaker identification service.
///
/// Enrollment and identification are long-running on the service side:
/// both return an [`OperationLocation`] immediately and the actual result
/// must be polled via the matching status call. The polling loop and its
/// cadence belong to the caller; status checks are pure reads and safe to
/// repeat concurrently.
pub struct IdentificationService {
    http: Arc<HttpClient>,
}

impl IdentificationService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates an identification profile for the given locale.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn run(client: speakerrec::Client) -> speakerrec::Result<()> {
    /// let created = client.identification().create_profile("en-us").await?;
    /// println!("profile: {}", created.profile_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_profile(&self, locale: &str) -> Result<CreateProfileResponse> {
        let endpoint =
            Endpoint::create_profile(Mode::Identification, &ProfileLocale::new(locale))?;
        self.http.json(endpoint).await
    }

    /// Deletes an identification profile.
    pub async fn delete_profile(&self, id: Uuid) -> Result<()> {
        self.http
            .unit(Endpoint::delete_profile(Mode::Identification, id))
            .await
    }

    /// Gets a single identification profile.
    pub async fn get_profile(&self, id: Uuid) -> Result<Profile> {
        self.http
            .json(Endpoint::get_profile(Mode::Identification, id))
            .await
    }

    /// Lists all identification profiles under the subscription.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.http
            .json(Endpoint::list_profiles(Mode::Identification))
            .await
    }

    /// Submits enrollment audio for a profile.
    ///
    /// Returns the location to poll with [`check_enrollment_status`];
    /// the response itself carries no body. `short_audio` relaxes the
    /// minimum audio-duration requirement.
    ///
    /// A success response without an `Operation-Location` header is
    /// surfaced as [`Error::Enrollment`], so an accepted submission is
    /// not a guarantee of a pollable location.
    ///
    /// [`check_enrollment_status`]: Self::check_enrollment_status
    /// [`Error::Enrollment`]: crate::Error::Enrollment
    pub async fn enroll(
        &self,
        audio: AudioSource,
        id: Uuid,
        short_audio: bool,
    ) -> Result<OperationLocation> {
        let endpoint = Endpoint::enroll(Mode::Identification, id, Some(short_audio), audio);
        self.http.location(endpoint).await
    }

    /// Polls a pending enrollment job.
    pub async fn check_enrollment_status(
        &self,
        location: &OperationLocation,
    ) -> Result<EnrollmentOperation> {
        self.http.json(Endpoint::enrollment_status(location)).await
    }

    /// Submits audio to identify the speaker among the given profiles.
    ///
    /// The profile ids are sent as a comma-joined list, in order. Returns
    /// the location to poll with [`check_identification_status`]. A
    /// success response without an `Operation-Location` header is
    /// surfaced as [`Error::Identification`].
    ///
    /// [`check_identification_status`]: Self::check_identification_status
    /// [`Error::Identification`]: crate::Error::Identification
    pub async fn identify(
        &self,
        audio: AudioSource,
        ids: &[Uuid],
        short_audio: bool,
    ) -> Result<OperationLocation> {
        let endpoint = Endpoint::identify(ids, short_audio, audio);
        self.http.location(endpoint).await
    }

    /// Polls a pending identification job.
    pub async fn check_identification_status(
        &self,
        location: &OperationLocation,
    ) -> Result<IdentificationOperation> {
        self.http
            .json(Endpoint::identification_status(location))
            .await
    }

    /// Discards all enrollments of a profile.
    pub async fn reset_enrollments(&self, id: Uuid) -> Result<()> {
        self.http
            .unit(Endpoint::reset_enrollments(Mode::Identification, id))
            .await
    }
}
