//! Speaker verification service (1:1 recognition).

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    binding::{AudioSource, Endpoint, Mode},
    error::Result,
    http::HttpClient,
    types::{
        CreateProfileResponse, Enrollment, Profile, ProfileLocale, Verification,
        VerificationPhrase,
    },
};

/// Speaker verification service.
///
/// Unlike identification, verification enrollments and verifications are
/// synchronous: the result arrives in the HTTP response itself, with no
/// operation location to poll. That split is a service contract.
pub struct VerificationService {
    http: Arc<HttpClient>,
}

impl VerificationService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates a verification profile for the given locale.
    pub async fn create_profile(&self, locale: &str) -> Result<CreateProfileResponse> {
        let endpoint = Endpoint::create_profile(Mode::Verification, &ProfileLocale::new(locale))?;
        self.http.json(endpoint).await
    }

    /// Deletes a verification profile.
    pub async fn delete_profile(&self, id: Uuid) -> Result<()> {
        self.http
            .unit(Endpoint::delete_profile(Mode::Verification, id))
            .await
    }

    /// Gets a single verification profile.
    pub async fn get_profile(&self, id: Uuid) -> Result<Profile> {
        self.http
            .json(Endpoint::get_profile(Mode::Verification, id))
            .await
    }

    /// Lists all verification profiles under the subscription.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.http
            .json(Endpoint::list_profiles(Mode::Verification))
            .await
    }

    /// Submits one enrollment recording for a profile.
    ///
    /// The audio must contain one of the supported passphrases (see
    /// [`phrases`]). The enrollment result is returned synchronously.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn run(client: speakerrec::Client, id: uuid::Uuid) -> speakerrec::Result<()> {
    /// use speakerrec::AudioSource;
    ///
    /// let enrollment = client
    ///     .verification()
    ///     .enroll(AudioSource::file("passphrase.wav"), id)
    ///     .await?;
    /// println!("{:?}", enrollment.enrollment_status);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`phrases`]: Self::phrases
    pub async fn enroll(&self, audio: AudioSource, id: Uuid) -> Result<Enrollment> {
        let endpoint = Endpoint::enroll(Mode::Verification, id, None, audio);
        self.http.json(endpoint).await
    }

    /// Verifies that the audio matches the enrolled profile.
    pub async fn verify(&self, audio: AudioSource, id: Uuid) -> Result<Verification> {
        self.http.json(Endpoint::verify(id, audio)).await
    }

    /// Discards all enrollments of a profile.
    pub async fn reset_enrollments(&self, id: Uuid) -> Result<()> {
        self.http
            .unit(Endpoint::reset_enrollments(Mode::Verification, id))
            .await
    }

    /// Lists the passphrases supported for a locale.
    pub async fn phrases(&self, locale: &str) -> Result<Vec<VerificationPhrase>> {
        self.http.json(Endpoint::phrases(locale)).await
    }
}
