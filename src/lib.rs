//! Speaker Recognition API SDK for Rust.
//!
//! This crate provides a client for the Azure Cognitive Services Speaker
//! Recognition REST API: profile management, enrollment, 1:1 verification
//! and 1:N identification, plus status polling for the long-running
//! identification-mode jobs.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn run() -> speakerrec::Result<()> {
//! use speakerrec::{AudioSource, Client};
//!
//! let client = Client::new("your-subscription-key")?;
//!
//! let created = client.identification().create_profile("en-us").await?;
//! let location = client
//!     .identification()
//!     .enroll(AudioSource::file("sample.wav"), created.profile_id, false)
//!     .await?;
//!
//! let operation = client
//!     .identification()
//!     .check_enrollment_status(&location)
//!     .await?;
//! println!("{:?}", operation.status);
//! # Ok(())
//! # }
//! ```

mod binding;
mod client;
mod error;
mod http;
mod identification;
mod types;
mod verification;

pub use binding::AudioSource;
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Operation, Result};
pub use identification::IdentificationService;
pub use types::{
    Confidence, CreateProfileResponse, Enrollment, EnrollmentOperation, EnrollmentResult,
    EnrollmentStatus, IdentificationOperation, IdentificationResult, OperationLocation,
    OperationStatus, Profile, ProfileLocale, Verification, VerificationPhrase, VerificationResult,
};
pub use verification::VerificationService;
