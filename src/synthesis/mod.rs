//! Speech-synthesis upstream: voice selection, backend trait, ElevenLabs
//! client, and the alternate-voice fallback.
//!
//! Each gender maps to one primary and one alternate ElevenLabs voice id.
//! A synthesis attempt that returns an empty audio body counts as a failure
//! even when the HTTP status was a success.

pub mod client;
pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::ElevenLabsClient;
pub use error::SynthesisError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockSynthesisBackend;

use async_trait::async_trait;
use std::str::FromStr;
use tracing::warn;

/// ElevenLabs voice ids, one primary and one alternate per gender.
pub const MALE_PRIMARY_VOICE_ID: &str = "pNInz6obpgDQGcFmaJgB";
pub const MALE_ALTERNATE_VOICE_ID: &str = "TxGEqnHWrfWFTfGW9XjX";
pub const FEMALE_PRIMARY_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
pub const FEMALE_ALTERNATE_VOICE_ID: &str = "EXAVITQu4vr4xnSDxMaL";

/// Voice selector carried by the inbound `voiceType` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VoiceGender {
    #[default]
    Male,
    Female,
}

impl VoiceGender {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceGender::Male => "male",
            VoiceGender::Female => "female",
        }
    }

    /// Returns the primary voice id for this gender.
    #[inline]
    pub fn primary_voice_id(&self) -> &'static str {
        match self {
            VoiceGender::Male => MALE_PRIMARY_VOICE_ID,
            VoiceGender::Female => FEMALE_PRIMARY_VOICE_ID,
        }
    }

    /// Returns the alternate voice id tried when the primary fails.
    #[inline]
    pub fn alternate_voice_id(&self) -> &'static str {
        match self {
            VoiceGender::Male => MALE_ALTERNATE_VOICE_ID,
            VoiceGender::Female => FEMALE_ALTERNATE_VOICE_ID,
        }
    }
}

impl FromStr for VoiceGender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(VoiceGender::Male),
            "female" => Ok(VoiceGender::Female),
            other => Err(format!("unknown voice type '{other}'")),
        }
    }
}

impl std::fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the ordered voice candidates for a gender: primary, then
/// alternate.
pub fn voice_candidates(gender: VoiceGender) -> [&'static str; 2] {
    [gender.primary_voice_id(), gender.alternate_voice_id()]
}

/// A speech-synthesis upstream.
#[async_trait]
pub trait SynthesisBackend: Send + Sync {
    /// Synthesizes `text` with the given voice id, returning raw audio
    /// bytes. A zero-length body must be reported as
    /// [`SynthesisError::EmptyAudio`], never as success.
    async fn synthesize(&self, voice_id: &str, text: &str) -> Result<Vec<u8>, SynthesisError>;
}

/// Tries the primary then the alternate voice for `gender`, returning the
/// winning voice id and audio bytes.
///
/// Exactly two attempts at most. The last attempt's error is surfaced; the
/// caller decides whether that degrades or fails the request.
pub async fn synthesize_with_fallback<S>(
    backend: &S,
    gender: VoiceGender,
    text: &str,
) -> Result<(&'static str, Vec<u8>), SynthesisError>
where
    S: SynthesisBackend + ?Sized,
{
    let mut last_error = None;

    for voice_id in voice_candidates(gender) {
        match backend.synthesize(voice_id, text).await {
            Ok(audio) => return Ok((voice_id, audio)),
            Err(e) => {
                warn!(voice_id, error = %e, "synthesis attempt failed");
                last_error = Some(e);
            }
        }
    }

    // voice_candidates always yields two entries, so an error was recorded.
    Err(last_error.unwrap_or(SynthesisError::EmptyAudio))
}
