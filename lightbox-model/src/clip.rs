use url::Url;

use crate::error::ModelError;

/// Stable identifier of a clip as published by the page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClipId(String);

impl ClipId {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::InvalidClip("empty clip id".into()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClipId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One playable item of a sequence. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clip {
    id: ClipId,
    media_source: Url,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    poster: Option<Url>,
}

impl Clip {
    pub fn new(id: ClipId, media_source: Url, poster: Option<Url>) -> Self {
        Self {
            id,
            media_source,
            poster,
        }
    }

    /// Build a clip from raw strings, validating the id and both URLs.
    pub fn parse(
        id: &str,
        media_source: &str,
        poster: Option<&str>,
    ) -> Result<Self, ModelError> {
        let id = ClipId::new(id)?;
        let media_source = Url::parse(media_source).map_err(|err| {
            ModelError::InvalidClip(format!(
                "clip {id}: bad media source {media_source:?}: {err}"
            ))
        })?;
        let poster = poster
            .map(|raw| {
                Url::parse(raw).map_err(|err| {
                    ModelError::InvalidClip(format!(
                        "clip {id}: bad poster {raw:?}: {err}"
                    ))
                })
            })
            .transpose()?;
        Ok(Self::new(id, media_source, poster))
    }

    pub fn id(&self) -> &ClipId {
        &self.id
    }

    pub fn media_source(&self) -> &Url {
        &self.media_source
    }

    pub fn poster(&self) -> Option<&Url> {
        self.poster.as_ref()
    }
}
