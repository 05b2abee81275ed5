//! Site information entity: the public-facing text blocks of the pantry site.

/// Textual content shown on the public site.
///
/// An empty string means the block has been cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteInfo {
    pub about_text: String,
    pub programs_overview: String,
    pub hours_text: String,
    pub location_text: String,
    pub contact_text: String,
    pub what_to_bring_text: String,
}

impl SiteInfo {
    /// Overwrites every field present in `patch` and returns how many were written.
    ///
    /// A field is counted as written even if the new text equals the old one.
    pub fn apply(&mut self, patch: SiteInfoPatch) -> usize {
        let SiteInfoPatch {
            about_text,
            programs_overview,
            hours_text,
            location_text,
            contact_text,
            what_to_bring_text,
        } = patch;

        [
            (&mut self.about_text, about_text),
            (&mut self.programs_overview, programs_overview),
            (&mut self.hours_text, hours_text),
            (&mut self.location_text, location_text),
            (&mut self.contact_text, contact_text),
            (&mut self.what_to_bring_text, what_to_bring_text),
        ]
        .into_iter()
        .filter_map(|(slot, value)| value.map(|v| *slot = v))
        .count()
    }
}

/// Partial update for [`SiteInfo`].
///
/// `None` fields are left unchanged; `Some("")` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteInfoPatch {
    pub about_text: Option<String>,
    pub programs_overview: Option<String>,
    pub hours_text: Option<String>,
    pub location_text: Option<String>,
    pub contact_text: Option<String>,
    pub what_to_bring_text: Option<String>,
}

impl SiteInfoPatch {
    pub fn is_empty(&self) -> bool {
        self.about_text.is_none()
            && self.programs_overview.is_none()
            && self.hours_text.is_none()
            && self.location_text.is_none()
            && self.contact_text.is_none()
            && self.what_to_bring_text.is_none()
    }
}
