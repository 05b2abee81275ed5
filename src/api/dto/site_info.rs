//! DTO for the site information update endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::SiteInfoPatch;

/// Request body for `PATCH /api/site-info`.
///
/// All fields are optional. Only provided fields are changed.
///
/// # Field semantics
///
/// Each field is tri-state on the wire:
///
/// - **Absent** (key not in JSON) → `None`, leave existing value unchanged
/// - **`null`** → `Some(None)`, also leaves the value unchanged
/// - **String** → `Some(Some(s))`, overwrite; `""` deliberately clears the text
///
/// The absent/`null` distinction is kept so callers can tell them apart, but
/// [`into_patch`](Self::into_patch) treats both as "no change".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteInfoRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub about_text: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub programs_overview: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub hours_text: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub location_text: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub contact_text: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub what_to_bring_text: Option<Option<String>>,
}

impl UpdateSiteInfoRequest {
    /// Returns true when applying this request would change nothing.
    pub fn is_empty(&self) -> bool {
        [
            &self.about_text,
            &self.programs_overview,
            &self.hours_text,
            &self.location_text,
            &self.contact_text,
            &self.what_to_bring_text,
        ]
        .into_iter()
        .all(|field| !matches!(field, Some(Some(_))))
    }

    /// Collapses the wire tri-state into a domain patch.
    pub fn into_patch(self) -> SiteInfoPatch {
        SiteInfoPatch {
            about_text: self.about_text.flatten(),
            programs_overview: self.programs_overview.flatten(),
            hours_text: self.hours_text.flatten(),
            location_text: self.location_text.flatten(),
            contact_text: self.contact_text.flatten(),
            what_to_bring_text: self.what_to_bring_text.flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_null_and_value_are_distinct() {
        let req: UpdateSiteInfoRequest = serde_json::from_value(json!({
            "hoursText": null,
            "contactText": "",
            "aboutText": "New text"
        }))
        .unwrap();

        assert_eq!(req.location_text, None);
        assert_eq!(req.hours_text, Some(None));
        assert_eq!(req.contact_text, Some(Some(String::new())));
        assert_eq!(req.about_text, Some(Some("New text".to_string())));
    }

    #[test]
    fn test_empty_payload_is_empty_request() {
        let req: UpdateSiteInfoRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, UpdateSiteInfoRequest::default());
        assert!(req.is_empty());
    }

    #[test]
    fn test_all_null_payload_is_empty_request() {
        let req: UpdateSiteInfoRequest = serde_json::from_value(json!({
            "aboutText": null,
            "programsOverview": null,
            "hoursText": null,
            "locationText": null,
            "contactText": null,
            "whatToBringText": null
        }))
        .unwrap();
        assert!(req.is_empty());
    }

    #[test]
    fn test_empty_string_is_not_empty_request() {
        let req: UpdateSiteInfoRequest =
            serde_json::from_value(json!({ "hoursText": "" })).unwrap();
        assert!(!req.is_empty());
    }

    #[test]
    fn test_into_patch() {
        let req: UpdateSiteInfoRequest = serde_json::from_value(json!({
            "whatToBringText": "Photo ID",
            "hoursText": "",
            "locationText": null
        }))
        .unwrap();

        let patch = req.into_patch();
        assert_eq!(patch.what_to_bring_text.as_deref(), Some("Photo ID"));
        assert_eq!(patch.hours_text.as_deref(), Some(""));
        assert_eq!(patch.location_text, None);
        assert_eq!(patch.about_text, None);
    }

    #[test]
    fn test_serialize_keeps_tri_state() {
        let req = UpdateSiteInfoRequest {
            about_text: Some(Some("Hi".to_string())),
            hours_text: Some(None),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "aboutText": "Hi", "hoursText": null })
        );
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let result = serde_json::from_value::<UpdateSiteInfoRequest>(json!({ "aboutText": 5 }));
        assert!(result.is_err());
    }
}
