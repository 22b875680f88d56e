//! Wire shapes of request bodies and their conversion into validated payloads.
//!
//! Every field is optional at the serde level so that a missing field is
//! reported alongside the other problems instead of failing deserialization.

use serde::Deserialize;

use crate::course_actor::{CourseCreate, CoursePatch};
use crate::domain::{CourseId, CourseState, OrderStatus, Purchase};
use crate::validation::ValidationErrors;

pub const MIN_MOBILE_CHARS: usize = 10;
pub const MIN_UTR_CHARS: usize = 12;

/// Body of `POST /api/courses` and `PATCH /api/courses/:id`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<u32>,
    pub original_price: Option<u32>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl CourseInput {
    pub fn into_create(self) -> Result<CourseCreate, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = errors.text("title", self.title);
        let description = errors.text("description", self.description);
        let price = errors.required("price", self.price);
        let original_price = errors.required("originalPrice", self.original_price);
        let duration = errors.text("duration", self.duration);
        let level = errors.text("level", self.level);
        let features = errors.required("features", self.features);
        let features = check_features(&mut errors, features);

        errors.finish(CourseCreate {
            title,
            description,
            price,
            original_price,
            duration,
            level,
            features,
            state: self.is_active.map(CourseState::from_flag).unwrap_or_default(),
        })
    }

    pub fn into_patch(self) -> Result<CoursePatch, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let patch = CoursePatch {
            title: errors.optional_text("title", self.title),
            description: errors.optional_text("description", self.description),
            price: self.price,
            original_price: self.original_price,
            duration: errors.optional_text("duration", self.duration),
            level: errors.optional_text("level", self.level),
            features: self.features.map(|features| check_features(&mut errors, features)),
            state: self.is_active.map(CourseState::from_flag),
        };
        errors.finish(patch)
    }
}

fn check_features(errors: &mut ValidationErrors, features: Vec<String>) -> Vec<String> {
    features
        .into_iter()
        .enumerate()
        .map(|(i, feature)| errors.text(&format!("features[{i}]"), Some(feature)))
        .collect()
}

/// Body of `POST /api/purchase`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub course_id: Option<CourseId>,
    pub utr_number: Option<String>,
}

impl PurchaseInput {
    pub fn into_purchase(self) -> Result<Purchase, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = errors.text("name", self.name);
        let email = errors.text("email", self.email);
        errors.email("email", &email);
        let mobile = errors.text("mobile", self.mobile);
        errors.min_chars("mobile", &mobile, MIN_MOBILE_CHARS);
        let course_id = errors.required("courseId", self.course_id);
        let utr_number = errors.text("utrNumber", self.utr_number);
        errors.min_chars("utrNumber", &utr_number, MIN_UTR_CHARS);

        errors.finish(Purchase {
            name,
            email,
            mobile,
            course_id,
            utr_number,
        })
    }
}

/// Body of `PATCH /api/orders/:id/status`.
#[derive(Debug, Default, Deserialize)]
pub struct StatusInput {
    pub status: Option<String>,
}

impl StatusInput {
    pub fn into_status(self) -> Result<OrderStatus, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let status = errors.text("status", self.status);
        if !errors.is_empty() {
            return Err(errors);
        }
        status.parse().map_err(|reason: String| ValidationErrors::single("status", reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn course_json() -> serde_json::Value {
        json!({
            "title": "Cloud Security Architecture",
            "description": "AWS, Azure, GCP",
            "price": 1599,
            "originalPrice": 25999,
            "duration": "55+ Hours",
            "level": "Expert",
            "features": ["DevSecOps", "Container Security"]
        })
    }

    fn fields(errors: &ValidationErrors) -> Vec<&str> {
        errors.errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_course_create_defaults_to_active() {
        let input: CourseInput = serde_json::from_value(course_json()).unwrap();
        let create = input.into_create().unwrap();

        assert_eq!(create.state, CourseState::Active);
        assert_eq!(create.price, 1599);
        assert_eq!(create.features, vec!["DevSecOps", "Container Security"]);
    }

    #[test]
    fn test_course_create_reports_missing_and_blank_fields() {
        let input: CourseInput = serde_json::from_value(json!({
            "title": " ",
            "price": 10,
            "features": ["ok", ""]
        }))
        .unwrap();

        let errors = input.into_create().unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["title", "description", "originalPrice", "duration", "level", "features[1]"]
        );
    }

    #[test]
    fn test_course_patch_keeps_absent_fields_unset() {
        let input: CourseInput = serde_json::from_value(json!({ "price": 1299, "isActive": false })).unwrap();
        let patch = input.into_patch().unwrap();

        assert_eq!(
            patch,
            CoursePatch {
                price: Some(1299),
                state: Some(CourseState::Inactive),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_course_patch_rejects_blank_text() {
        let input: CourseInput = serde_json::from_value(json!({ "level": "" })).unwrap();
        assert_eq!(fields(&input.into_patch().unwrap_err()), vec!["level"]);
    }

    #[test]
    fn test_purchase_thresholds() {
        let input: PurchaseInput = serde_json::from_value(json!({
            "name": "A",
            "email": "a@x",
            "mobile": "99999",
            "courseId": 1,
            "utrNumber": "SHORT"
        }))
        .unwrap();

        assert_eq!(fields(&input.into_purchase().unwrap_err()), vec!["email", "mobile", "utrNumber"]);
    }

    #[test]
    fn test_purchase_accepts_minimal_valid_submission() {
        let input: PurchaseInput = serde_json::from_value(json!({
            "name": " A ",
            "email": "a@x.com",
            "mobile": "9999999999",
            "courseId": 1,
            "utrNumber": "ABCDEF123456"
        }))
        .unwrap();

        let purchase = input.into_purchase().unwrap();
        assert_eq!(purchase.name, "A");
        assert_eq!(purchase.course_id, 1);
    }

    #[test]
    fn test_status_parsing() {
        let ok = StatusInput { status: Some("verified".to_string()) }.into_status();
        assert_eq!(ok, Ok(OrderStatus::Verified));

        let unknown = StatusInput { status: Some("shipped".to_string()) }.into_status().unwrap_err();
        assert_eq!(unknown.errors()[0].message, "unknown order status 'shipped'");

        let missing = StatusInput::default().into_status().unwrap_err();
        assert_eq!(missing.errors()[0].message, "is required");
    }
}
