//! Collection point aggregate.
//!
//! A collection point is a physical drop-off location together with the set
//! of item categories it accepts. Points are created by the registration
//! service and never updated or deleted; the association set is owned by the
//! point and written in the same transaction that creates it.

use serde::{Deserialize, Serialize};

/// Contact and location profile supplied when registering a point.
///
/// This is the pre-persistence input shape: it carries no identifier and no
/// image reference. [`CollectPointInput::validate`] enforces the registration
/// rules before any write happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectPointInput {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub zipcode: String,
}

/// Validation errors for collection point data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("email is not a valid address")]
    InvalidEmail,
    #[error("latitude must be a finite value between -90 and 90")]
    InvalidLatitude,
    #[error("longitude must be a finite value between -180 and 180")]
    InvalidLongitude,
    #[error("a point must accept at least one item")]
    NoItems,
}

impl PointValidationError {
    /// The offending input field, used by adapters to build structured
    /// error details.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field } => field,
            Self::InvalidEmail => "email",
            Self::InvalidLatitude => "latitude",
            Self::InvalidLongitude => "longitude",
            Self::NoItems => "items",
        }
    }
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), PointValidationError> {
    if value.trim().is_empty() {
        return Err(PointValidationError::EmptyField { field });
    }
    Ok(())
}

/// Minimal structural email check: one `@` separating non-empty halves,
/// no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@')
}

impl CollectPointInput {
    /// Check all registration rules, returning the first violation.
    pub fn validate(&self) -> Result<(), PointValidationError> {
        require_non_empty(&self.name, "name")?;
        require_non_empty(&self.email, "email")?;
        if !is_valid_email(self.email.trim()) {
            return Err(PointValidationError::InvalidEmail);
        }
        require_non_empty(&self.whatsapp, "whatsapp")?;
        require_non_empty(&self.city, "city")?;
        require_non_empty(&self.zipcode, "zipcode")?;
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PointValidationError::InvalidLatitude);
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PointValidationError::InvalidLongitude);
        }
        Ok(())
    }
}

/// Unvalidated draft for a persisted collection point record.
///
/// Repositories build drafts from database rows and from freshly inserted
/// registrations; [`CollectPoint::new`] is the only way to obtain the
/// validated aggregate.
#[derive(Debug, Clone)]
pub struct CollectPointDraft {
    pub id: i32,
    pub image: String,
    pub input: CollectPointInput,
    pub item_ids: Vec<i32>,
}

/// A registered collection point with its accepted item categories.
///
/// ## Invariants
/// - The profile satisfies [`CollectPointInput::validate`].
/// - `image` is a non-empty relative filename.
/// - `item_ids` is non-empty: the single write path always associates at
///   least one item with the point it creates.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectPoint {
    id: i32,
    name: String,
    email: String,
    whatsapp: String,
    image: String,
    latitude: f64,
    longitude: f64,
    city: String,
    zipcode: String,
    item_ids: Vec<i32>,
}

impl CollectPoint {
    /// Validated constructor.
    pub fn new(draft: CollectPointDraft) -> Result<Self, PointValidationError> {
        let CollectPointDraft {
            id,
            image,
            input,
            item_ids,
        } = draft;
        input.validate()?;
        require_non_empty(&image, "image")?;
        if item_ids.is_empty() {
            return Err(PointValidationError::NoItems);
        }
        let CollectPointInput {
            name,
            email,
            whatsapp,
            latitude,
            longitude,
            city,
            zipcode,
        } = input;
        Ok(Self {
            id,
            name,
            email,
            whatsapp,
            image,
            latitude,
            longitude,
            city,
            zipcode,
            item_ids,
        })
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn whatsapp(&self) -> &str {
        &self.whatsapp
    }

    /// Relative image filename as stored.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    /// Identifiers of the items this point accepts.
    pub fn item_ids(&self) -> &[i32] {
        &self.item_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn input() -> CollectPointInput {
        CollectPointInput {
            name: "EcoPonto A".into(),
            email: "a@x.com".into(),
            whatsapp: "911111111".into(),
            latitude: 41.14,
            longitude: -8.61,
            city: "Porto".into(),
            zipcode: "4430".into(),
        }
    }

    #[rstest]
    fn valid_input_passes(input: CollectPointInput) {
        input.validate().expect("input should be valid");
    }

    #[rstest]
    #[case::blank_name(|i: &mut CollectPointInput| i.name = "  ".into(), "name")]
    #[case::blank_whatsapp(|i: &mut CollectPointInput| i.whatsapp = String::new(), "whatsapp")]
    #[case::blank_city(|i: &mut CollectPointInput| i.city = String::new(), "city")]
    #[case::blank_zipcode(|i: &mut CollectPointInput| i.zipcode = String::new(), "zipcode")]
    #[case::bad_email(|i: &mut CollectPointInput| i.email = "not-an-email".into(), "email")]
    #[case::email_with_space(|i: &mut CollectPointInput| i.email = "a b@x.com".into(), "email")]
    #[case::lat_out_of_range(|i: &mut CollectPointInput| i.latitude = 91.0, "latitude")]
    #[case::lat_nan(|i: &mut CollectPointInput| i.latitude = f64::NAN, "latitude")]
    #[case::lng_out_of_range(|i: &mut CollectPointInput| i.longitude = -181.0, "longitude")]
    fn invalid_input_is_rejected(
        mut input: CollectPointInput,
        #[case] mutate: fn(&mut CollectPointInput),
        #[case] field: &'static str,
    ) {
        mutate(&mut input);
        let err = input.validate().expect_err("input should be rejected");
        assert_eq!(err.field(), field);
    }

    #[rstest]
    fn aggregate_requires_items(input: CollectPointInput) {
        let err = CollectPoint::new(CollectPointDraft {
            id: 1,
            image: "photo.jpg".into(),
            input,
            item_ids: vec![],
        })
        .expect_err("empty item set should be rejected");
        assert_eq!(err, PointValidationError::NoItems);
    }

    #[rstest]
    fn aggregate_requires_image(input: CollectPointInput) {
        let err = CollectPoint::new(CollectPointDraft {
            id: 1,
            image: String::new(),
            input,
            item_ids: vec![1],
        })
        .expect_err("blank image should be rejected");
        assert_eq!(err, PointValidationError::EmptyField { field: "image" });
    }

    #[rstest]
    fn aggregate_exposes_profile(input: CollectPointInput) {
        let point = CollectPoint::new(CollectPointDraft {
            id: 7,
            image: "photo.jpg".into(),
            input,
            item_ids: vec![1, 2],
        })
        .expect("valid point");
        assert_eq!(point.id(), 7);
        assert_eq!(point.city(), "Porto");
        assert_eq!(point.item_ids(), &[1, 2]);
    }
}
