use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::buyer;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::validate_letters;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateBuyerRequest {
    #[validate(range(min = 10000000, max = 99999999, message = "card_number_id must have 8 digits"))]
    #[schema(example = 12345678)]
    pub card_number_id: Option<i64>,
    #[validate(custom = "validate_letters")]
    #[schema(example = "Juan")]
    pub first_name: Option<String>,
    #[validate(custom = "validate_letters")]
    #[schema(example = "Perez")]
    pub last_name: Option<String>,
}

impl CreateBuyerRequest {
    pub fn into_model(self) -> ServiceResult<buyer::Model> {
        Ok(buyer::Model {
            id: 0,
            card_number_id: require(self.card_number_id, "card_number_id")?,
            first_name: require(self.first_name, "first_name")?,
            last_name: require(self.last_name, "last_name")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateBuyerRequest {
    #[validate(range(min = 10000000, max = 99999999, message = "card_number_id must have 8 digits"))]
    pub card_number_id: Option<i64>,
    #[validate(custom = "validate_letters")]
    pub first_name: Option<String>,
    #[validate(custom = "validate_letters")]
    pub last_name: Option<String>,
}

impl Patch<buyer::Model> for UpdateBuyerRequest {
    fn apply_to(self, target: &mut buyer::Model) {
        apply_patch!(self => target; card_number_id, first_name, last_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed = serde_json::from_str::<CreateBuyerRequest>(
            r#"{"card_number_id":12345678,"first_name":"Juan","last_name":"Perez","unknown_field":"x"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn client_supplied_id_is_an_unknown_field() {
        let parsed = serde_json::from_str::<UpdateBuyerRequest>(r#"{"id":4,"last_name":"Garcia"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_attribute_is_unprocessable() {
        let request = CreateBuyerRequest {
            card_number_id: Some(12345678),
            first_name: Some("Juan".into()),
            last_name: None,
        };
        assert_eq!(
            request.into_model(),
            Err(ServiceError::UnprocessableEntity("last_name is required".into()))
        );
    }

    #[test]
    fn card_number_outside_eight_digits_fails_validation() {
        let request = UpdateBuyerRequest {
            card_number_id: Some(1234567),
            ..Default::default()
        };
        let err = ServiceError::from(request.validate().unwrap_err());
        assert_eq!(
            err,
            ServiceError::UnprocessableEntity("card_number_id must have 8 digits".into())
        );
    }

    #[test]
    fn patch_touches_only_named_fields() {
        let mut stored = buyer::Model {
            id: 1,
            card_number_id: 12345678,
            first_name: "Juan".into(),
            last_name: "Perez".into(),
        };
        UpdateBuyerRequest {
            last_name: Some("Garcia".into()),
            ..Default::default()
        }
        .apply_to(&mut stored);

        assert_eq!(stored.first_name, "Juan");
        assert_eq!(stored.card_number_id, 12345678);
        assert_eq!(stored.last_name, "Garcia");
    }
}
