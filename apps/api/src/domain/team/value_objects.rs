use super::validation::{validate_address, validate_name, validate_size, ValidationErrors};

/// The mutable attributes of a team, already validated
///
/// # Invariants
/// - Name is not blank
/// - Address is not blank
/// - Size is at least 2
///
/// # Example
/// ```
/// use sporting_api::domain::team::value_objects::TeamDetails;
///
/// let details = TeamDetails::new(
///     Some("Celtics".to_string()),
///     Some("Boston".to_string()),
///     Some(10),
/// )
/// .expect("valid details");
///
/// assert_eq!(details.name(), "Celtics");
/// assert_eq!(details.size(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDetails {
    name: String,
    address: String,
    size: i32,
}

impl TeamDetails {
    /// Validates raw field values and builds the value object
    ///
    /// All three fields are checked; the error lists every violation.
    pub fn new(
        name: Option<String>,
        address: Option<String>,
        size: Option<i32>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = validate_name(name).map_err(|e| errors.push(e)).ok();
        let address = validate_address(address).map_err(|e| errors.push(e)).ok();
        let size = validate_size(size).map_err(|e| errors.push(e)).ok();

        match (name, address, size) {
            (Some(name), Some(address), Some(size)) => Ok(Self {
                name,
                address,
                size,
            }),
            _ => Err(errors),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub(crate) fn into_parts(self) -> (String, String, i32) {
        (self.name, self.address, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_details() {
        let details = TeamDetails::new(
            Some("Lakers".to_string()),
            Some("Los Angeles".to_string()),
            Some(15),
        )
        .unwrap();

        assert_eq!(details.name(), "Lakers");
        assert_eq!(details.address(), "Los Angeles");
        assert_eq!(details.size(), 15);
    }

    #[test]
    fn reports_every_invalid_field() {
        let errors = TeamDetails::new(None, Some(String::new()), Some(1)).unwrap_err();

        assert_eq!(errors.field_errors().len(), 3);
        assert!(errors.has_field("name"));
        assert!(errors.has_field("address"));
        assert!(errors.has_field("size"));
    }

    #[test]
    fn reports_only_invalid_fields() {
        let errors = TeamDetails::new(
            None,
            Some("New Address".to_string()),
            Some(0),
        )
        .unwrap_err();

        assert_eq!(errors.field_errors().len(), 2);
        assert!(!errors.has_field("address"));
    }
}
