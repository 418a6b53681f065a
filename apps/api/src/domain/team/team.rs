use super::value_objects::TeamDetails;

/// Identifier assigned to a team by the persistence layer
pub type TeamId = i64;

/// Team aggregate root
///
/// A team is a named group with a home address and a maximum capacity.
///
/// # Invariants
/// - Name and address are never blank
/// - Size is at least 2
/// - The id is assigned once by the repository and never changes
///
/// # Example
/// ```
/// use sporting_api::domain::team::{Team, TeamDetails};
///
/// let details = TeamDetails::new(
///     Some("Celtics".to_string()),
///     Some("Boston".to_string()),
///     Some(10),
/// )
/// .expect("valid details");
/// let team = Team::new(details);
///
/// assert_eq!(team.id(), None);
/// assert_eq!(team.address(), "Boston");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Option<TeamId>,
    name: String,
    address: String,
    size: i32,
}

impl Team {
    /// Creates a team that has not been persisted yet
    ///
    /// The details are already validated, so construction cannot fail.
    pub fn new(details: TeamDetails) -> Self {
        let (name, address, size) = details.into_parts();
        Self {
            id: None,
            name,
            address,
            size,
        }
    }

    /// Replaces name, address and size; the id is left untouched
    pub fn apply(&mut self, details: TeamDetails) {
        let (name, address, size) = details.into_parts();
        self.name = name;
        self.address = address;
        self.size = size;
    }

    /// Returns a copy of this team carrying the id the store assigned
    ///
    /// Only repositories call this, right after an insert.
    pub(crate) fn with_id(self, id: TeamId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    // ===== Getters =====

    /// Returns the team's ID, or `None` if it was never saved
    pub fn id(&self) -> Option<TeamId> {
        self.id
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

    /// Reconstructs a Team from persistence layer data
    ///
    /// This method bypasses validation since the row was validated before
    /// it was stored.
    pub fn from_persistence(id: TeamId, name: String, address: String, size: i32) -> Self {
        Self {
            id: Some(id),
            name,
            address,
            size,
        }
    }
}
