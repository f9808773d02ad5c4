//! Domain entity representing a user.

/// A stored user.
///
/// `id` is assigned by the store when the user is created and never changes.
/// `name` is non-empty and unique across all users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}

/// Field users can be ordered by. Only `name` is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
}

impl SortField {
    /// Parses a `sortBy` query value. Returns `None` for unknown fields.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortField::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parses a `sortOrder` query value.
    ///
    /// `desc` and `descending` select descending order; every other value,
    /// including unrecognized ones, falls back to ascending.
    pub fn parse_lenient(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") || value.eq_ignore_ascii_case("descending") {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Ordering applied to a full listing of users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl UserSort {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Sorts users in place. Equal keys are ordered by ascending id.
    pub fn apply(&self, users: &mut [User]) {
        match (self.field, self.order) {
            (SortField::Name, SortOrder::Ascending) => {
                users.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            }
            (SortField::Name, SortOrder::Descending) => {
                users.sort_by(|a, b| b.name.cmp(&a.name).then(a.id.cmp(&b.id)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(1, "John Doe");

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "John Doe");
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!(SortField::parse("name"), Some(SortField::Name));
        assert_eq!(SortField::parse("id"), None);
        assert_eq!(SortField::parse("Name"), None);
        assert_eq!(SortField::parse(""), None);
    }

    #[test]
    fn test_sort_order_parse_lenient() {
        assert_eq!(SortOrder::parse_lenient("asc"), SortOrder::Ascending);
        assert_eq!(SortOrder::parse_lenient("ascending"), SortOrder::Ascending);
        assert_eq!(SortOrder::parse_lenient("desc"), SortOrder::Descending);
        assert_eq!(SortOrder::parse_lenient("DESCENDING"), SortOrder::Descending);
        assert_eq!(SortOrder::parse_lenient("sideways"), SortOrder::Ascending);
    }

    #[test]
    fn test_sort_default_is_name_ascending() {
        let sort = UserSort::default();

        assert_eq!(sort.field, SortField::Name);
        assert_eq!(sort.order, SortOrder::Ascending);
    }

    #[test]
    fn test_apply_orders_by_name() {
        let mut users = vec![User::new(2, "Bob"), User::new(1, "Alice"), User::new(3, "Carol")];

        UserSort::new(SortField::Name, SortOrder::Ascending).apply(&mut users);
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);

        UserSort::new(SortField::Name, SortOrder::Descending).apply(&mut users);
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Carol", "Bob", "Alice"]);
    }
}
