pub use super::battle::Entity as Battle;
