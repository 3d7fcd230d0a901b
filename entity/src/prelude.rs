pub use super::game::Entity as Game;
pub use super::loadout::Entity as Loadout;
pub use super::user::Entity as User;
