pub mod memo;

pub use memo::Entity as Memo;
