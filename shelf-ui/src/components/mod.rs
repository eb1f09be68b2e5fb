//! Shared UI components

pub mod add_book_modal;
pub mod book_card;
pub mod button;
pub mod catalog;
pub mod icons;
pub mod text_input;

pub use add_book_modal::AddBookModal;
pub use book_card::BookCard;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use catalog::CatalogView;
pub use icons::{ExternalLinkIcon, ImageIcon, PlusIcon, TrashIcon, XIcon};
pub use text_input::TextInput;
