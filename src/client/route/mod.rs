mod add_book;
mod book_detail;
mod edit_book;
mod home;
mod landing;
mod not_found;

pub use add_book::AddBook;
pub use book_detail::BookDetail;
pub use edit_book::EditBook;
pub use home::Home;
pub use landing::Landing;
pub use not_found::NotFound;
