pub mod edit_post;
pub mod not_found;
pub mod posts;

pub use posts::PostsPage;
