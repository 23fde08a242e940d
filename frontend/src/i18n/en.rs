pub mod common {
    pub const LOADING: &str = "Loading...";
}

pub mod toast {
    pub const CLOSE_ARIA: &str = "Dismiss notification";
}

pub mod edit_post {
    pub const KICKER: &str = "Edit";
    pub const TITLE_TEMPLATE: &str = "Post #{}";
    pub const LOADING_POST: &str = "Loading post...";
    pub const TITLE_LABEL: &str = "Title";
    pub const TITLE_PLACEHOLDER: &str = "Post title";
    pub const CONTENT_LABEL: &str = "Content";
    pub const CONTENT_PLACEHOLDER: &str = "Write something...";
    pub const CATEGORY_LABEL: &str = "Category";
    pub const SUBMIT: &str = "Update post";
    pub const SUBMITTING: &str = "Updating...";
    pub const BACK: &str = "Back to posts";

    pub const INVALID_TITLE: &str = "Error";
    pub const INVALID_DESCRIPTION: &str = "form is not valid";
    pub const FAILURE_TITLE: &str = "Error";
    pub const SUCCESS_TITLE: &str = "Success";
    pub const SUCCESS_DESCRIPTION: &str = "Post updated successfully";
}

pub mod category_picker {
    pub const PLACEHOLDER: &str = "Select a category";
    pub const UNKNOWN_TEMPLATE: &str = "Category #{}";
}

pub mod posts_page {
    pub const KICKER: &str = "Posts";
    pub const TITLE: &str = "All posts";
    pub const EMPTY: &str = "No posts yet.";
    pub const EDIT: &str = "Edit";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const DESCRIPTION: &str = "The page you are looking for does not exist.";
}
