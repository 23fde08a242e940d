// =============== Mock 数据 ===============
//
// `mock` 构建没有后端：文章保存在线程本地的内存表里，PATCH 会真正修改它，
// 这样列表页在缓存失效后能看到更新后的标题。

use std::cell::RefCell;

use post_editor_shared::{Category, Post, PostId, PostListItem, UpdatePostRequest};

const CATEGORIES: &[(PostId, &str)] =
    &[(1, "Rust"), (2, "Web"), (3, "DevOps"), (4, "Productivity"), (5, "AI")];

thread_local! {
    static POSTS: RefCell<Vec<Post>> = RefCell::new(seed_posts());
}

fn seed_posts() -> Vec<Post> {
    let samples = [
        ("Hello", "World"),
        ("Yew 函数组件", "用 use_reducer 管理表单状态，比一堆 use_state 更好测。"),
        ("CI 缓存", "把 target 目录缓存起来，流水线从 9 分钟降到 3 分钟。"),
        ("写作节奏", "每天 25 分钟，不求多，求不断。"),
        ("Prompt 小抄", "先给例子，再给约束，最后给输出格式。"),
    ];

    samples
        .iter()
        .enumerate()
        .map(|(i, (title, content))| {
            let id = i as PostId + 1;
            Post {
                id,
                title: title.to_string(),
                content: content.to_string(),
                category_id: CATEGORIES[i % CATEGORIES.len()].0,
            }
        })
        .collect()
}

/// 返回文章列表。
pub fn get_mock_posts() -> Vec<PostListItem> {
    POSTS.with(|posts| posts.borrow().iter().cloned().map(PostListItem::from).collect())
}

/// 返回单篇文章。
pub fn get_mock_post(id: PostId) -> Option<Post> {
    POSTS.with(|posts| posts.borrow().iter().find(|p| p.id == id).cloned())
}

/// 应用一次 PATCH。
pub fn update_mock_post(id: PostId, body: &UpdatePostRequest) -> Result<(), String> {
    let category_id = body
        .category_id
        .parse::<PostId>()
        .map_err(|_| "HTTP error: 422".to_string())?;

    POSTS.with(|posts| {
        let mut posts = posts.borrow_mut();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| "HTTP error: 404".to_string())?;
        post.title = body.title.clone();
        post.content = body.content.clone();
        post.category_id = category_id;
        Ok(())
    })
}

/// 返回分类列表。
pub fn get_mock_categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name)| Category {
            id: *id,
            name: name.to_string(),
        })
        .collect()
}
