use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use js_sys::Date;
use post_editor_shared::{Category, Post, PostId, PostListItem, PostsApi, UpdatePostRequest};

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
#[cfg(feature = "mock")]
use crate::models;

/// Browser-side implementation of the posts resource.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpPostsApi;

#[async_trait(?Send)]
impl PostsApi for HttpPostsApi {
    async fn fetch_post(&self, id: PostId) -> Result<Post, String> {
        fetch_post(id).await
    }

    async fn update_post(&self, id: PostId, body: &UpdatePostRequest) -> Result<(), String> {
        update_post(id, body).await
    }
}

/// 获取单篇文章
pub async fn fetch_post(id: PostId) -> Result<Post, String> {
    #[cfg(feature = "mock")]
    {
        return models::get_mock_post(id).ok_or_else(|| "HTTP error: 404".to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/posts/{}", API_BASE, id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}

/// 更新文章（PATCH，部分字段）
pub async fn update_post(id: PostId, body: &UpdatePostRequest) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        return models::update_mock_post(id, body);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/posts/{}", API_BASE, id);
        let response = Request::patch(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;
        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }
        Ok(())
    }
}

/// 获取文章列表。列表缓存失效后会重新请求，所以绕过浏览器缓存。
pub async fn fetch_posts() -> Result<Vec<PostListItem>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::get_mock_posts());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/posts?_ts={}", API_BASE, Date::now() as u64);

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}

/// 获取分类列表（分类选择器使用）
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::get_mock_categories());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/categories", API_BASE);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}
