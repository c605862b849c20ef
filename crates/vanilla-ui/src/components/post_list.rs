//! Blog post listing

use leptos::prelude::*;
use vanilla_core::{Post, PostsState};

use super::{Alert, AlertKind};

/// Loading, error, empty, and populated states of the posts store.
///
/// A failed refresh keeps showing the posts from the last success under
/// the error banner.
#[component]
pub fn PostList(posts: RwSignal<PostsState>) -> impl IntoView {
    view! {
        <div class="space-y-8">
            {move || {
                let state = posts.get();
                let banner = state
                    .error
                    .clone()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> });
                let body = if state.is_loading && state.posts.is_empty() {
                    view! { <p class="text-center text-gray-500" aria-busy="true">"Loading posts…"</p> }
                        .into_any()
                } else if state.posts.is_empty() {
                    view! {
                        <Alert kind=AlertKind::Info message="No posts available at the moment. Please check back later." />
                    }
                        .into_any()
                } else {
                    state.posts.into_iter().map(post_card).collect_view().into_any()
                };
                view! {
                    {banner}
                    {body}
                }
            }}
        </div>
    }
}

fn post_card(post: Post) -> impl IntoView {
    view! {
        <article class="bg-white dark:bg-gray-800 rounded-lg shadow-md overflow-hidden">
            <div class="p-6">
                <div class="flex justify-between items-center mb-2">
                    <span class="text-sm font-medium text-indigo-600 dark:text-indigo-400">
                        {format!("Post #{}", post.id)}
                    </span>
                    <span class="text-sm text-gray-500 dark:text-gray-400">
                        {format!("User ID: {}", post.user_id)}
                    </span>
                </div>
                <h2 class="text-xl font-bold mb-3">{post.title}</h2>
                <p class="whitespace-pre-line text-gray-600 dark:text-gray-300">{post.body}</p>
            </div>
        </article>
    }
}
