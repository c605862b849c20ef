//! Blog page component

use leptos::prelude::*;
use vanilla_core::PostsState;

use crate::components::PostList;

#[component]
pub fn Blog(posts: RwSignal<PostsState>) -> impl IntoView {
    view! {
        <div class="p-6 max-w-4xl mx-auto">
            <div class="mb-8 text-center">
                <h1 class="text-3xl font-extrabold sm:text-4xl">"Our Blog"</h1>
                <p class="mt-3 text-xl text-gray-500 dark:text-gray-300">"Latest news and updates"</p>
            </div>
            <PostList posts=posts />
        </div>
    }
}
