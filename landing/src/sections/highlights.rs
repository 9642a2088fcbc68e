use leptos::prelude::*;

use crate::content::{POSTS, Post};

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section id="highlights" class="safe-viewport py-32">
            <h2 class="section-heading">"Today's Highlights"</h2>
            <div class="grid grid-cols-3 gap-8">
                {POSTS.iter().map(|post| view! { <PostCard post=*post /> }).collect::<Vec<_>>()}
            </div>
            <div class="text-center pt-32">
                <a href="#" class="btn btn-lg bg-primary text-black uppercase">"Discover More"</a>
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: Post) -> impl IntoView {
    view! {
        <article class="post-card flex flex-col gap-6">
            <div class="bg-gray-200 rounded-4xl w-full aspect-[8/5]"></div>
            <header class="text-xl font-bold">{post.title}</header>
            <div>
                <p class="text-sm">{post.intro}</p>
            </div>
        </article>
    }
}
