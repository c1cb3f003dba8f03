//! Forum page: discussion threads with a create-post dialog and a thread
//! view listing replies.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::http::ApiError;
use crate::net::types::{ForumComment, ForumPost, NewForumPost};

#[component]
pub fn ForumPage() -> impl IntoView {
    let posts = LocalResource::new(|| crate::net::api::fetch_forum_posts());

    let show_create = RwSignal::new(false);
    let on_cancel = Callback::new(move |()| show_create.set(false));
    let selected = RwSignal::new(None::<ForumPost>);

    view! {
        <div class="forum-page">
            <Navbar/>
            <header class="forum-page__header">
                <h1>"Forum"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ Nouveau sujet"
                </button>
            </header>

            {move || match selected.get() {
                Some(post) => {
                    view! { <PostThread post=post on_back=Callback::new(move |()| selected.set(None))/> }
                        .into_any()
                }
                None => {
                    view! {
                        <Suspense fallback=move || view! { <p>"Chargement du forum..."</p> }>
                            {move || {
                                posts
                                    .get()
                                    .map(|result| match result {
                                        Ok(list) => {
                                            if list.is_empty() {
                                                view! { <p class="forum-page__empty">"Aucun sujet pour le moment. Lancez la discussion !"</p> }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <div class="forum-page__posts">
                                                        {list
                                                            .into_iter()
                                                            .map(|post| {
                                                                let opened = post.clone();
                                                                view! {
                                                                    <PostRow
                                                                        post=post
                                                                        on_open=Callback::new(move |()| {
                                                                            selected.set(Some(opened.clone()));
                                                                        })
                                                                    />
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </div>
                                                }
                                                    .into_any()
                                            }
                                        }
                                        Err(e) => view! { <p class="forum-page__error">{e.message()}</p> }.into_any(),
                                    })
                            }}
                        </Suspense>
                    }
                        .into_any()
                }
            }}

            <Show when=move || show_create.get()>
                <CreatePostDialog on_cancel=on_cancel posts=posts/>
            </Show>
        </div>
    }
}

#[component]
fn PostRow(post: ForumPost, on_open: Callback<()>) -> impl IntoView {
    let author = post
        .author
        .as_ref()
        .map(|a| a.full_name.clone())
        .unwrap_or_else(|| "Anonyme".to_owned());
    view! {
        <div class="forum-post" on:click=move |_| on_open.run(())>
            <div class="forum-post__main">
                <h3 class="forum-post__title">{post.title}</h3>
                <p class="forum-post__excerpt">{post.content}</p>
            </div>
            <div class="forum-post__meta">
                <span class="forum-post__author">{author}</span>
                <span class="forum-post__comments">{format!("{} réponses", post.comment_count)}</span>
            </div>
        </div>
    }
}

/// Thread view: the post body, its replies, and the reply form.
#[component]
fn PostThread(post: ForumPost, on_back: Callback<()>) -> impl IntoView {
    let post_id = post.id;
    let comments = LocalResource::new(move || crate::net::api::fetch_post_comments(post_id));

    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get().trim().to_owned();
        if text.is_empty() {
            error.set(Some("Votre réponse est vide.".to_owned()));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_post_comment(post_id, &text).await {
                    Ok(_) => {
                        draft.set(String::new());
                        comments.refetch();
                    }
                    Err(e) => error.set(Some(e.message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
            let _ = &comments;
        }
    };

    let author = post
        .author
        .as_ref()
        .map(|a| a.full_name.clone())
        .unwrap_or_else(|| "Anonyme".to_owned());

    view! {
        <article class="forum-thread">
            <button class="btn btn--link" on:click=move |_| on_back.run(())>
                "Retour au forum"
            </button>
            <header class="forum-thread__header">
                <h2>{post.title.clone()}</h2>
                <span class="forum-thread__author">{author}</span>
            </header>
            <p class="forum-thread__content">{post.content.clone()}</p>

            <h3 class="forum-thread__replies-title">"Réponses"</h3>
            <Suspense fallback=move || view! { <p>"Chargement des réponses..."</p> }>
                {move || {
                    comments
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! { <p class="forum-thread__empty">"Pas encore de réponse."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="forum-thread__replies">
                                            {list
                                                .into_iter()
                                                .map(|c| view! { <CommentRow comment=c/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(e) => view! { <p class="forum-thread__error">{e.message()}</p> }.into_any(),
                        })
                }}
            </Suspense>

            <form class="forum-thread__reply" on:submit=on_submit>
                <label class="forum-thread__label">
                    "Votre réponse"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {move || {
                    error
                        .get()
                        .map(|msg| view! { <p class="dialog__error">{msg}</p> })
                }}
                <button class="btn btn--primary" type="submit">
                    "Répondre"
                </button>
            </form>
        </article>
    }
}

#[component]
fn CommentRow(comment: ForumComment) -> impl IntoView {
    let author = comment
        .author
        .as_ref()
        .map(|a| a.full_name.clone())
        .unwrap_or_else(|| "Anonyme".to_owned());
    view! {
        <div class="forum-comment">
            <span class="forum-comment__author">{author}</span>
            <p class="forum-comment__content">{comment.content}</p>
        </div>
    }
}

/// Modal dialog for starting a new thread.
#[component]
fn CreatePostDialog(
    on_cancel: Callback<()>,
    posts: LocalResource<Result<Vec<ForumPost>, ApiError>>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let new_post = NewForumPost {
            title: title.get().trim().to_owned(),
            content: content.get().trim().to_owned(),
            category_id: None,
        };
        if new_post.title.is_empty() || new_post.content.is_empty() {
            error.set(Some("Le titre et le contenu sont obligatoires.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_forum_post(&new_post).await {
                    Ok(_) => {
                        posts.refetch();
                        on_cancel.run(());
                    }
                    Err(e) => error.set(Some(e.message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = new_post;
            let _ = &posts;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Nouveau sujet"</h2>
                <label class="dialog__label">
                    "Titre"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Contenu"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {move || {
                    error
                        .get()
                        .map(|msg| view! { <p class="dialog__error">{msg}</p> })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Publier"
                    </button>
                </div>
            </div>
        </div>
    }
}
